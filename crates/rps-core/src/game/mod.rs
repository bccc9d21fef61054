pub mod record;
pub mod transcript;
