pub mod error;
pub mod moves;
pub mod outcome;
pub mod score;
