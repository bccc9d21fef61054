#![deny(warnings)]
pub mod game;
pub mod model;

pub use model::error::InvalidMove;
pub use model::moves::Move;
pub use model::outcome::{RoundOutcome, resolve, resolve_labels};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "rps"
    }

    pub const fn codename() -> &'static str {
        "Markov Hands"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "rps");
        assert_eq!(AppInfo::codename(), "Markov Hands");
        assert!(!AppInfo::version().is_empty());
    }
}
