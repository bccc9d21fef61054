use thiserror::Error;

/// A move-typed value that falls outside rock, paper and scissors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move '{value}': expected rock, paper, or scissors")]
pub struct InvalidMove {
    pub value: String,
}

impl InvalidMove {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
