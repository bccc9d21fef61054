mod predictor;
mod shared;
mod table;

pub use predictor::{Prediction, Predictor};
pub use shared::SharedPredictor;
pub use table::TransitionTable;

use thiserror::Error;

/// Decay used by the learning opponent when nothing else is configured.
pub const DEFAULT_DECAY: f64 = 0.97;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("decay must lie in (0, 1] but was {value}")]
    InvalidDecay { value: f64 },
    #[error("{key} is not a number: '{raw}'")]
    Unparsable { key: &'static str, raw: String },
    #[error("{key} names no opponent: '{raw}' (expected adaptive or random)")]
    UnknownOpponent { key: &'static str, raw: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictorConfig {
    decay: f64,
}

impl PredictorConfig {
    pub fn new(decay: f64) -> Result<Self, ConfigError> {
        validate_decay(decay)?;
        Ok(Self { decay })
    }

    pub const fn decay(self) -> f64 {
        self.decay
    }

    pub fn build(self) -> Predictor {
        Predictor::from_config(self)
    }

    /// Reads `RPS_DECAY`, falling back to [`DEFAULT_DECAY`] when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    fn from_reader<F>(mut read: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let Some(raw) = read("RPS_DECAY").filter(|raw| !raw.trim().is_empty()) else {
            return Ok(Self::default());
        };
        let decay = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::Unparsable {
                key: "RPS_DECAY",
                raw: raw.clone(),
            })?;
        Self::new(decay)
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            decay: DEFAULT_DECAY,
        }
    }
}

fn validate_decay(decay: f64) -> Result<(), ConfigError> {
    // NaN fails both comparisons.
    if decay > 0.0 && decay <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDecay { value: decay })
    }
}
