mod adaptive;
mod random;

pub use adaptive::AdaptivePolicy;
pub use random::RandomPolicy;

use crate::bot::{ConfigError, Predictor, PredictorConfig};
use core::fmt;
use core::str::FromStr;
use rps_core::Move;

/// Unified interface for the computer opponent.
pub trait Policy: Send {
    fn name(&self) -> &'static str;

    /// Pick the opponent's move before the player's move is known.
    fn choose(&mut self) -> Move;

    /// Learn from the move the player actually made this round.
    fn observe(&mut self, player: Move);

    /// Forget everything learned so far.
    fn reset(&mut self);

    /// The underlying model, for opponents that keep one.
    fn predictor(&self) -> Option<&Predictor> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpponentKind {
    #[default]
    Adaptive,
    Random,
}

impl OpponentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            OpponentKind::Adaptive => "adaptive",
            OpponentKind::Random => "random",
        }
    }

    /// Reads `RPS_OPPONENT`, falling back to the adaptive opponent when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    fn from_reader<F>(mut read: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let Some(raw) = read("RPS_OPPONENT").filter(|raw| !raw.trim().is_empty()) else {
            return Ok(Self::default());
        };
        raw.parse().map_err(|_| ConfigError::UnknownOpponent {
            key: "RPS_OPPONENT",
            raw: raw.clone(),
        })
    }

    pub fn spawn_policy(self, config: PredictorConfig, seed: u64) -> Box<dyn Policy> {
        match self {
            OpponentKind::Adaptive => Box::new(AdaptivePolicy::with_seed(config, seed)),
            OpponentKind::Random => Box::new(RandomPolicy::with_seed(seed)),
        }
    }
}

impl FromStr for OpponentKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "adaptive" | "learning" | "ai" => Ok(OpponentKind::Adaptive),
            "random" | "easy" => Ok(OpponentKind::Random),
            other => Err(format!(
                "unknown opponent '{other}'; expected adaptive or random"
            )),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
