use std::path::PathBuf;

use clap::Parser;
use rps_bot::{ConfigError, OpponentKind, PredictorConfig};

/// Rock-paper-scissors against an opponent that learns your habits.
#[derive(Debug, Parser)]
#[command(
    name = "rps",
    author,
    version,
    about = "Rock-paper-scissors against a learning opponent"
)]
pub struct Cli {
    /// Opponent to face: adaptive (learns from your moves) or random.
    #[arg(long, value_name = "KIND")]
    pub opponent: Option<OpponentKind>,

    /// Forgetting factor in (0, 1]; 1 keeps every observation forever.
    #[arg(long, value_name = "DECAY")]
    pub decay: Option<f64>,

    /// Seed for the opponent's random choices.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write the rounds played as JSON when the session ends.
    #[arg(long, value_name = "FILE")]
    pub transcript: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Send logs to a file instead of stderr.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Resolved session settings after applying environment fallbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub opponent: OpponentKind,
    pub predictor: PredictorConfig,
    pub seed: u64,
}

impl Cli {
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let opponent = match self.opponent {
            Some(kind) => kind,
            None => OpponentKind::from_env()?,
        };
        let predictor = match self.decay {
            Some(decay) => PredictorConfig::new(decay)?,
            None => PredictorConfig::from_env()?,
        };
        let seed = self.seed.unwrap_or_else(rand::random);
        Ok(Settings {
            opponent,
            predictor,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use rps_bot::{ConfigError, OpponentKind};

    #[test]
    fn explicit_flags_win() {
        let cli = Cli::try_parse_from([
            "rps",
            "--opponent",
            "random",
            "--decay",
            "0.5",
            "--seed",
            "42",
        ])
        .expect("parses");
        let settings = cli.settings().expect("valid");
        assert_eq!(settings.opponent, OpponentKind::Random);
        assert_eq!(settings.predictor.decay(), 0.5);
        assert_eq!(settings.seed, 42);
    }

    #[test]
    fn out_of_range_decay_is_a_configuration_error() {
        let cli = Cli::try_parse_from(["rps", "--decay", "1.5"]).expect("parses");
        assert!(matches!(
            cli.settings(),
            Err(ConfigError::InvalidDecay { .. })
        ));
    }

    #[test]
    fn unknown_opponent_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["rps", "--opponent", "psychic"]).is_err());
    }
}
