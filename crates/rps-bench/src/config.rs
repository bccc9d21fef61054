use rps_bot::{OpponentKind, PredictorConfig};
use rps_core::Move;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// Round numbers and tallies are `u32`; a player never plays more than this.
pub const MAX_ROUNDS: usize = u32::MAX as usize;
const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root simulation configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BenchmarkConfig {
    pub run_id: String,
    pub rounds: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub opponent: OpponentConfig,
    pub players: Vec<PlayerConfig>,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BenchmarkConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: BenchmarkConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        if self.rounds == 0 {
            return Err(ValidationError::InvalidField {
                field: "rounds".to_string(),
                message: "number of rounds must be greater than zero".to_string(),
            });
        }
        if self.rounds > MAX_ROUNDS {
            return Err(ValidationError::InvalidField {
                field: "rounds".to_string(),
                message: format!("number of rounds must not exceed {MAX_ROUNDS}"),
            });
        }
        self.opponent.predictor_config()?;
        self.outputs.validate(&self.run_id)?;
        self.logging.normalize();
        validate_players(&self.players)?;
        Ok(())
    }

    /// Resolve output templates (e.g., `{run_id}` placeholders) into concrete paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: resolve_template(&self.run_id, &self.outputs.jsonl),
            summary_md: resolve_template(&self.run_id, &self.outputs.summary_md),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpponentChoice {
    #[default]
    Adaptive,
    Random,
}

impl From<OpponentChoice> for OpponentKind {
    fn from(choice: OpponentChoice) -> Self {
        match choice {
            OpponentChoice::Adaptive => OpponentKind::Adaptive,
            OpponentChoice::Random => OpponentKind::Random,
        }
    }
}

/// The computer side shared by every simulated player.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct OpponentConfig {
    #[serde(default)]
    pub kind: OpponentChoice,
    #[serde(default = "default_decay")]
    pub decay: f64,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            kind: OpponentChoice::default(),
            decay: default_decay(),
        }
    }
}

impl OpponentConfig {
    pub fn predictor_config(&self) -> Result<PredictorConfig, ValidationError> {
        PredictorConfig::new(self.decay).map_err(|err| ValidationError::InvalidField {
            field: "opponent.decay".to_string(),
            message: err.to_string(),
        })
    }
}

fn default_decay() -> f64 {
    PredictorConfig::default().decay()
}

/// A scripted human stand-in.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlayerConfig {
    pub name: String,
    pub strategy: StrategyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    Repeat {
        #[serde(rename = "move")]
        play: Move,
    },
    Cycle {
        moves: Vec<Move>,
    },
    Switch {
        first: Vec<Move>,
        second: Vec<Move>,
        after: usize,
    },
    Random,
}

impl StrategyConfig {
    pub const fn label(&self) -> &'static str {
        match self {
            StrategyConfig::Repeat { .. } => "repeat",
            StrategyConfig::Cycle { .. } => "cycle",
            StrategyConfig::Switch { .. } => "switch",
            StrategyConfig::Random => "random",
        }
    }

    fn validate(&self, player: &str) -> Result<(), ValidationError> {
        let empty = |field: &str| ValidationError::InvalidField {
            field: format!("players[{player}].strategy.{field}"),
            message: "move list must not be empty".to_string(),
        };
        match self {
            StrategyConfig::Cycle { moves } if moves.is_empty() => Err(empty("moves")),
            StrategyConfig::Switch { first, .. } if first.is_empty() => Err(empty("first")),
            StrategyConfig::Switch { second, .. } if second.is_empty() => Err(empty("second")),
            _ => Ok(()),
        }
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    pub jsonl: String,
    pub summary_md: String,
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        for (label, value) in [
            ("outputs.jsonl", &self.jsonl),
            ("outputs.summary_md", &self.summary_md),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "path must not be empty".to_string(),
                });
            }

            let resolved = resolve_template(run_id, value);
            if resolved.components().count() == 0 {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "resolved path is invalid".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id must not be empty".to_string(),
        });
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id may only contain alphanumeric characters, '.', '_' or '-'".to_string(),
        });
    }

    Ok(())
}

fn validate_players(players: &[PlayerConfig]) -> Result<(), ValidationError> {
    if players.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "players".to_string(),
            message: "at least one player must be specified".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for player in players {
        if player.name.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "players.name".to_string(),
                message: "player name must not be empty".to_string(),
            });
        }

        if !player.name.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
            return Err(ValidationError::InvalidField {
                field: format!("players[{}].name", player.name),
                message: "player name contains invalid characters".to_string(),
            });
        }

        if !seen.insert(player.name.as_str()) {
            return Err(ValidationError::InvalidField {
                field: "players".to_string(),
                message: format!("player name '{}' defined more than once", player.name),
            });
        }

        player.strategy.validate(&player.name)?;
    }

    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub jsonl: PathBuf,
    pub summary_md: PathBuf,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
