pub mod bot;
pub mod policy;
pub mod session;

pub use bot::{
    ConfigError, Prediction, Predictor, PredictorConfig, SharedPredictor, TransitionTable,
};
pub use policy::{AdaptivePolicy, OpponentKind, Policy, RandomPolicy};
pub use session::Session;
