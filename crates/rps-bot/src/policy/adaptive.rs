use super::Policy;
use crate::bot::{Prediction, Predictor, PredictorConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rps_core::Move;
use tracing::{Level, event};

/// Plays the counter to the player's most likely next move.
#[derive(Debug, Clone)]
pub struct AdaptivePolicy {
    predictor: Predictor,
    rng: StdRng,
}

impl AdaptivePolicy {
    pub fn new(predictor: Predictor, rng: StdRng) -> Self {
        Self { predictor, rng }
    }

    pub fn with_seed(config: PredictorConfig, seed: u64) -> Self {
        Self::new(config.build(), StdRng::seed_from_u64(seed))
    }
}

impl Policy for AdaptivePolicy {
    fn name(&self) -> &'static str {
        "adaptive"
    }

    fn choose(&mut self) -> Move {
        let prediction = self.predictor.predict();
        let choice = self.predictor.predict_counter(&mut self.rng);
        log_prediction(&self.predictor, prediction, choice);
        choice
    }

    fn observe(&mut self, player: Move) {
        self.predictor.update(player);
    }

    fn reset(&mut self) {
        self.predictor.reset();
    }

    fn predictor(&self) -> Option<&Predictor> {
        Some(&self.predictor)
    }
}

fn log_prediction(predictor: &Predictor, prediction: Prediction, choice: Move) {
    if !tracing::enabled!(target: "rps_bot::predict", Level::DEBUG) {
        return;
    }

    match (prediction, predictor.last_move()) {
        (Prediction::Expected { expected, .. }, Some(context)) => {
            let row = predictor.row(context);
            event!(
                target: "rps_bot::predict",
                Level::DEBUG,
                context = %context,
                expected = %expected,
                choice = %choice,
                w_rock = row[Move::Rock.index()],
                w_paper = row[Move::Paper.index()],
                w_scissors = row[Move::Scissors.index()],
                observations = predictor.observations(),
            );
        }
        _ => {
            event!(
                target: "rps_bot::predict",
                Level::DEBUG,
                choice = %choice,
                reason = "cold_start",
            );
        }
    }
}
