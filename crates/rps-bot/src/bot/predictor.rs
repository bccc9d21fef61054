//! First-order Markov model of the human player's moves.
//!
//! The model keeps one weight row per previous move. Before a row is
//! reinforced it is scaled by the decay factor, so old evidence fades
//! geometrically and a player who changes habits is picked up again.

use super::table::TransitionTable;
use super::{ConfigError, PredictorConfig};
use rand::Rng;
use rps_core::{InvalidMove, Move};

/// What the model expects the player to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    /// No previous move to condition on yet.
    ColdStart,
    Expected { expected: Move, counter: Move },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predictor {
    table: TransitionTable,
    last_move: Option<Move>,
    decay: f64,
    observations: u64,
}

impl Predictor {
    pub fn new(decay: f64) -> Result<Self, ConfigError> {
        PredictorConfig::new(decay).map(Self::from_config)
    }

    pub fn from_config(config: PredictorConfig) -> Self {
        Self {
            table: TransitionTable::uniform(),
            last_move: None,
            decay: config.decay(),
            observations: 0,
        }
    }

    pub fn predict(&self) -> Prediction {
        match self.last_move {
            None => Prediction::ColdStart,
            Some(previous) => {
                let expected = self.table.most_likely(previous);
                Prediction::Expected {
                    expected,
                    counter: expected.counter(),
                }
            }
        }
    }

    /// The move that beats the player's most likely next move. Only the
    /// cold-start path draws from `rng`.
    pub fn predict_counter<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        match self.predict() {
            Prediction::ColdStart => Move::random(rng),
            Prediction::Expected { counter, .. } => counter,
        }
    }

    /// Records the move the player made this round. Call exactly once per round.
    pub fn update(&mut self, observed: Move) {
        if let Some(previous) = self.last_move {
            self.table.decay_row(previous, self.decay);
            self.table.reinforce(previous, observed);
        }
        self.last_move = Some(observed);
        self.observations += 1;
    }

    pub fn update_label(&mut self, label: &str) -> Result<(), InvalidMove> {
        let observed = label.parse::<Move>()?;
        self.update(observed);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.table = TransitionTable::uniform();
        self.last_move = None;
        self.observations = 0;
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn weight(&self, previous: Move, next: Move) -> f64 {
        self.table.weight(previous, next)
    }

    pub fn row(&self, previous: Move) -> [f64; 3] {
        self.table.row(previous)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn observations(&self) -> u64 {
        self.observations
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::from_config(PredictorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{Prediction, Predictor};
    use crate::bot::ConfigError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rps_core::Move;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn constructor_rejects_bad_decay() {
        assert!(matches!(
            Predictor::new(0.0),
            Err(ConfigError::InvalidDecay { .. })
        ));
        assert!(Predictor::new(1.2).is_err());
        assert!(Predictor::new(1.0).is_ok());
    }

    #[test]
    fn fresh_predictor_is_cold() {
        let predictor = Predictor::new(0.9).expect("valid decay");
        assert_eq!(predictor.predict(), Prediction::ColdStart);
        assert_eq!(predictor.last_move(), None);
        assert_eq!(predictor.observations(), 0);
    }

    #[test]
    fn first_update_only_sets_context() {
        let mut predictor = Predictor::new(0.5).expect("valid decay");
        predictor.update(Move::Paper);
        assert_eq!(predictor.last_move(), Some(Move::Paper));
        for previous in Move::ALL {
            assert_eq!(predictor.row(previous), [1.0; 3]);
        }
    }

    #[test]
    fn repeated_move_is_countered_without_forgetting() {
        let mut predictor = Predictor::new(1.0).expect("valid decay");
        for _ in 0..5 {
            predictor.update(Move::Rock);
        }
        assert_close(predictor.weight(Move::Rock, Move::Rock), 5.0);
        assert_close(predictor.weight(Move::Rock, Move::Paper), 1.0);
        assert_close(predictor.weight(Move::Rock, Move::Scissors), 1.0);

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(predictor.predict_counter(&mut rng), Move::Paper);
    }

    #[test]
    fn decay_scales_the_whole_row_before_reinforcing() {
        let mut predictor = Predictor::new(0.5).expect("valid decay");
        predictor.update(Move::Rock);
        predictor.update(Move::Paper);
        predictor.update(Move::Rock);

        // Row rock aged once when paper followed rock.
        assert_close(predictor.weight(Move::Rock, Move::Rock), 0.5);
        assert_close(predictor.weight(Move::Rock, Move::Paper), 1.5);
        assert_close(predictor.weight(Move::Rock, Move::Scissors), 0.5);
        // Row paper aged once when rock followed paper.
        assert_close(predictor.weight(Move::Paper, Move::Rock), 1.5);
        assert_close(predictor.weight(Move::Paper, Move::Paper), 0.5);
        assert_close(predictor.weight(Move::Paper, Move::Scissors), 0.5);
        assert_eq!(predictor.row(Move::Scissors), [1.0; 3]);
        assert_eq!(predictor.last_move(), Some(Move::Rock));
    }

    #[test]
    fn reinforced_cell_is_decayed_too() {
        let mut predictor = Predictor::new(0.5).expect("valid decay");
        predictor.update(Move::Scissors);
        predictor.update(Move::Scissors);
        predictor.update(Move::Scissors);
        // (1.0 * 0.5 + 1.0) * 0.5 + 1.0
        assert_close(predictor.weight(Move::Scissors, Move::Scissors), 1.75);
        assert_close(predictor.weight(Move::Scissors, Move::Rock), 0.25);
    }

    #[test]
    fn uniform_row_counters_rock_for_any_context() {
        let mut rng = StdRng::seed_from_u64(99);
        for context in Move::ALL {
            let mut predictor = Predictor::new(0.97).expect("valid decay");
            predictor.update(context);
            assert_eq!(
                predictor.predict(),
                Prediction::Expected {
                    expected: Move::Rock,
                    counter: Move::Paper,
                }
            );
            for _ in 0..10 {
                assert_eq!(predictor.predict_counter(&mut rng), Move::Paper);
            }
        }
    }

    #[test]
    fn invalid_label_leaves_state_untouched() {
        let mut predictor = Predictor::new(0.7).expect("valid decay");
        predictor.update(Move::Rock);
        predictor.update(Move::Scissors);
        let before = predictor.clone();

        let err = predictor.update_label("lizard").expect_err("rejected");
        assert_eq!(err.value, "lizard");
        assert_eq!(predictor, before);

        predictor.update_label("Paper").expect("valid label");
        assert_eq!(predictor.last_move(), Some(Move::Paper));
    }

    #[test]
    fn reset_restores_construction_state() {
        let mut predictor = Predictor::new(0.6).expect("valid decay");
        for mv in [Move::Rock, Move::Paper, Move::Paper, Move::Scissors] {
            predictor.update(mv);
        }
        predictor.reset();
        assert_eq!(predictor, Predictor::new(0.6).expect("valid decay"));
        assert_eq!(predictor.predict(), Prediction::ColdStart);
    }

    #[test]
    fn prediction_does_not_mutate() {
        let mut predictor = Predictor::new(0.9).expect("valid decay");
        predictor.update(Move::Paper);
        predictor.update(Move::Scissors);
        let before = predictor.clone();
        let mut rng = StdRng::seed_from_u64(3);
        let _ = predictor.predict_counter(&mut rng);
        let _ = predictor.predict();
        assert_eq!(predictor, before);
    }
}
