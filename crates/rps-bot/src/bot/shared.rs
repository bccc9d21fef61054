use super::predictor::{Prediction, Predictor};
use parking_lot::Mutex;
use rand::Rng;
use rps_core::{InvalidMove, Move};
use std::sync::Arc;

/// A predictor handle that several callers can hold at once.
///
/// Every operation takes the single per-instance lock for its whole
/// duration, so a prediction never sees a row halfway through decay.
#[derive(Debug, Clone, Default)]
pub struct SharedPredictor {
    inner: Arc<Mutex<Predictor>>,
}

impl SharedPredictor {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            inner: Arc::new(Mutex::new(predictor)),
        }
    }

    pub fn predict(&self) -> Prediction {
        self.inner.lock().predict()
    }

    pub fn predict_counter<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        self.inner.lock().predict_counter(rng)
    }

    pub fn update(&self, observed: Move) {
        self.inner.lock().update(observed);
    }

    pub fn update_label(&self, label: &str) -> Result<(), InvalidMove> {
        self.inner.lock().update_label(label)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Copy of the current state, taken under the lock.
    pub fn snapshot(&self) -> Predictor {
        self.inner.lock().clone()
    }
}
