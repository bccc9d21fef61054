use super::Policy;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rps_core::Move;

/// Uniformly random opponent; ignores the player's history.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self) -> Move {
        Move::random(&mut self.rng)
    }

    fn observe(&mut self, _player: Move) {}

    fn reset(&mut self) {}
}
