use rand::SeedableRng;
use rand::rngs::StdRng;
use rps_core::Move;

use crate::config::StrategyConfig;

/// Stand-in for a human at the console, replaying a fixed habit.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    strategy: StrategyConfig,
    rng: StdRng,
}

impl ScriptedPlayer {
    pub fn new(strategy: StrategyConfig, seed: u64) -> Self {
        Self {
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Move for the zero-based `round`. Empty move lists fall back to rock;
    /// validated configs never contain them.
    pub fn next_move(&mut self, round: usize) -> Move {
        match &self.strategy {
            StrategyConfig::Repeat { play } => *play,
            StrategyConfig::Cycle { moves } => pick(moves, round),
            StrategyConfig::Switch {
                first,
                second,
                after,
            } => {
                if round < *after {
                    pick(first, round)
                } else {
                    pick(second, round - after)
                }
            }
            StrategyConfig::Random => Move::random(&mut self.rng),
        }
    }
}

fn pick(moves: &[Move], round: usize) -> Move {
    if moves.is_empty() {
        return Move::Rock;
    }
    moves[round % moves.len()]
}
