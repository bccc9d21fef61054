use crate::model::moves::Move;
use crate::model::outcome::{RoundOutcome, resolve};
use serde::{Deserialize, Serialize};

/// One resolved round, numbered from 1 within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub player: Move,
    pub opponent: Move,
    pub outcome: RoundOutcome,
}

impl RoundRecord {
    pub const fn new(round: u32, player: Move, opponent: Move) -> Self {
        Self {
            round,
            player,
            opponent,
            outcome: resolve(player, opponent),
        }
    }
}
