use crate::model::error::InvalidMove;
use crate::model::moves::Move;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    PlayerWins,
    OpponentWins,
    Draw,
}

impl RoundOutcome {
    /// The same round seen from the other side of the table.
    pub const fn inverse(self) -> RoundOutcome {
        match self {
            RoundOutcome::PlayerWins => RoundOutcome::OpponentWins,
            RoundOutcome::OpponentWins => RoundOutcome::PlayerWins,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoundOutcome::PlayerWins => "player",
            RoundOutcome::OpponentWins => "opponent",
            RoundOutcome::Draw => "draw",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const fn resolve(player: Move, opponent: Move) -> RoundOutcome {
    if player as u8 == opponent as u8 {
        RoundOutcome::Draw
    } else if player.beats() as u8 == opponent as u8 {
        RoundOutcome::PlayerWins
    } else {
        RoundOutcome::OpponentWins
    }
}

/// Resolves a round from raw labels, rejecting the first label that is not a move.
pub fn resolve_labels(player: &str, opponent: &str) -> Result<RoundOutcome, InvalidMove> {
    let player = player.parse::<Move>()?;
    let opponent = opponent.parse::<Move>()?;
    Ok(resolve(player, opponent))
}
