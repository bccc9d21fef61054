use crate::model::error::InvalidMove;
use core::fmt;
use core::str::FromStr;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// Stable iteration order; argmax ties resolve to the earliest entry.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Move::Rock),
            1 => Some(Move::Paper),
            2 => Some(Move::Scissors),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The move this one defeats.
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    pub const fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Move {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }

    pub fn try_from_index(index: usize) -> Result<Self, InvalidMove> {
        Self::from_index(index).ok_or_else(|| InvalidMove::new(index.to_string()))
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(InvalidMove::new(value)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
