use crate::model::outcome::RoundOutcome;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBoard {
    player_wins: u32,
    opponent_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self {
            player_wins: 0,
            opponent_wins: 0,
            draws: 0,
        }
    }

    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWins => self.player_wins = self.player_wins.saturating_add(1),
            RoundOutcome::OpponentWins => {
                self.opponent_wins = self.opponent_wins.saturating_add(1)
            }
            RoundOutcome::Draw => self.draws = self.draws.saturating_add(1),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub const fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub const fn opponent_wins(&self) -> u32 {
        self.opponent_wins
    }

    pub const fn draws(&self) -> u32 {
        self.draws
    }

    /// Total rounds recorded, pinned at `u32::MAX` rather than wrapping.
    pub const fn rounds(&self) -> u32 {
        self.player_wins
            .saturating_add(self.opponent_wins)
            .saturating_add(self.draws)
    }

    pub fn player_win_rate(&self) -> Option<f64> {
        rate(self.player_wins, self.rounds())
    }

    pub fn opponent_win_rate(&self) -> Option<f64> {
        rate(self.opponent_wins, self.rounds())
    }
}

fn rate(count: u32, rounds: u32) -> Option<f64> {
    (rounds > 0).then(|| count as f64 / rounds as f64)
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}
