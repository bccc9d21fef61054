use crate::game::record::RoundRecord;
use crate::model::score::ScoreBoard;
use serde::Serialize;
use std::io::Write;

/// Ordered log of the rounds played in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    rounds: Vec<RoundRecord>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RoundRecord) {
        self.rounds.push(record);
    }

    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn tally(&self) -> ScoreBoard {
        let mut board = ScoreBoard::new();
        for record in &self.rounds {
            board.record(record.outcome);
        }
        board
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.rounds)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, &self.rounds)
    }
}
