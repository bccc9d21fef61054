use crate::policy::Policy;
use rps_core::Move;
use rps_core::game::record::RoundRecord;
use rps_core::game::transcript::Transcript;
use rps_core::model::score::ScoreBoard;
use tracing::{Level, event};

/// One player's sitting against one opponent, owned by whichever front end drives it.
pub struct Session {
    policy: Box<dyn Policy>,
    scores: ScoreBoard,
    transcript: Transcript,
}

impl Session {
    pub fn new(policy: Box<dyn Policy>) -> Self {
        Self {
            policy,
            scores: ScoreBoard::new(),
            transcript: Transcript::new(),
        }
    }

    /// Plays one round: the opponent commits first, then learns from `player`.
    pub fn play(&mut self, player: Move) -> RoundRecord {
        let opponent = self.policy.choose();
        let record = RoundRecord::new(self.next_round(), player, opponent);
        self.scores.record(record.outcome);
        self.transcript.push(record);
        self.policy.observe(player);

        event!(
            target: "rps_bot::session",
            Level::DEBUG,
            round = record.round,
            player = %record.player,
            opponent = %record.opponent,
            outcome = %record.outcome,
            policy = self.policy.name(),
        );

        record
    }

    /// Zeroes the score and gives the opponent a fresh memory.
    pub fn reset(&mut self) {
        self.policy.reset();
        self.scores.reset();
        self.transcript.clear();
        event!(
            target: "rps_bot::session",
            Level::INFO,
            policy = self.policy.name(),
            "session reset"
        );
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn policy(&self) -> &dyn Policy {
        self.policy.as_ref()
    }

    pub fn rounds_played(&self) -> u32 {
        self.scores.rounds()
    }

    fn next_round(&self) -> u32 {
        self.scores.rounds().saturating_add(1)
    }
}
