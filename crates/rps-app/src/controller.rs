use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rps_bot::Session;
use rps_core::Move;
use rps_core::game::record::RoundRecord;
use rps_core::model::score::ScoreBoard;

use crate::cli::Settings;

pub struct GameController {
    session: Session,
    seed: u64,
}

impl GameController {
    pub fn new(settings: &Settings) -> Self {
        let policy = settings
            .opponent
            .spawn_policy(settings.predictor, settings.seed);
        tracing::info!(
            target: "rps_app::controller",
            opponent = %settings.opponent,
            decay = settings.predictor.decay(),
            seed = settings.seed,
            "session started"
        );
        Self {
            session: Session::new(policy),
            seed: settings.seed,
        }
    }

    pub fn play(&mut self, player: Move) -> RoundRecord {
        self.session.play(player)
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scores(&self) -> &ScoreBoard {
        self.session.scores()
    }

    pub fn opponent_name(&self) -> &'static str {
        self.session.policy().name()
    }

    pub fn score_text(&self) -> String {
        let scores = self.session.scores();
        format!(
            "Score: you {} | computer {} | draws {} ({} rounds)",
            scores.player_wins(),
            scores.opponent_wins(),
            scores.draws(),
            scores.rounds()
        )
    }

    /// Human-readable transition weights, or `None` for opponents without a model.
    pub fn table_text(&self) -> Option<String> {
        let predictor = self.session.policy().predictor()?;
        let mut text = String::from("after      rock  paper scissors\n");
        for previous in Move::ALL {
            let row = predictor.row(previous);
            let marker = if predictor.last_move() == Some(previous) {
                '*'
            } else {
                ' '
            };
            text.push_str(&format!(
                "{marker}{:<9} {:>5.2} {:>6.2} {:>8.2}\n",
                previous.as_str(),
                row[0],
                row[1],
                row[2]
            ));
        }
        Some(text)
    }

    pub fn write_transcript(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.session.transcript().write_json(&mut writer)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
