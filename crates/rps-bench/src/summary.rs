use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rps_core::model::score::ScoreBoard;
use serde::Serialize;

/// Totals for one simulated player over a run.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub player: String,
    pub strategy: &'static str,
    pub scores: ScoreBoard,
}

impl PlayerSummary {
    pub fn opponent_win_rate(&self) -> f64 {
        self.scores.opponent_win_rate().unwrap_or(0.0)
    }
}

pub fn write_markdown(
    path: &Path,
    run_id: &str,
    opponent: &str,
    decay: f64,
    players: &[PlayerSummary],
) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "# Simulation `{run_id}`")?;
    writeln!(out)?;
    writeln!(out, "Opponent: **{opponent}** (decay {decay})")?;
    writeln!(out)?;
    writeln!(
        out,
        "| player | strategy | rounds | player wins | opponent wins | draws | opponent win rate |"
    )?;
    writeln!(out, "|---|---|---:|---:|---:|---:|---:|")?;
    for summary in players {
        let scores = &summary.scores;
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {:.1}% |",
            summary.player,
            summary.strategy,
            scores.rounds(),
            scores.player_wins(),
            scores.opponent_wins(),
            scores.draws(),
            summary.opponent_win_rate() * 100.0
        )?;
    }
    out.flush()
}
