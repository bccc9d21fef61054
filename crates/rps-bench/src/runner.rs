use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use rps_bot::{OpponentKind, PredictorConfig, Session};
use rps_core::{Move, RoundOutcome};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{BenchmarkConfig, ResolvedOutputs, ValidationError};
use crate::strategy::ScriptedPlayer;
use crate::summary::{PlayerSummary, write_markdown};

/// Plays every configured player against a fresh opponent.
pub struct SimulationRunner {
    config: BenchmarkConfig,
    outputs: ResolvedOutputs,
    opponent: OpponentKind,
    predictor: PredictorConfig,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub rounds: usize,
    pub rows_written: usize,
    pub players: Vec<PlayerSummary>,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
}

#[derive(Debug, Serialize)]
struct RoundLogRow<'a> {
    run_id: &'a str,
    player: &'a str,
    strategy: &'static str,
    round: u32,
    player_move: Move,
    opponent_move: Move,
    outcome: RoundOutcome,
    opponent_wins: u32,
}

impl SimulationRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: BenchmarkConfig, outputs: ResolvedOutputs) -> Result<Self, RunnerError> {
        let predictor = config.opponent.predictor_config()?;
        Ok(Self {
            opponent: config.opponent.kind.into(),
            predictor,
            config,
            outputs,
        })
    }

    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let span = tracing::info_span!(
            target: "rps_bench::runner",
            "simulation",
            run_id = %self.config.run_id,
            opponent = %self.opponent,
            decay = self.predictor.decay(),
            rounds = self.config.rounds,
        );
        let _entered = span.enter();

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or(0));
        let mut rows_written = 0usize;
        let mut players = Vec::with_capacity(self.config.players.len());

        for player in &self.config.players {
            let policy_seed = rng.next_u64();
            let player_seed = rng.next_u64();
            let policy = self.opponent.spawn_policy(self.predictor, policy_seed);
            let mut session = Session::new(policy);
            let mut script = ScriptedPlayer::new(player.strategy.clone(), player_seed);
            let strategy = player.strategy.label();

            for round in 0..self.config.rounds {
                let record = session.play(script.next_move(round));
                let row = RoundLogRow {
                    run_id: &self.config.run_id,
                    player: &player.name,
                    strategy,
                    round: record.round,
                    player_move: record.player,
                    opponent_move: record.opponent,
                    outcome: record.outcome,
                    opponent_wins: session.scores().opponent_wins(),
                };
                serde_json::to_writer(&mut writer, &row)?;
                writer.write_all(b"\n")?;
                rows_written += 1;
            }

            let summary = PlayerSummary {
                player: player.name.clone(),
                strategy,
                scores: *session.scores(),
            };
            event!(
                target: "rps_bench::runner",
                Level::INFO,
                run_id = %self.config.run_id,
                player = %summary.player,
                strategy,
                opponent = %self.opponent,
                rounds = summary.scores.rounds(),
                opponent_win_rate = summary.opponent_win_rate(),
            );
            players.push(summary);
        }

        writer.flush()?;
        write_markdown(
            &self.outputs.summary_md,
            &self.config.run_id,
            self.opponent.as_str(),
            self.predictor.decay(),
            &players,
        )?;

        Ok(RunSummary {
            rounds: self.config.rounds,
            rows_written,
            players,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
        })
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ValidationError),
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize log row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}
