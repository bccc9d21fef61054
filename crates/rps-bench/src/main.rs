use std::path::PathBuf;

use clap::Parser;

use rps_bench::config::{BenchmarkConfig, ResolvedOutputs};
use rps_bench::logging::init_logging;
use rps_bench::runner::SimulationRunner;
use rps_bot::OpponentKind;

/// Scripted players against the rock-paper-scissors opponents.
#[derive(Debug, Parser)]
#[command(
    name = "rps-bench",
    author,
    version,
    about = "Deterministic rock-paper-scissors simulation harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of rounds each player plays.
    #[arg(long, value_name = "ROUNDS")]
    rounds: Option<usize>,

    /// Override the RNG seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration (no simulation is run).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchmarkConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(rounds) = cli.rounds {
        config.rounds = rounds;
    }

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let player_count = config.players.len();
    let run_id = config.run_id.clone();
    let rounds = config.rounds;

    println!(
        "Loaded configuration '{run_id}' with {player_count} player{} ({rounds} rounds each)",
        if player_count == 1 { "" } else { "s" }
    );

    let opponent = OpponentKind::from(config.opponent.kind);
    let logging_guard = init_logging(&config.logging, &outputs, &run_id, opponent)?;
    let runner = SimulationRunner::new(config, outputs)?;

    if cli.validate_only {
        println!("Validation-only mode: simulation skipped.");
        return Ok(());
    }

    let summary = runner.run()?;
    println!(
        "Simulation complete for '{run_id}': {} rows at {}",
        summary.rows_written,
        summary.jsonl_path.display()
    );
    for player in &summary.players {
        println!(
            "  {:<16} {:<8} opponent win rate {:.1}%",
            player.player,
            player.strategy,
            player.opponent_win_rate() * 100.0
        );
    }
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(guard) = logging_guard.as_ref() {
        println!("Telemetry log: {}", guard.telemetry_path.display());
    }

    Ok(())
}
