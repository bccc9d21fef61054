use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use rps_bot::OpponentKind;

use crate::config::{LoggingConfig, ResolvedOutputs};

pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub telemetry_path: PathBuf,
}

/// Telemetry lives beside the summary, named after the run and the opponent
/// so runs against different opponents never overwrite each other.
pub fn telemetry_path(
    outputs: &ResolvedOutputs,
    run_id: &str,
    opponent: OpponentKind,
) -> PathBuf {
    let dir = outputs
        .summary_md
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(format!("telemetry-{run_id}-{opponent}.jsonl"))
}

/// Routes JSON telemetry next to the summary when structured logging is on.
pub fn init_logging(
    logging: &LoggingConfig,
    outputs: &ResolvedOutputs,
    run_id: &str,
    opponent: OpponentKind,
) -> Result<Option<LoggingGuard>> {
    if !logging.enable_structured {
        return Ok(None);
    }

    let telemetry_path = telemetry_path(outputs, run_id, opponent);
    if let Some(dir) = telemetry_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating telemetry directory at {}", dir.display()))?;
    }
    let file = File::create(&telemetry_path)
        .with_context(|| format!("creating telemetry file at {}", telemetry_path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let level = logging.level().unwrap_or(Level::INFO);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .json()
        .with_current_span(true)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);

    tracing::info!(
        target: "rps_bench::logging",
        run_id,
        opponent = %opponent,
        path = %telemetry_path.display(),
        "telemetry started"
    );

    Ok(Some(LoggingGuard {
        _guard: guard,
        telemetry_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::telemetry_path;
    use crate::config::ResolvedOutputs;
    use rps_bot::OpponentKind;
    use std::path::PathBuf;

    fn outputs(summary: &str) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: PathBuf::from("out/rounds.jsonl"),
            summary_md: PathBuf::from(summary),
        }
    }

    #[test]
    fn telemetry_file_names_run_and_opponent() {
        let path = telemetry_path(
            &outputs("bench/out/r1/summary.md"),
            "r1",
            OpponentKind::Random,
        );
        assert_eq!(path, PathBuf::from("bench/out/r1/telemetry-r1-random.jsonl"));
    }

    #[test]
    fn bare_summary_name_keeps_telemetry_in_working_dir() {
        let path = telemetry_path(&outputs("summary.md"), "r2", OpponentKind::Adaptive);
        assert_eq!(path, PathBuf::from("./telemetry-r2-adaptive.jsonl"));
    }
}
