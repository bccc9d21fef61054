use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Keep the returned guard alive until exit
/// when logging to a file, or buffered lines are lost.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(io::stderr)
            .finish();
        // A subscriber may already be installed (tests).
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(None);
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file at {}", path.display()))?;
    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Some(guard))
}
