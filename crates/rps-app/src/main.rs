#![deny(warnings)]

use std::io;

use anyhow::Context;
use clap::Parser;

use rps_app::cli::Cli;
use rps_app::console;
use rps_app::controller::GameController;
use rps_app::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logging_guard = init_logging(&cli.log_level, cli.log_file.as_deref())?;
    let settings = cli.settings()?;

    let mut controller = GameController::new(&settings);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = console::run(&mut controller, stdin.lock(), stdout.lock())
        .context("console session failed")?;
    tracing::info!(
        target: "rps_app::console",
        ?end,
        rounds = controller.scores().rounds(),
        "session finished"
    );

    if let Some(path) = cli.transcript.as_deref() {
        controller
            .write_transcript(path)
            .with_context(|| format!("writing transcript to {}", path.display()))?;
    }

    Ok(())
}
