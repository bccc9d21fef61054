use std::io::{self, BufRead, Write};

use rps_core::{Move, RoundOutcome};
use thiserror::Error;

use crate::controller::GameController;

const WELCOME: &str = "Welcome to Rock-Paper-Scissors AI";
const INSTRUCTIONS: &str = "Type 'rock', 'paper', or 'scissors' (or r / p / s) to play. \
Commands: score, table, reset, help, quit.";
const PROMPT: &str = "Your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Score,
    Table,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid choice! Please type rock, paper, or scissors.")]
    Unrecognized(String),
    #[error("empty input")]
    Empty,
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let normalized = line.trim().to_ascii_lowercase();
    let command = match normalized.as_str() {
        "" => return Err(InputError::Empty),
        "r" => Command::Play(Move::Rock),
        "p" => Command::Play(Move::Paper),
        "s" => Command::Play(Move::Scissors),
        "score" => Command::Score,
        "table" => Command::Table,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => match other.parse::<Move>() {
            Ok(mv) => Command::Play(mv),
            Err(_) => return Err(InputError::Unrecognized(line.trim().to_string())),
        },
    };
    Ok(command)
}

/// How the interactive loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
}

pub fn run<R, W>(controller: &mut GameController, input: R, mut out: W) -> io::Result<SessionEnd>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "{WELCOME} (opponent: {}, seed {})",
        controller.opponent_name(),
        controller.seed()
    )?;
    writeln!(out, "{INSTRUCTIONS}")?;
    writeln!(out)?;

    let mut lines = input.lines();
    let end = loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break SessionEnd::EndOfInput;
        };

        match parse_command(&line) {
            Ok(Command::Play(player)) => {
                let record = controller.play(player);
                writeln!(out, "Computer chose: {}", record.opponent)?;
                writeln!(out, "{}", verdict(record.outcome))?;
                writeln!(out, "{}", controller.score_text())?;
                writeln!(out)?;
            }
            Ok(Command::Score) => writeln!(out, "{}", controller.score_text())?,
            Ok(Command::Table) => match controller.table_text() {
                Some(table) => write!(out, "{table}")?,
                None => writeln!(out, "The {} opponent keeps no table.", controller.opponent_name())?,
            },
            Ok(Command::Reset) => {
                controller.reset();
                writeln!(out, "Reset. Make a move!")?;
            }
            Ok(Command::Help) => writeln!(out, "{INSTRUCTIONS}")?,
            Ok(Command::Quit) => break SessionEnd::Quit,
            Err(InputError::Empty) => {}
            Err(err @ InputError::Unrecognized(_)) => {
                tracing::debug!(target: "rps_app::console", error = %err, "rejected input");
                writeln!(out, "{err}")?;
                writeln!(out)?;
            }
        }
    };

    writeln!(out, "Thanks for playing!")?;
    writeln!(out, "Final {}", controller.score_text().to_ascii_lowercase())?;
    Ok(end)
}

fn verdict(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::PlayerWins => "You win!",
        RoundOutcome::OpponentWins => "Computer wins!",
        RoundOutcome::Draw => "It's a draw!",
    }
}
