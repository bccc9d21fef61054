pub mod cli;
pub mod console;
pub mod controller;
pub mod logging;

pub use cli::{Cli, Settings};
pub use console::{Command, InputError, parse_command};
pub use controller::GameController;
