//! CLI command implementations

mod data;
mod eval;
mod info;
mod validate;

use std::process::ExitCode;

use crate::cli::args::{Cli, Command};
use crate::cli::logging::LogLevel;
use crate::error::Result;

/// Execute a CLI command based on the parsed arguments.
///
/// # Errors
/// Returns the first I/O, parse, or config failure; validation outcomes
/// are reported through the exit code instead.
pub fn run_command(cli: Cli) -> Result<ExitCode> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Validate(args) => validate::run_validate(&args, log_level),
        Command::Eval(args) => eval::run_eval(&args, log_level),
        Command::Data(args) => data::run_data(&args, log_level),
        Command::Info(args) => info::run_info(&args, log_level),
    }
}
