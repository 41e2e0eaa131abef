//! CLI command implementations

mod monitor;
mod validate;


use crate::cli::args::{Cli, Command};
use crate::cli::LogLevel;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Monitor(args) => monitor::run_monitor(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}
