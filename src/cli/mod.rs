//! CLI module for deriva
//!
//! This module contains the argument definitions, command handlers,
//! and output utilities.

mod args;
mod commands;
mod logging;

pub use args::{Cli, Command, MonitorArgs, ValidateArgs};
pub use commands::run_command;
pub use logging::LogLevel;
