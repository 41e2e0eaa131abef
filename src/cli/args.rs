//! Argument definitions for the deriva CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Deriva: data drift monitoring for tabular ML datasets
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "deriva")]
#[command(version)]
#[command(about = "Data drift monitoring with PSI and KS statistics")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Build a drift report from a monitor spec
    Monitor(MonitorArgs),

    /// Validate the datasets named by a monitor spec
    Validate(ValidateArgs),
}

/// Arguments for the monitor command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct MonitorArgs {
    /// Path to YAML monitor spec
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Override the reference dataset path
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Override the current dataset path
    #[arg(long)]
    pub current: Option<PathBuf>,

    /// Override the feature-name list path
    #[arg(long)]
    pub features: Option<PathBuf>,

    /// Override the report output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the PSI quantile bucket count
    #[arg(long)]
    pub bins: Option<usize>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML monitor spec
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,
}
