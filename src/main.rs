//! Deriva CLI
//!
//! Drift monitoring entry point for the deriva library.
//!
//! # Usage
//!
//! ```bash
//! # Build a drift report from a monitor spec
//! deriva monitor drift.yaml
//!
//! # Build a report with overrides
//! deriva monitor drift.yaml --bins 20 --output reports/latest.html
//!
//! # Validate the datasets named by a spec
//! deriva validate drift.yaml
//! ```

use clap::Parser;
use deriva::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
