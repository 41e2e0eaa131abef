//! Drift monitoring: shift statistics and report generation.

pub mod report;
pub mod stats;

#[cfg(test)]
mod tests;

pub use report::{
    build_drift_report, render_html, write_html, DriftAnalyzer, DriftReport, DriftRow,
    DriftSummary,
};
pub use stats::{ks_stat, mean, psi, DEFAULT_BINS};
