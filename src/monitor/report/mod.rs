//! Drift report assembly and rendering.
//!
//! A report is built per invocation from two immutable input datasets:
//! per-feature PSI, KS, and means, sorted worst-first, rendered once
//! as a static HTML document.

mod analyzer;
mod output;
mod types;

#[cfg(test)]
mod tests;

pub use analyzer::DriftAnalyzer;
pub use output::{render_html, write_html};
pub use types::{DriftReport, DriftRow, DriftSummary};

use crate::error::Result;
use crate::frame::{read_feature_names, Frame};
use std::path::Path;

/// Build and write a drift report in one call.
///
/// Reads both datasets and the feature-name list, computes per-feature
/// drift statistics with the default bucket count, writes the HTML
/// report to `out_html` (creating parent directories as needed), and
/// returns the output path plus both datasets' full row counts.
///
/// Any failure (missing column, non-numeric data, unreadable input,
/// unwritable output) aborts the invocation before the report file is
/// touched; there is no partial-report mode.
pub fn build_drift_report(
    reference_csv: impl AsRef<Path>,
    current_csv: impl AsRef<Path>,
    feature_names_json: impl AsRef<Path>,
    out_html: impl AsRef<Path>,
) -> Result<DriftSummary> {
    let features = read_feature_names(feature_names_json)?;
    let reference = Frame::from_csv_path(reference_csv)?;
    let current = Frame::from_csv_path(current_csv)?;

    let report = DriftAnalyzer::new().analyze(&reference, &current, &features)?;
    write_html(&report, out_html.as_ref())?;

    Ok(DriftSummary {
        report_path: out_html.as_ref().to_path_buf(),
        rows_ref: report.rows_ref,
        rows_cur: report.rows_cur,
    })
}
