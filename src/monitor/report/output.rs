//! Static HTML rendering for drift reports.
//!
//! The document is deterministic for identical inputs (no timestamps),
//! so re-running a report overwrites the file with identical content.

use super::types::DriftReport;
use crate::error::{DerivaError, Result};
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

const STYLE: &str = "body{font-family:Arial;padding:16px}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ddd;padding:6px;font-size:12px}\
th{background:#f3f3f3}";

/// Render a drift report as a standalone HTML document.
///
/// One fixed paragraph of threshold guidance, then the row table in
/// sorted order. Numeric cells use default float formatting.
pub fn render_html(report: &DriftReport) -> String {
    let mut html = String::with_capacity(1024 + report.rows().len() * 128);
    html.push_str("<html><head><title>Drift Report</title>");
    html.push_str("<style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>");
    html.push_str("<h2>Data Drift Report (PSI + KS)</h2>");
    html.push_str(
        "<p><b>PSI</b>: ~0.1 small, ~0.2 moderate, &gt;0.3 large. \
         <b>KS</b> higher = more drift.</p>",
    );

    html.push_str("<table><thead><tr>");
    for col in ["feature", "psi", "ks_stat", "ref_mean", "cur_mean"] {
        let _ = write!(html, "<th>{col}</th>");
    }
    html.push_str("</tr></thead><tbody>");

    for row in report.rows() {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.feature),
            row.psi,
            row.ks_stat,
            row.ref_mean,
            row.cur_mean,
        );
    }

    html.push_str("</tbody></table></body></html>");
    html
}

/// Write the rendered report to `path`, creating missing parent
/// directories first.
pub fn write_html(report: &DriftReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                DerivaError::io(format!("creating report directory {}", parent.display()), e)
            })?;
        }
    }
    fs::write(path, render_html(report))
        .map_err(|e| DerivaError::io(format!("writing report {}", path.display()), e))
}

/// Minimal HTML escaping for feature names.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
