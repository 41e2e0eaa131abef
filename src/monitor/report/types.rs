//! Type definitions for the drift report module.

use serde::Serialize;
use std::path::PathBuf;

/// Drift measurements for one feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftRow {
    pub feature: String,
    pub psi: f64,
    pub ks_stat: f64,
    pub ref_mean: f64,
    pub cur_mean: f64,
}

/// Per-feature drift rows sorted worst-first, plus the full row counts
/// of both input datasets.
#[derive(Debug, Clone, Serialize)]
pub struct DriftReport {
    rows: Vec<DriftRow>,
    pub rows_ref: usize,
    pub rows_cur: usize,
}

impl DriftReport {
    /// Assemble a report, sorting rows by `(psi, ks_stat)` descending.
    ///
    /// The sort is stable: exact ties keep the order the features were
    /// requested in.
    pub fn from_rows(mut rows: Vec<DriftRow>, rows_ref: usize, rows_cur: usize) -> Self {
        rows.sort_by(|a, b| b.psi.total_cmp(&a.psi).then(b.ks_stat.total_cmp(&a.ks_stat)));
        Self { rows, rows_ref, rows_cur }
    }

    /// Rows in rendered order.
    pub fn rows(&self) -> &[DriftRow] {
        &self.rows
    }
}

/// Result of a rendered report: where it was written and how many rows
/// each input dataset had.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftSummary {
    pub report_path: PathBuf,
    pub rows_ref: usize,
    pub rows_cur: usize,
}
