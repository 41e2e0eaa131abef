//! Per-feature drift computation.

use super::types::{DriftReport, DriftRow};
use crate::error::{DerivaError, Result};
use crate::frame::Frame;
use crate::monitor::stats::{self, DEFAULT_BINS};

/// Computes per-feature drift rows from two frames.
#[derive(Debug, Clone)]
pub struct DriftAnalyzer {
    /// Quantile bucket count used for PSI.
    pub bins: usize,
}

impl Default for DriftAnalyzer {
    fn default() -> Self {
        Self { bins: DEFAULT_BINS }
    }
}

impl DriftAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with a non-default PSI bucket count.
    pub fn with_bins(bins: usize) -> Self {
        Self { bins }
    }

    /// Compute drift rows for each requested feature.
    ///
    /// The bucket count is checked first so a degenerate spec or CLI
    /// override surfaces as an error rather than panicking inside the
    /// statistics. Columns absent from either frame are collected up
    /// front so the error names every missing column at once. Any
    /// downstream failure (non-numeric cell, empty column) aborts the
    /// whole analysis.
    pub fn analyze(
        &self,
        reference: &Frame,
        current: &Frame,
        feature_names: &[String],
    ) -> Result<DriftReport> {
        if self.bins == 0 {
            return Err(DerivaError::InvalidBins { bins: self.bins });
        }

        let mut missing: Vec<String> = feature_names
            .iter()
            .filter(|name| !reference.has_column(name) || !current.has_column(name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            missing.sort();
            return Err(DerivaError::MissingColumns { columns: missing });
        }

        let mut rows = Vec::with_capacity(feature_names.len());
        for name in feature_names {
            let ref_values = reference.numeric_column(name)?;
            let cur_values = current.numeric_column(name)?;
            if ref_values.is_empty() || cur_values.is_empty() {
                return Err(DerivaError::EmptyColumn { column: name.clone() });
            }

            rows.push(DriftRow {
                feature: name.clone(),
                psi: stats::psi(&ref_values, &cur_values, self.bins),
                ks_stat: stats::ks_stat(&ref_values, &cur_values),
                ref_mean: stats::mean(&ref_values),
                cur_mean: stats::mean(&cur_values),
            });
        }

        Ok(DriftReport::from_rows(rows, reference.n_rows(), current.n_rows()))
    }
}
