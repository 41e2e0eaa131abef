//! Training-dataset validation.
//!
//! Checks that a frame carries every required column, that feature
//! columns are fully numeric and finite, and that the label column is
//! binary. Runs as a pre-flight gate before a dataset is used as a
//! drift baseline.

mod error;

pub use error::ValidationError;

use crate::frame::Frame;
use std::collections::BTreeSet;

/// Name of the required label column.
pub const LABEL_COLUMN: &str = "label";

/// Validate a frame against a feature-column list.
///
/// Requirements, checked in order:
/// 1. all feature columns plus `label` are present (missing ones are
///    reported together, sorted);
/// 2. no empty cells in any required column;
/// 3. every feature cell parses as a finite `f64`;
/// 4. every label truncates to an integer in `{0, 1}`.
pub fn validate_frame(frame: &Frame, feature_cols: &[String]) -> Result<(), ValidationError> {
    let missing: Vec<String> = feature_cols
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(LABEL_COLUMN))
        .filter(|name| !frame.has_column(name))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingColumns(missing));
    }

    for name in feature_cols.iter().map(String::as_str).chain(std::iter::once(LABEL_COLUMN)) {
        let cells = frame.raw_column(name).unwrap_or_default();
        if cells.iter().any(|c| c.is_empty()) {
            return Err(ValidationError::NullValues);
        }
    }

    for name in feature_cols {
        let cells = frame.raw_column(name).unwrap_or_default();
        let mut values = Vec::with_capacity(cells.len());
        for cell in cells {
            let v: f64 =
                cell.parse().map_err(|_| ValidationError::NonNumeric(name.clone()))?;
            values.push(v);
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ValidationError::NonFinite(name.clone()));
        }
    }

    let labels = frame.raw_column(LABEL_COLUMN).unwrap_or_default();
    let mut seen = BTreeSet::new();
    for cell in labels {
        let v: f64 = cell.parse().map_err(|_| ValidationError::NonNumericLabel)?;
        if !v.is_finite() {
            return Err(ValidationError::NonNumericLabel);
        }
        seen.insert(v.trunc() as i64);
    }
    if !seen.iter().all(|l| *l == 0 || *l == 1) {
        return Err(ValidationError::NonBinaryLabel(seen.into_iter().collect()));
    }

    Ok(())
}
