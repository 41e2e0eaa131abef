//! Error types with actionable diagnostics.
//!
//! All errors include contextual information to help users resolve
//! issues without consulting external documentation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deriva operations.
pub type Result<T> = std::result::Result<T, DerivaError>;

/// Errors that can occur while building a drift report.
#[derive(Error, Debug)]
pub enum DerivaError {
    /// Monitor spec file not found at the expected path.
    #[error("Monitor spec not found: {path}\n  → Create a spec file or pass a different path")]
    ConfigNotFound { path: PathBuf },

    /// Monitor spec has invalid syntax.
    #[error("Invalid monitor spec in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// PSI bucket count is unusable.
    #[error("Invalid bucket count: {bins} (must be > 0)\n  → Use at least one quantile bucket, e.g. bins: 10")]
    InvalidBins { bins: usize },

    /// Requested feature column(s) absent from a dataset.
    #[error("Missing feature column(s): {}\n  → Check the feature-name list against the dataset headers", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A cell could not be coerced to a floating-point number.
    #[error("Non-numeric value '{value}' in column '{column}' (row {row})\n  → Drift statistics require real-valued features")]
    NonNumeric { column: String, value: String, row: usize },

    /// A requested column has no rows.
    #[error("Column '{column}' is empty\n  → Both datasets need at least one row per feature")]
    EmptyColumn { column: String },

    /// Dataset file has no header row.
    #[error("Dataset {path} has no header row\n  → Expected a delimited file with column names on the first line")]
    EmptyDataset { path: PathBuf },

    /// A dataset row has the wrong number of fields.
    #[error("Malformed row {row} in {path}: expected {expected} fields, got {actual}")]
    RaggedRow { path: PathBuf, row: usize, expected: usize, actual: usize },

    /// Feature-name list could not be parsed.
    #[error("Failed to parse feature list {path}:\n  {message}\n  → Expected a JSON array of column names")]
    FeatureList { path: PathBuf, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl DerivaError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }
}
