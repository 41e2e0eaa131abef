//! Validation error types.

/// Dataset validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing columns: {0:?}")]
    MissingColumns(Vec<String>),

    #[error("Null values found in required columns")]
    NullValues,

    #[error("Non-numeric values in feature '{0}'")]
    NonNumeric(String),

    #[error("Non-finite values in feature '{0}'")]
    NonFinite(String),

    #[error("Non-numeric values in label")]
    NonNumericLabel,

    #[error("Label must be in {{0,1}}, got {0:?}")]
    NonBinaryLabel(Vec<i64>),
}
