//! Declarative monitor spec.
//!
//! A drift run is described by a small YAML file naming the two
//! datasets, the feature list, and where the report goes:
//!
//! ```yaml
//! data:
//!   reference: data/reference.csv
//!   current: data/current.csv
//!   feature_names: data/feature_names.json
//! report:
//!   output: reports/drift_report.html
//!   bins: 10   # optional
//! ```

use crate::error::{DerivaError, Result};
use crate::monitor::DEFAULT_BINS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed monitor spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorSpec {
    pub data: DataSection,
    pub report: ReportSection,
}

/// Input dataset paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSection {
    /// Baseline dataset the shift is measured against.
    pub reference: PathBuf,
    /// Dataset being checked for shift.
    pub current: PathBuf,
    /// JSON array of feature column names.
    pub feature_names: PathBuf,
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Where the rendered HTML report is written.
    pub output: PathBuf,
    /// Quantile bucket count for PSI.
    #[serde(default = "default_bins")]
    pub bins: usize,
}

fn default_bins() -> usize {
    DEFAULT_BINS
}

impl MonitorSpec {
    /// Load and parse a monitor spec from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<MonitorSpec> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DerivaError::ConfigNotFound { path: path.to_path_buf() });
        }
        let content = fs::read_to_string(path)
            .map_err(|e| DerivaError::io(format!("reading spec {}", path.display()), e))?;
        serde_yaml::from_str(&content).map_err(|e| DerivaError::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
