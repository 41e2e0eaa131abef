//! # deriva
//!
//! Data drift monitoring for tabular ML datasets.
//!
//! Given a reference dataset (the training baseline) and a current
//! dataset, deriva computes per-feature distributional-shift
//! statistics (the Population Stability Index over quantile buckets
//! and the two-sample Kolmogorov-Smirnov statistic) and renders them
//! as a sorted HTML drift report.
//!
//! # Example
//!
//! ```no_run
//! use deriva::build_drift_report;
//!
//! let summary = build_drift_report(
//!     "data/reference.csv",
//!     "data/current.csv",
//!     "data/feature_names.json",
//!     "reports/drift_report.html",
//! )?;
//! println!("report at {} ({} vs {} rows)",
//!     summary.report_path.display(), summary.rows_ref, summary.rows_cur);
//! # Ok::<(), deriva::DerivaError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod monitor;
pub mod validate;

pub use config::MonitorSpec;
pub use error::{DerivaError, Result};
pub use frame::{read_feature_names, Frame};
pub use monitor::{
    build_drift_report, ks_stat, psi, DriftAnalyzer, DriftReport, DriftRow, DriftSummary,
};
pub use validate::{validate_frame, ValidationError};
