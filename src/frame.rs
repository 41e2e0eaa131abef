//! Minimal tabular input layer for drift monitoring.
//!
//! Drift inputs are small delimited-text files with a header row. The
//! reader here is deliberately minimal: comma-separated, no quoting or
//! escaping support. Cells are kept as raw text and coerced to `f64`
//! per requested column, mirroring a column-select-then-cast access
//! pattern.

use crate::error::{DerivaError, Result};
use std::fs;
use std::path::Path;

/// A column-named, row-major table of raw cells.
#[derive(Debug, Clone)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    /// Load a frame from a comma-delimited file with a header row.
    ///
    /// Blank lines are skipped; a row with the wrong field count is an
    /// error rather than being padded or truncated.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Frame> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DerivaError::io(format!("reading dataset {}", path.display()), e))?;
        Self::from_csv_str(&content, path)
    }

    fn from_csv_str(content: &str, origin: &Path) -> Result<Frame> {
        let mut lines = content.lines();
        let header = lines
            .next()
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| DerivaError::EmptyDataset { path: origin.to_path_buf() })?;

        let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

        let mut rows = Vec::new();
        for (i, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let cells: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();
            if cells.len() != columns.len() {
                return Err(DerivaError::RaggedRow {
                    path: origin.to_path_buf(),
                    // +2: one for the header, one for 1-based numbering
                    row: i + 2,
                    expected: columns.len(),
                    actual: cells.len(),
                });
            }
            rows.push(cells);
        }

        Ok(Frame { columns, rows })
    }

    /// Number of data rows (header excluded).
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Raw cells of one column, in row order.
    pub fn raw_column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| DerivaError::MissingColumns { columns: vec![name.to_string()] })?;
        Ok(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// One column coerced to `f64`, in row order.
    ///
    /// `NaN` and `inf` spellings parse as the corresponding IEEE
    /// values; anything else that fails to parse is an error naming
    /// the column, offending value, and row.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| DerivaError::MissingColumns { columns: vec![name.to_string()] })?;

        let mut out = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let cell = &row[idx];
            let value: f64 = cell.parse().map_err(|_| DerivaError::NonNumeric {
                column: name.to_string(),
                value: cell.clone(),
                row: i,
            })?;
            out.push(value);
        }
        Ok(out)
    }
}

/// Read an ordered feature-name list from a JSON array file.
pub fn read_feature_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| DerivaError::io(format!("reading feature list {}", path.display()), e))?;
    serde_json::from_str(&content).map_err(|e| DerivaError::FeatureList {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
