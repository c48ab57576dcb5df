//! Load-time error type for the CSV data sources.

use std::path::PathBuf;
use thiserror::Error;

/// A data source could not be loaded at startup.
///
/// Every variant is fatal: the dataset and dropdown catalog are read once
/// before the server binds its listener, and a process without them has
/// nothing to serve.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File missing, unreadable, or structurally broken CSV.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Header row lacks a required column.
    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A data row failed validation. `row` counts data rows from 1.
    #[error("{} row {row}: {message}", path.display())]
    InvalidRow {
        path: PathBuf,
        row: usize,
        message: String,
    },

    /// Header only, no data rows.
    #[error("{} contains no data rows", path.display())]
    Empty { path: PathBuf },
}
