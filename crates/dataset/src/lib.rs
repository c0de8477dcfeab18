//! Retail Sales Dataset
//!
//! Column-oriented table model and CSV ingest for the sales pipeline.

pub mod columns;
mod loader;
mod table;

pub use loader::load_dataset;
pub use table::{Column, Dataset, Value};

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading or constructing a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Backing file missing at load time. Fatal to the request.
    #[error("dataset not found at {path}")]
    NotFound { path: PathBuf },

    /// Structural CSV failure (ragged quoting, encoding, I/O mid-read)
    #[error("malformed dataset: {0}")]
    Malformed(#[from] csv::Error),

    /// Columns of unequal length
    #[error("column '{column}' has {got} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },
}
