//! Error types for ex-output.

use ex_grid::GridError;
use thiserror::Error;

/// Errors that can occur when reading maps or writing run output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {token:?} is not an integer")]
    Parse { line: usize, token: String },

    #[error("line {line}: value {value} is not allowed in a {format} matrix")]
    IllegalValue { line: usize, value: i64, format: &'static str },

    #[error("line {line}: row has {got} values, expected {expected}")]
    Ragged { line: usize, expected: usize, got: usize },

    #[error("matrix has no data rows")]
    Empty,

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
