//! Grid error type.

use thiserror::Error;

/// Errors produced by `ex-grid`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds { x: i32, y: i32, cols: u32, rows: u32 },

    #[error("invalid grid dimensions: {0}")]
    Dimensions(String),

    #[error("truth grid cell ({x}, {y}) is unknown; only wall and free are allowed")]
    UnknownInTruth { x: i32, y: i32 },

    #[error("grid is {got_cols}x{got_rows}, expected {cols}x{rows}")]
    DimensionMismatch { cols: u32, rows: u32, got_cols: u32, got_rows: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
