//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface it.

use thiserror::Error;

/// The error type for `ex-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds { x: i32, y: i32, cols: u32, rows: u32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ex-core`.
pub type CoreResult<T> = Result<T, CoreError>;
