use ex_core::Cell;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("no route from {from} to {to}")]
    NoPath { from: Cell, to: Cell },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
