use ex_core::{Cell, CoreError, Mode};
use ex_grid::GridError;
use thiserror::Error;

/// Construction-time failures.  A built [`Sim`][crate::Sim] never fails a
/// tick; runtime problems are reported as [`CommandError`]s.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("start cell {0} is outside the world")]
    StartOutOfBounds(Cell),

    #[error("start cell {0} is a wall")]
    StartBlocked(Cell),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;

/// Why an external command was rejected.  The controller's state is left
/// unchanged whenever one of these is reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("target {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("target {0} is a wall")]
    WallTarget(Cell),

    #[error("target {0} has not been explored")]
    UnknownTarget(Cell),

    #[error("no known-free route from {from} to {to}")]
    NoPath { from: Cell, to: Cell },

    #[error("{command} is not accepted while {mode}")]
    NotAccepting { command: &'static str, mode: Mode },
}
