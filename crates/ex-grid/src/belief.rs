//! The agent's accumulated map.

use ex_core::{Cell, CellState};
use crate::{GridError, GridResult, OccupancyGrid, TruthGrid};

/// Belief occupancy: starts all Unknown, grows monotonically through
/// sensing, and is closed once by [`finalize`][Self::finalize].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeliefGrid {
    grid:      OccupancyGrid,
    finalized: bool,
}

impl BeliefGrid {
    /// An all-Unknown belief of the given size.
    pub fn new(cols: u32, rows: u32) -> GridResult<Self> {
        Ok(Self {
            grid:      OccupancyGrid::new(cols, rows, CellState::Unknown)?,
            finalized: false,
        })
    }

    /// An all-Unknown belief shaped like `truth`.
    pub fn for_truth(truth: &TruthGrid) -> Self {
        Self {
            grid:      OccupancyGrid::filled_like(truth.as_grid(), CellState::Unknown),
            finalized: false,
        }
    }

    /// Read-only view of the underlying grid.
    #[inline]
    pub fn as_grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        self.grid.get(cell)
    }

    #[inline]
    pub fn cell_at(&self, x: i32, y: i32) -> GridResult<CellState> {
        self.grid.cell_at(x, y)
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn unknown_count(&self) -> usize {
        self.grid.count(CellState::Unknown)
    }

    /// `1 − unknown / total`, always within `[0, 1]`.
    pub fn coverage(&self) -> f64 {
        1.0 - self.unknown_count() as f64 / self.grid.len() as f64
    }

    /// Fail unless `truth` has this grid's shape.
    pub fn check_shape(&self, truth: &TruthGrid) -> GridResult<()> {
        if self.grid.same_shape(truth.as_grid()) {
            Ok(())
        } else {
            Err(GridError::DimensionMismatch {
                cols:     self.cols(),
                rows:     self.rows(),
                got_cols: truth.cols(),
                got_rows: truth.rows(),
            })
        }
    }

    /// Copy one truth observation into belief.  Returns `true` when the cell
    /// was Unknown before.  A finalized belief is frozen and ignores input.
    pub(crate) fn observe(&mut self, cell: Cell, observed: CellState) -> bool {
        if self.finalized {
            return false;
        }
        match self.grid.index(cell) {
            Some(i) => {
                let slot = &mut self.grid.cells_mut()[i];
                let newly_known = *slot == CellState::Unknown;
                *slot = observed;
                newly_known
            }
            None => false,
        }
    }

    /// Closed-world completion: every cell still Unknown becomes Wall.
    ///
    /// Free and Wall cells are untouched.  Runs at most once; returns the
    /// number of cells converted (0 on repeat calls).
    pub fn finalize(&mut self) -> usize {
        if self.finalized {
            return 0;
        }
        self.finalized = true;
        let mut converted = 0;
        for slot in self.grid.cells_mut() {
            if *slot == CellState::Unknown {
                *slot = CellState::Wall;
                converted += 1;
            }
        }
        converted
    }
}
