//! Ground-truth occupancy.
//!
//! A `TruthGrid` is produced once, before the first tick, by whatever
//! supplies the world (a generator, a matrix file, a test fixture) and is
//! never mutated afterwards.  It holds only Wall and Free.

use ex_core::{Cell, CellState};

use crate::{GridError, GridResult, OccupancyGrid};

/// Immutable ground truth.  Construct with [`TruthGridBuilder`] or
/// `TruthGrid::try_from(grid)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthGrid(OccupancyGrid);

impl TruthGrid {
    /// Read-only view of the underlying grid.
    #[inline]
    pub fn as_grid(&self) -> &OccupancyGrid {
        &self.0
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.0.cols()
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.0.rows()
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        self.0.get(cell)
    }

    #[inline]
    pub fn cell_at(&self, x: i32, y: i32) -> GridResult<CellState> {
        self.0.cell_at(x, y)
    }

    /// `true` if `cell` is off the grid or a wall.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        !matches!(self.0.get(cell), Some(CellState::Free))
    }
}

impl TryFrom<OccupancyGrid> for TruthGrid {
    type Error = GridError;

    fn try_from(grid: OccupancyGrid) -> GridResult<TruthGrid> {
        if let Some((cell, _)) = grid.iter().find(|&(_, s)| s == CellState::Unknown) {
            return Err(GridError::UnknownInTruth { x: cell.x, y: cell.y });
        }
        Ok(TruthGrid(grid))
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Incrementally paints walls onto an all-Free grid.
///
/// Rectangles are clipped to the grid, so callers can place obstacles
/// without pre-checking bounds.
///
/// ```rust,ignore
/// let truth = TruthGridBuilder::new(10, 10)?
///     .border()
///     .wall_rect(4, 4, 2, 3)
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct TruthGridBuilder {
    grid: OccupancyGrid,
}

impl TruthGridBuilder {
    pub fn new(cols: u32, rows: u32) -> GridResult<Self> {
        Ok(Self { grid: OccupancyGrid::new(cols, rows, CellState::Free)? })
    }

    /// Wall off the outermost ring of cells.
    pub fn border(self) -> Self {
        let (c, r) = (self.grid.cols(), self.grid.rows());
        self.wall_rect(0, 0, c, 1)
            .wall_rect(0, r as i32 - 1, c, 1)
            .wall_rect(0, 0, 1, r)
            .wall_rect(c as i32 - 1, 0, 1, r)
    }

    /// Wall a single cell (ignored off the grid).
    pub fn wall(self, cell: Cell) -> Self {
        self.paint(cell.x, cell.y, 1, 1, CellState::Wall)
    }

    /// Wall the `w × h` rectangle with top-left corner `(x, y)`.
    pub fn wall_rect(self, x: i32, y: i32, w: u32, h: u32) -> Self {
        self.paint(x, y, w, h, CellState::Wall)
    }

    /// Clear the `w × h` rectangle with top-left corner `(x, y)` back to Free.
    pub fn free_rect(self, x: i32, y: i32, w: u32, h: u32) -> Self {
        self.paint(x, y, w, h, CellState::Free)
    }

    pub fn build(self) -> TruthGrid {
        TruthGrid(self.grid)
    }

    fn paint(mut self, x: i32, y: i32, w: u32, h: u32, state: CellState) -> Self {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i32).min(self.grid.cols() as i32);
        let y1 = (y + h as i32).min(self.grid.rows() as i32);
        for cy in y0..y1 {
            for cx in x0..x1 {
                if let Some(i) = self.grid.index(Cell::new(cx, cy)) {
                    self.grid.cells_mut()[i] = state;
                }
            }
        }
        self
    }
}
