//! Dense occupancy storage.
//!
//! # Data layout
//!
//! Cells are stored row-major by the vertical axis, matching the text matrix
//! format (one line per row):
//!
//! ```text
//! index(x, y) = y * cols + x
//! ```

use ex_core::{Cell, CellState};

use crate::{GridError, GridResult};

/// A `cols × rows` grid of [`CellState`].  Both dimensions are at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    cols:  u32,
    rows:  u32,
    cells: Vec<CellState>,
}

impl OccupancyGrid {
    /// A grid with every cell set to `fill`.
    pub fn new(cols: u32, rows: u32, fill: CellState) -> GridResult<Self> {
        check_dims(cols, rows)?;
        Ok(Self { cols, rows, cells: vec![fill; cols as usize * rows as usize] })
    }

    /// A grid shaped like `other` with every cell set to `fill`.
    pub fn filled_like(other: &OccupancyGrid, fill: CellState) -> Self {
        Self { cols: other.cols, rows: other.rows, cells: vec![fill; other.cells.len()] }
    }

    /// Wrap row-major `cells`; the length must equal `cols * rows`.
    pub fn from_cells(cols: u32, rows: u32, cells: Vec<CellState>) -> GridResult<Self> {
        check_dims(cols, rows)?;
        let expected = cols as usize * rows as usize;
        if cells.len() != expected {
            return Err(GridError::Dimensions(format!(
                "{} cells supplied for a {cols}x{rows} grid ({expected} expected)",
                cells.len()
            )));
        }
        Ok(Self { cols, rows, cells })
    }

    /// Build from a list of equally long rows (top row first).
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> GridResult<Self> {
        let row_count = rows.len() as u32;
        let cols = rows.first().map_or(0, |r| r.len()) as u32;
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() as u32 != cols) {
            return Err(GridError::Dimensions(format!(
                "row {y} has {} cells, expected {cols}", row.len()
            )));
        }
        Self::from_cells(cols, row_count, rows.into_iter().flatten().collect())
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.cols && (y as u32) < self.rows
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.in_bounds(cell.x, cell.y)
    }

    /// Flat storage index of `cell`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.cols as usize + cell.x as usize)
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn cell_at_index(&self, index: usize) -> Cell {
        let cols = self.cols as usize;
        Cell::new((index % cols) as i32, (index / cols) as i32)
    }

    /// State at `(x, y)`; fails with [`GridError::OutOfBounds`] off the grid.
    pub fn cell_at(&self, x: i32, y: i32) -> GridResult<CellState> {
        self.get(Cell::new(x, y)).ok_or(GridError::OutOfBounds {
            x,
            y,
            cols: self.cols,
            rows: self.rows,
        })
    }

    /// State of `cell`, or `None` off the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Overwrite one cell.
    pub fn set(&mut self, cell: Cell, state: CellState) -> GridResult<()> {
        match self.index(cell) {
            Some(i) => {
                self.cells[i] = state;
                Ok(())
            }
            None => Err(GridError::OutOfBounds {
                x:    cell.x,
                y:    cell.y,
                cols: self.cols,
                rows: self.rows,
            }),
        }
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Row-major cell slice.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Iterate rows from `y = 0` downward.
    pub fn row_slices(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.cols as usize)
    }

    /// `(cell, state)` for every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.cell_at_index(i), s))
    }

    /// `true` when `other` has the same dimensions.
    #[inline]
    pub fn same_shape(&self, other: &OccupancyGrid) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }
}

fn check_dims(cols: u32, rows: u32) -> GridResult<()> {
    if cols == 0 || rows == 0 {
        return Err(GridError::Dimensions(format!(
            "grid must be at least 1x1, got {cols}x{rows}"
        )));
    }
    Ok(())
}
