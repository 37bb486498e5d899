//! Grid coordinates and cell occupancy states.
//!
//! `Cell` uses signed components so neighbor offsets and sensor windows can
//! step outside the grid without wrapping; bounds are checked by the grid.

use std::fmt;

/// Fixed 4-neighbor expansion order shared by frontier search and A*:
/// `(0,+1), (0,-1), (+1,0), (-1,0)`.
pub const NEIGHBORS_4: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A grid cell address: `x` is the column, `y` the row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy)
    }

    /// The four edge-adjacent cells in [`NEIGHBORS_4`] order.  Some may lie
    /// outside the grid.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        NEIGHBORS_4.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// Manhattan (L1) distance in cells.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` shares an edge with `self`.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── CellState ─────────────────────────────────────────────────────────────────

/// Occupancy of a single cell.
///
/// The discriminants are the integer codes of the text matrix format:
/// `0` = wall, `1` = free, `2` = unknown.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellState {
    Wall = 0,
    Free = 1,
    #[default]
    Unknown = 2,
}

impl CellState {
    /// Integer code used by the matrix text format.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`][Self::code]; `None` for anything but 0, 1, 2.
    pub fn from_code(code: u8) -> Option<CellState> {
        match code {
            0 => Some(CellState::Wall),
            1 => Some(CellState::Free),
            2 => Some(CellState::Unknown),
            _ => None,
        }
    }

    #[inline]
    pub fn is_known(self) -> bool {
        !matches!(self, CellState::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellState::Wall    => "wall",
            CellState::Free    => "free",
            CellState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
