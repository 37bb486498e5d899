//! Nearest-unknown (frontier) search.

use std::collections::VecDeque;

use ex_core::{Cell, CellState};
use ex_grid::OccupancyGrid;

/// Breadth-first search from `start` for the closest Unknown cell.
///
/// Expansion passes through any non-Wall cell (Free or Unknown).  The first
/// Unknown cell dequeued is returned, so the result is nearest by hop count
/// with ties broken by [`NEIGHBORS_4`][ex_core::cell::NEIGHBORS_4] order.
///
/// `None` means every Unknown cell is walled off from `start` (or `start`
/// lies off the grid).  The start cell itself is always expanded, even if it
/// is a Wall in `grid`.
pub fn nearest_unknown(grid: &OccupancyGrid, start: Cell) -> Option<Cell> {
    let start_idx = grid.index(start)?;
    let mut visited = vec![false; grid.len()];
    let mut queue = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if grid.get(cell) == Some(CellState::Unknown) {
            return Some(cell);
        }
        for next in cell.neighbors_4() {
            let Some(i) = grid.index(next) else { continue };
            if visited[i] || grid.cells()[i] == CellState::Wall {
                continue;
            }
            visited[i] = true;
            queue.push_back(next);
        }
    }
    None
}
