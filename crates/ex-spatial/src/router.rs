//! Routing trait and default A* implementation.
//!
//! # Pluggability
//!
//! `ex-sim` plans through the [`Router`] trait, so applications can swap in
//! another planner (jump-point search, weighted costs near walls) without
//! touching the controller.  The default [`AStarRouter`] is exact on the
//! 4-connected unit-cost grid.
//!
//! # Route shape
//!
//! A `Route` lists the cells to enter, starting with the step after the
//! start cell and ending at the goal.  Consecutive cells are 4-adjacent.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ex_core::{Cell, CellState};
use ex_grid::OccupancyGrid;
use tracing::trace;

use crate::{SpatialError, SpatialResult};

// ── Passability ───────────────────────────────────────────────────────────────

/// Which cells a route may enter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Passability {
    /// Only cells known to be Free.  Used for navigate-to commands.
    #[default]
    KnownFree,
    /// Free or Unknown.  Used when driving toward a frontier.
    NotWall,
}

impl Passability {
    #[inline]
    pub fn permits(self, state: CellState) -> bool {
        match self {
            Passability::KnownFree => state == CellState::Free,
            Passability::NotWall   => state != CellState::Wall,
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    /// Cells to enter in order, excluding the start, ending at the goal.
    pub cells: Vec<Cell>,
}

impl Route {
    /// Number of steps (unit-cost edges) in the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the start and goal are the same cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The final cell, if any.
    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable route planner.
///
/// Implementations must be `Send + Sync` so a planner can be shared between
/// simulations running on different threads.
pub trait Router: Send + Sync {
    /// Compute a route from `start` to `goal` through cells that
    /// `passability` permits.  `start` itself is never checked.
    ///
    /// Returns an empty route when `start == goal`, and
    /// [`SpatialError::NoPath`] when the goal cannot be reached.
    fn route(
        &self,
        grid: &OccupancyGrid,
        start: Cell,
        goal: Cell,
        passability: Passability,
    ) -> SpatialResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* with the Manhattan heuristic over the 4-connected grid.
///
/// The heuristic is consistent for unit edge costs, so the first time the
/// goal is popped its cost is optimal and no node is ever reopened.
///
/// The open set is a binary heap keyed by `(f, arrival)`; a per-cell
/// best-known `g` lets stale heap entries be skipped when popped instead of
/// searching the heap for duplicates.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(
        &self,
        grid: &OccupancyGrid,
        start: Cell,
        goal: Cell,
        passability: Passability,
    ) -> SpatialResult<Route> {
        let result = astar(grid, start, goal, passability);
        match &result {
            Ok(route) => trace!(%start, %goal, steps = route.len(), "astar: route found"),
            Err(e)    => trace!(%start, %goal, error = %e, "astar: no route"),
        }
        result
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

const NO_PARENT: usize = usize::MAX;

fn astar(
    grid: &OccupancyGrid,
    start: Cell,
    goal: Cell,
    passability: Passability,
) -> SpatialResult<Route> {
    let start_idx = grid.index(start).ok_or(SpatialError::OutOfBounds(start))?;
    let goal_idx  = grid.index(goal).ok_or(SpatialError::OutOfBounds(goal))?;
    if start_idx == goal_idx {
        return Ok(Route::default());
    }

    let n = grid.len();
    // g[i] = best known cost (steps) from start to cell i.
    let mut g      = vec![u32::MAX; n];
    let mut parent = vec![NO_PARENT; n];

    // Min-heap on (f, arrival seq, g, cell index).  The arrival sequence
    // breaks f-ties first-in first-out.
    let mut heap: BinaryHeap<Reverse<(u32, u64, u32, usize)>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    g[start_idx] = 0;
    heap.push(Reverse((start.manhattan(goal), seq, 0, start_idx)));

    while let Some(Reverse((_, _, cost, idx))) = heap.pop() {
        if cost > g[idx] {
            continue; // stale entry
        }
        if idx == goal_idx {
            return Ok(Route { cells: reconstruct(grid, &parent, start_idx, goal_idx) });
        }

        let cell = grid.cell_at_index(idx);
        for next in cell.neighbors_4() {
            let Some(ni) = grid.index(next) else { continue };
            if !passability.permits(grid.cells()[ni]) {
                continue;
            }
            let next_cost = cost + 1;
            if next_cost < g[ni] {
                g[ni]      = next_cost;
                parent[ni] = idx;
                seq += 1;
                heap.push(Reverse((next_cost + next.manhattan(goal), seq, next_cost, ni)));
            }
        }
    }

    Err(SpatialError::NoPath { from: start, to: goal })
}

/// Walk parent links back from the goal; the start cell is excluded.
fn reconstruct(grid: &OccupancyGrid, parent: &[usize], start_idx: usize, goal_idx: usize) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut cur = goal_idx;
    while cur != start_idx && cur != NO_PARENT {
        cells.push(grid.cell_at_index(cur));
        cur = parent[cur];
    }
    cells.reverse();
    cells
}
