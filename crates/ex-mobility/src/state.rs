//! Per-agent movement state.

use std::collections::VecDeque;

use ex_core::{Cell, Mode, WorldGeometry, WorldPoint};

/// The single exploring agent.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    /// World-space position of the agent's center.
    pub position: WorldPoint,
    /// Heading in radians; `0` points along +x.
    pub heading: f32,
    /// Remaining route cells, next cell first.  Empty when not navigating.
    pub route: VecDeque<Cell>,
    /// Current controller state.
    pub mode: Mode,
}

impl AgentState {
    /// A stationary agent in `Explore` with no route.
    pub fn new(position: WorldPoint, heading: f32) -> Self {
        Self { position, heading, route: VecDeque::new(), mode: Mode::Explore }
    }

    /// Grid cell under the agent.
    #[inline]
    pub fn cell(&self, geometry: &WorldGeometry) -> Cell {
        geometry.cell_of(self.position)
    }

    /// Replace the current route.
    pub fn set_route(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.route = cells.into_iter().collect();
    }

    /// Abandon the current route.  The agent stays where it is.
    #[inline]
    pub fn clear_route(&mut self) {
        self.route.clear();
    }

    #[inline]
    pub fn has_route(&self) -> bool {
        !self.route.is_empty()
    }

    /// Final cell of the current route.
    #[inline]
    pub fn route_goal(&self) -> Option<Cell> {
        self.route.back().copied()
    }
}
