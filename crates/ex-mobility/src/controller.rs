//! The motion model.

use ex_core::{Cell, CellState, ExploreConfig, SimRng, WorldGeometry, WorldPoint};
use ex_grid::{OccupancyGrid, TruthGrid};

use crate::AgentState;

/// Outcome of one route-following tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FollowStep {
    /// The route was empty; nothing moved.
    NoRoute,
    /// Moved toward the next cell without reaching it.
    Moving,
    /// Snapped onto `cell` and removed it from the route.
    Reached(Cell),
}

/// Advances the agent's continuous position.
///
/// Holds only immutable parameters; all mutable state lives in
/// [`AgentState`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionController {
    geometry:     WorldGeometry,
    nav_speed:    f32,
    wander_speed: f32,
    noise_bound:  f32,
}

impl MotionController {
    pub fn new(config: &ExploreConfig) -> Self {
        Self {
            geometry:     config.geometry,
            nav_speed:    config.nav_speed,
            wander_speed: config.wander_speed,
            noise_bound:  config.wander_noise_bound,
        }
    }

    #[inline]
    pub fn geometry(&self) -> &WorldGeometry {
        &self.geometry
    }

    /// `true` if the cell under `p` is off the grid or a wall in `grid`.
    pub fn blocked(&self, p: WorldPoint, grid: &OccupancyGrid) -> bool {
        !matches!(grid.get(self.geometry.cell_of(p)), Some(CellState::Free | CellState::Unknown))
    }

    // ── Route following ───────────────────────────────────────────────────

    /// Pure pursuit toward the center of the first route cell.
    ///
    /// Heading is re-aimed at the target every tick.  When the target is
    /// closer than one tick's travel the agent snaps onto it and the cell is
    /// popped.
    pub fn follow_route(&self, agent: &mut AgentState) -> FollowStep {
        let Some(&next) = agent.route.front() else {
            return FollowStep::NoRoute;
        };
        let target = self.geometry.cell_center(next);
        if agent.position.distance(target) < self.nav_speed {
            agent.position = target;
            agent.route.pop_front();
            return FollowStep::Reached(next);
        }
        agent.heading  = agent.position.angle_to(target);
        agent.position = agent.position.advanced(agent.heading, self.nav_speed);
        FollowStep::Moving
    }

    // ── Wandering ─────────────────────────────────────────────────────────

    /// One tick of autonomous wandering against ground truth.
    ///
    /// Crossing a world border reflects the velocity component normal to
    /// that border.  Otherwise, landing on a truth wall reflects `dx` if the
    /// cell one x-step ahead in the current row is a wall, else `dy`.  On any
    /// reflection the new heading gets a uniform perturbation in
    /// `[-noise_bound, noise_bound]`.
    ///
    /// Returns `true` if the agent bounced this tick.
    pub fn wander(&self, agent: &mut AgentState, truth: &TruthGrid, rng: &mut SimRng) -> bool {
        let g = &self.geometry;
        let r = g.agent_radius;
        let pos = agent.position;

        let mut dx = agent.heading.cos() * self.wander_speed;
        let mut dy = agent.heading.sin() * self.wander_speed;
        let next = WorldPoint::new(pos.x + dx, pos.y + dy);

        let mut hit = false;
        if next.x - r < 0.0 || next.x + r > g.width() {
            dx = -dx;
            hit = true;
        }
        if next.y - r < 0.0 || next.y + r > g.height() {
            dy = -dy;
            hit = true;
        }

        if !hit && truth.get(self.clip(g.cell_of(next))) == Some(CellState::Wall) {
            hit = true;
            let row = self.clip(g.cell_of(pos)).y;
            let check_x = ((pos.x + dx) / g.cell_size).floor() as i32;
            if truth.get(Cell::new(check_x, row)) == Some(CellState::Wall) {
                dx = -dx;
            } else {
                dy = -dy;
            }
        }

        agent.heading = dy.atan2(dx);
        if hit {
            agent.heading += rng.symmetric(self.noise_bound);
        }
        agent.position = g.clamp(pos.advanced(agent.heading, self.wander_speed));
        hit
    }

    // ── Manual control ────────────────────────────────────────────────────

    /// Apply an external displacement if the destination is clear in truth.
    ///
    /// Returns `true` if the agent moved.
    pub fn manual_step(&self, agent: &mut AgentState, dx: f32, dy: f32, truth: &TruthGrid) -> bool {
        let candidate = WorldPoint::new(agent.position.x + dx, agent.position.y + dy);
        if self.blocked(candidate, truth.as_grid()) {
            return false;
        }
        if dx != 0.0 || dy != 0.0 {
            agent.heading = dy.atan2(dx);
        }
        agent.position = self.geometry.clamp(candidate);
        true
    }

    /// Clamp a cell index into the grid.
    fn clip(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.x.clamp(0, self.geometry.cols as i32 - 1),
            cell.y.clamp(0, self.geometry.rows as i32 - 1),
        )
    }
}
