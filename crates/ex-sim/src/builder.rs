//! Fluent builder for constructing a [`Sim`].

use std::collections::VecDeque;
use std::sync::Arc;

use ex_core::{Cell, CellState, ExploreConfig, SimConfig, SimRng, WorldPoint};
use ex_grid::{BeliefGrid, GridError, SensorModel, TruthGrid};
use ex_mobility::{AgentState, MotionController};
use ex_spatial::Router;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick rate, tick cap, seed, snapshot interval
/// - [`ExploreConfig`] — geometry, sensor radius, speeds, policies
/// - the [`TruthGrid`], whose dimensions must match `explore.geometry`
/// - `R: Router` — the route planner (e.g. [`ex_spatial::AStarRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                         |
/// |------------------------|-------------------------------------------------|
/// | `.start_position(p)`   | Center of the first Free truth cell (row-major) |
/// | `.start_cell(c)`       | same                                            |
/// | `.heading(a)`          | Uniform in `[0, 2π)` from the seeded RNG        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(sim_config, explore, truth, AStarRouter)
///     .start_cell(Cell::new(2, 2))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<R: Router> {
    config:   SimConfig,
    explore:  ExploreConfig,
    truth:    Arc<TruthGrid>,
    router:   R,
    position: Option<WorldPoint>,
    heading:  Option<f32>,
}

impl<R: Router> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:  SimConfig,
        explore: ExploreConfig,
        truth:   impl Into<Arc<TruthGrid>>,
        router:  R,
    ) -> Self {
        Self {
            config,
            explore,
            truth: truth.into(),
            router,
            position: None,
            heading: None,
        }
    }

    /// Place the agent at a world position.  The cell under it must be Free
    /// in truth.
    pub fn start_position(mut self, position: WorldPoint) -> Self {
        self.position = Some(position);
        self
    }

    /// Place the agent at the center of `cell`.
    pub fn start_cell(mut self, cell: Cell) -> Self {
        self.position = Some(self.explore.geometry.cell_center(cell));
        self
    }

    /// Fix the initial heading (radians) instead of sampling it.
    pub fn heading(mut self, heading: f32) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`] in `Explore`.
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config.validate()?;
        self.explore.validate()?;

        let geometry = self.explore.geometry;
        if geometry.cols != self.truth.cols() || geometry.rows != self.truth.rows() {
            return Err(SimError::Grid(GridError::DimensionMismatch {
                cols:     geometry.cols,
                rows:     geometry.rows,
                got_cols: self.truth.cols(),
                got_rows: self.truth.rows(),
            }));
        }

        // ── Resolve the start pose ────────────────────────────────────────
        let position = match self.position {
            Some(p) => {
                let cell = geometry.cell_of(p);
                match self.truth.get(cell) {
                    None                  => return Err(SimError::StartOutOfBounds(cell)),
                    Some(CellState::Free) => geometry.clamp(p),
                    Some(_)               => return Err(SimError::StartBlocked(cell)),
                }
            }
            None => {
                let cell = self
                    .truth
                    .as_grid()
                    .iter()
                    .find(|&(_, s)| s == CellState::Free)
                    .map(|(c, _)| c)
                    .ok_or(SimError::StartBlocked(Cell::new(0, 0)))?;
                geometry.cell_center(cell)
            }
        };

        let mut rng = SimRng::new(self.config.seed);
        let heading = self.heading.unwrap_or_else(|| rng.heading());

        Ok(Sim {
            clock:                self.config.make_clock(),
            config:               self.config,
            motion:               MotionController::new(&self.explore),
            sensor:               SensorModel::new(self.explore.sensor_radius),
            belief:               BeliefGrid::for_truth(&self.truth),
            explore:              self.explore,
            truth:                self.truth,
            agent:                AgentState::new(position, heading),
            router:               self.router,
            rng,
            commands:             VecDeque::new(),
            coverage:             0.0,
            exploration_complete: false,
        })
    }
}
