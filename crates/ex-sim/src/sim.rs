//! The `Sim` struct and its tick loop.

use std::collections::VecDeque;
use std::sync::Arc;

use ex_core::{
    Cell, CellState, Completion, ExploreConfig, Mode, MovementPolicy, SimClock, SimConfig, SimRng,
    TerminationPolicy, Tick,
};
use ex_grid::{BeliefGrid, SensorModel, TruthGrid};
use ex_mobility::{AgentState, FollowStep, MotionController};
use ex_spatial::{nearest_unknown, Passability, Router, SpatialError};
use tracing::{debug, info};

use crate::{Command, CommandError, SimObserver, Snapshot, TickReport};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The exploration controller and everything it owns.
///
/// `Sim<R>` drives the fixed-tick cycle:
///
/// 1. **Commands**: queued [`Command`]s are applied in arrival order.
/// 2. **Sense**: the [`SensorModel`] copies truth into belief around the
///    agent's cell.
/// 3. **Decide and move**, by mode:
///    - `Explore`: wander, do nothing (manual), or plan to the nearest
///      frontier and follow that route, per [`MovementPolicy`].
///    - `Navigate`: follow the installed route; when it empties go to
///      `Finished` if exploration is complete, else `Idle`.
///    - `Idle`, `Finished`: stay put.
/// 4. **Coverage**: recompute the coverage ratio and, in `Explore`, test the
///    [`TerminationPolicy`]; on success finalize the belief and leave
///    `Explore`.
///
/// The truth grid is shared read-only; the belief grid and agent are owned
/// exclusively.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    /// Run-level configuration (tick rate, cap, seed, snapshot interval).
    pub config: SimConfig,

    /// Engine parameters.
    pub explore: ExploreConfig,

    pub clock: SimClock,

    /// Ground truth.  Never mutated.
    pub truth: Arc<TruthGrid>,

    /// The agent's map.
    pub belief: BeliefGrid,

    pub agent: AgentState,

    pub motion: MotionController,

    pub sensor: SensorModel,

    /// Route planner for navigate-to commands and frontier driving.
    pub router: R,

    pub rng: SimRng,

    /// Commands waiting for the next tick, oldest first.
    pub commands: VecDeque<Command>,

    /// Coverage ratio as of the end of the last tick.
    pub coverage: f64,

    /// Set once the termination policy has fired and belief is finalized.
    pub exploration_complete: bool,
}

impl<R: Router> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Queue a command for the start of the next tick.
    pub fn submit(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.agent.mode
    }

    /// Grid cell under the agent.
    #[inline]
    pub fn agent_cell(&self) -> Cell {
        self.agent.cell(&self.explore.geometry)
    }

    /// `true` once exploration is complete and no route is being followed.
    pub fn is_done(&self) -> bool {
        self.exploration_complete && !self.agent.has_route() && self.agent.mode != Mode::Explore
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            belief:   &self.belief,
            position: self.agent.position,
            heading:  self.agent.heading,
            route:    &self.agent.route,
            mode:     self.agent.mode,
            coverage: self.coverage,
        }
    }

    /// Run from the current tick until `config.end_tick()` or until
    /// [`is_done`][Self::is_done].
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() && !self.is_done() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// and completion).
    ///
    /// Useful for tests and interactive stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let report = self.process_tick(now, observer);
        observer.on_tick_end(now, &report);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.snapshot());
        }
        self.clock.advance();
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> TickReport {
        // ── Phase 1: external commands ────────────────────────────────────
        while let Some(command) = self.commands.pop_front() {
            if let Err(err) = self.apply_command(now, command, observer) {
                debug!(tick = %now, command = command.name(), error = %err, "command rejected");
                observer.on_command_rejected(now, &command, &err);
            }
        }

        // ── Phase 2: sense ────────────────────────────────────────────────
        let cell = self.agent_cell();
        let revealed = self.sensor.reveal(cell, &self.truth, &mut self.belief);

        // ── Phase 3: decide and move ──────────────────────────────────────
        match self.agent.mode {
            Mode::Explore  => self.explore_step(),
            Mode::Navigate => self.navigate_step(now, observer),
            Mode::Idle | Mode::Finished => {}
        }

        // ── Phase 4: coverage and termination ─────────────────────────────
        self.coverage = self.belief.coverage();
        if self.agent.mode == Mode::Explore && self.termination_reached() {
            self.complete(now, observer);
        }

        TickReport {
            mode:      self.agent.mode,
            coverage:  self.coverage,
            revealed,
            position:  self.agent.position,
            heading:   self.agent.heading,
            route_len: self.agent.route.len(),
        }
    }

    // ── Commands ──────────────────────────────────────────────────────────

    fn apply_command<O: SimObserver>(
        &mut self,
        now: Tick,
        command: Command,
        observer: &mut O,
    ) -> Result<(), CommandError> {
        let mode = self.agent.mode;
        match command {
            Command::TogglePause => match mode {
                Mode::Explore => {
                    self.agent.clear_route();
                    self.set_mode(now, Mode::Idle, observer);
                }
                Mode::Idle => self.set_mode(now, Mode::Explore, observer),
                Mode::Navigate | Mode::Finished => {
                    return Err(CommandError::NotAccepting { command: command.name(), mode });
                }
            },

            Command::Manual { dx, dy } => {
                if mode == Mode::Navigate {
                    return Err(CommandError::NotAccepting { command: command.name(), mode });
                }
                if !self.motion.manual_step(&mut self.agent, dx, dy, &self.truth) {
                    debug!(tick = %now, dx, dy, "manual move blocked");
                }
            }

            Command::NavigateTo(target) => {
                if !mode.accepts_navigation() {
                    return Err(CommandError::NotAccepting { command: command.name(), mode });
                }
                self.navigate_to(now, target, observer)?;
            }

            Command::Save => observer.on_save_request(now, &self.belief),
        }
        Ok(())
    }

    /// Validate `target` against belief, plan over known-free cells, and
    /// install the route.
    fn navigate_to<O: SimObserver>(
        &mut self,
        now: Tick,
        target: Cell,
        observer: &mut O,
    ) -> Result<(), CommandError> {
        match self.belief.get(target) {
            None                     => return Err(CommandError::OutOfBounds(target)),
            Some(CellState::Wall)    => return Err(CommandError::WallTarget(target)),
            Some(CellState::Unknown) => return Err(CommandError::UnknownTarget(target)),
            Some(CellState::Free)    => {}
        }

        let start = self.agent_cell();
        let no_path = CommandError::NoPath { from: start, to: target };
        let route = match self.router.route(self.belief.as_grid(), start, target, Passability::KnownFree) {
            Ok(route) if !route.is_empty() => route,
            Ok(_) | Err(SpatialError::NoPath { .. }) => return Err(no_path),
            Err(SpatialError::OutOfBounds(cell)) => return Err(CommandError::OutOfBounds(cell)),
        };

        debug!(tick = %now, %start, %target, steps = route.len(), "route installed");
        self.agent.set_route(route.cells);
        self.set_mode(now, Mode::Navigate, observer);
        Ok(())
    }

    // ── Per-mode movement ─────────────────────────────────────────────────

    fn explore_step(&mut self) {
        match self.explore.movement {
            MovementPolicy::Wander => {
                self.motion.wander(&mut self.agent, &self.truth, &mut self.rng);
            }
            MovementPolicy::Manual => {}
            MovementPolicy::Frontier => {
                if self.agent.has_route() && !self.frontier_route_valid() {
                    debug!(goal = ?self.agent.route_goal(), "frontier route abandoned");
                    self.agent.clear_route();
                    return;
                }
                if !self.agent.has_route() {
                    self.plan_to_frontier();
                }
                if self.next_cell_blocked() {
                    return;
                }
                self.motion.follow_route(&mut self.agent);
            }
        }
    }

    /// A frontier route stays valid while none of its cells is a known wall
    /// and its goal is still Unknown.
    fn frontier_route_valid(&self) -> bool {
        let goal_unknown = self
            .agent
            .route_goal()
            .is_some_and(|goal| self.belief.get(goal) == Some(CellState::Unknown));
        goal_unknown
            && self
                .agent
                .route
                .iter()
                .all(|&c| self.belief.get(c) != Some(CellState::Wall))
    }

    /// Frontier routes may cross Unknown cells.  Before stepping into one,
    /// feel it against truth; a wall is recorded in belief and the route is
    /// dropped so the next tick replans around it.
    fn next_cell_blocked(&mut self) -> bool {
        let Some(&next) = self.agent.route.front() else {
            return false;
        };
        if self.belief.get(next) != Some(CellState::Unknown) || !self.truth.is_blocked(next) {
            return false;
        }
        self.sensor.touch(next, &self.truth, &mut self.belief);
        debug!(cell = %next, "frontier route blocked by unseen wall");
        self.agent.clear_route();
        true
    }

    fn plan_to_frontier(&mut self) {
        let start = self.agent_cell();
        let Some(goal) = nearest_unknown(self.belief.as_grid(), start) else {
            return;
        };
        match self.router.route(self.belief.as_grid(), start, goal, Passability::NotWall) {
            Ok(route) => {
                debug!(%start, %goal, steps = route.len(), "frontier route installed");
                self.agent.set_route(route.cells);
            }
            Err(e) => debug!(%start, %goal, error = %e, "frontier unreachable"),
        }
    }

    fn navigate_step<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        if let FollowStep::Reached(cell) = self.motion.follow_route(&mut self.agent) {
            if !self.agent.has_route() {
                info!(tick = %now, %cell, "destination reached");
            }
        }
        if !self.agent.has_route() {
            let next = if self.exploration_complete { Mode::Finished } else { Mode::Idle };
            self.set_mode(now, next, observer);
        }
    }

    // ── Termination ───────────────────────────────────────────────────────

    fn termination_reached(&self) -> bool {
        if self.exploration_complete {
            return true;
        }
        match self.explore.termination {
            TerminationPolicy::Coverage { goal, .. } => self.coverage >= goal,
            TerminationPolicy::FrontierExhaustion => {
                nearest_unknown(self.belief.as_grid(), self.agent_cell()).is_none()
            }
        }
    }

    /// Mode entered when exploration completes.
    fn completion_mode(&self) -> Mode {
        match self.explore.termination {
            TerminationPolicy::Coverage { then: Completion::Idle, .. } => Mode::Idle,
            TerminationPolicy::Coverage { then: Completion::Finished, .. }
            | TerminationPolicy::FrontierExhaustion => Mode::Finished,
        }
    }

    fn complete<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        if !self.exploration_complete {
            let closed = self.belief.finalize();
            info!(
                tick = %now,
                coverage_before = self.coverage,
                closed,
                "exploration complete; remaining unknown cells closed as walls"
            );
            self.exploration_complete = true;
            self.coverage = self.belief.coverage();
            observer.on_finalized(now, &self.belief);
        }
        self.agent.clear_route();
        let next = self.completion_mode();
        self.set_mode(now, next, observer);
    }

    fn set_mode<O: SimObserver>(&mut self, now: Tick, to: Mode, observer: &mut O) {
        let from = self.agent.mode;
        if from != to {
            info!(tick = %now, %from, %to, "mode change");
            self.agent.mode = to;
            observer.on_mode_change(now, from, to);
        }
    }
}
