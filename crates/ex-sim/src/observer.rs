//! Simulation observer trait for rendering, persistence and progress
//! reporting.

use std::collections::VecDeque;

use ex_core::{Cell, Mode, Tick, WorldPoint};
use ex_grid::BeliefGrid;

use crate::{Command, CommandError};

/// Read-only view of everything a renderer draws.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub belief:   &'a BeliefGrid,
    pub position: WorldPoint,
    pub heading:  f32,
    pub route:    &'a VecDeque<Cell>,
    pub mode:     Mode,
    pub coverage: f64,
}

/// Per-tick summary passed to [`SimObserver::on_tick_end`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub mode:      Mode,
    pub coverage:  f64,
    /// Cells that went from Unknown to known this tick.
    pub revealed:  usize,
    pub position:  WorldPoint,
    pub heading:   f32,
    pub route_len: usize,
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The engine performs no I/O itself;
/// saving a map is done here, in `on_save_request` and `on_finalized`.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_mode_change(&mut self, tick: Tick, from: Mode, to: Mode) {
///         println!("{tick}: {from} -> {to}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before commands are applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks).
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &Snapshot<'_>) {}

    /// Called whenever the controller changes state.
    fn on_mode_change(&mut self, _tick: Tick, _from: Mode, _to: Mode) {}

    /// Called when a queued command could not be applied.
    fn on_command_rejected(&mut self, _tick: Tick, _command: &Command, _error: &CommandError) {}

    /// Called for each [`Command::Save`].
    fn on_save_request(&mut self, _tick: Tick, _belief: &BeliefGrid) {}

    /// Called once when exploration completes, after finalize.
    fn on_finalized(&mut self, _tick: Tick, _belief: &BeliefGrid) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
