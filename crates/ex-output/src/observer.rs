//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter` and
//! persists belief maps.

use std::path::PathBuf;

use ex_core::{Mode, SimClock, SimConfig, Tick};
use ex_grid::BeliefGrid;
use ex_sim::{Command, CommandError, SimObserver, Snapshot};
use tracing::info;

use crate::matrix::save_matrix;
use crate::row::{EventRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// File name written when exploration completes.
pub const FINAL_MAP_FILE: &str = "final_map.txt";

/// A [`SimObserver`] that writes tick summaries and events to any
/// [`OutputWriter`] backend, and saves the belief map as a text matrix on
/// request and on completion.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    map_dir:    PathBuf,
    header:     bool,
    saves:      u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`; maps are saved under `map_dir`
    /// and `config` supplies the tick rate for elapsed-time columns.
    pub fn new(writer: W, config: &SimConfig, map_dir: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            clock:      config.make_clock(),
            map_dir:    map_dir.into(),
            header:     true,
            saves:      0,
            last_error: None,
        }
    }

    /// Omit the `#` comment header from saved maps.
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of manual saves written so far.
    pub fn save_count(&self) -> u32 {
        self.saves
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn event(&mut self, tick: Tick, kind: &'static str, detail: String) {
        let result = self.writer.write_event(&EventRow { tick: tick.0, kind, detail });
        self.store_err(result);
    }

    fn save(&mut self, tick: Tick, belief: &BeliefGrid, file: String) {
        let path = self.map_dir.join(&file);
        let result = save_matrix(&path, belief.as_grid(), self.header);
        if result.is_ok() {
            info!(tick = %tick, path = %path.display(), "map saved");
        }
        self.store_err(result);
        self.event(tick, "saved", file);
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, snapshot: &Snapshot<'_>) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: self.clock.secs_at(tick),
            mode:         snapshot.mode,
            coverage:     snapshot.coverage,
            x:            snapshot.position.x,
            y:            snapshot.position.y,
            heading:      snapshot.heading,
            route_len:    snapshot.route.len() as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_mode_change(&mut self, tick: Tick, from: Mode, to: Mode) {
        self.event(tick, "mode_change", format!("{from} -> {to}"));
    }

    fn on_command_rejected(&mut self, tick: Tick, command: &Command, error: &CommandError) {
        self.event(tick, "rejected", format!("{}: {error}", command.name()));
    }

    fn on_save_request(&mut self, tick: Tick, belief: &BeliefGrid) {
        self.saves += 1;
        let file = format!("manual_save_{:03}.txt", self.saves);
        self.save(tick, belief, file);
    }

    fn on_finalized(&mut self, tick: Tick, belief: &BeliefGrid) {
        self.event(tick, "finalized", format!("coverage {:.4}", belief.coverage()));
        self.save(tick, belief, FINAL_MAP_FILE.to_owned());
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
