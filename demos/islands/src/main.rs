//! islands — headless run of the grid exploration engine.
//!
//! Generates a walled room scattered with rectangular islands (or loads a
//! 0/1 matrix with `--map`), lets the agent explore it until the
//! termination policy fires, optionally drives to a cell with `--goto`, and
//! writes telemetry, saved maps and a JSON run summary to `--out`.
//!
//! ```text
//! RUST_LOG=ex_sim=debug islands --movement frontier --termination frontier
//! ```

mod cli;
mod settings;
mod world;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ex_core::{Cell, CellState, Mode, MovementPolicy, SimRng, Tick};
use ex_grid::BeliefGrid;
use ex_output::writer::OutputWriter;
use ex_output::{load_truth, save_matrix, CsvWriter, SimOutputObserver, FINAL_MAP_FILE};
use ex_sim::{Command, CommandError, SimBuilder, SimObserver, Snapshot, TickReport};
use ex_spatial::AStarRouter;
use serde::Serialize;
use tracing::{info, warn};

use cli::Args;
use settings::Settings;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Preferred spawn cell, matching a start 50 units in from the corner at the
/// default cell size.
const SPAWN_CELL: Cell = Cell::new(2, 2);

/// Tick budget for the optional `--goto` leg.
const GOTO_TICK_BUDGET: u64 = 20_000;

/// Tick cap for `--movement manual`, which has no input source here.
const MANUAL_TICK_CAP: u64 = 600;

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Forwards to the output observer while counting what happened.  The
/// writer is only finished by [`finish`][Self::finish], so a `--goto` leg
/// after `run` still reaches the CSV files.
struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    ticks:         u64,
    revealed:      usize,
    mode_changes:  usize,
    rejections:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, ticks: 0, revealed: 0, mode_changes: 0, rejections: 0 }
    }

    fn finish(&mut self, tick: Tick) {
        self.inner.on_sim_end(tick);
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.ticks += 1;
        self.revealed += report.revealed;
        self.inner.on_tick_end(tick, report);
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &Snapshot<'_>) {
        self.inner.on_snapshot(tick, snapshot);
    }

    fn on_mode_change(&mut self, tick: Tick, from: Mode, to: Mode) {
        self.mode_changes += 1;
        self.inner.on_mode_change(tick, from, to);
    }

    fn on_command_rejected(&mut self, tick: Tick, command: &Command, error: &CommandError) {
        self.rejections += 1;
        warn!(tick = %tick, command = command.name(), "{error}");
        self.inner.on_command_rejected(tick, command, error);
    }

    fn on_save_request(&mut self, tick: Tick, belief: &BeliefGrid) {
        self.inner.on_save_request(tick, belief);
    }

    fn on_finalized(&mut self, tick: Tick, belief: &BeliefGrid) {
        self.inner.on_finalized(tick, belief);
    }
}

// ── Run summary ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RunSummary {
    seed:                 u64,
    movement:             &'static str,
    ticks:                u64,
    sim_secs:             f64,
    wall_secs:            f64,
    final_mode:           Mode,
    exploration_complete: bool,
    coverage:             f64,
    cells_revealed:       usize,
    free_cells:           usize,
    wall_cells:           usize,
    truth_free_cells:     usize,
    mode_changes:         usize,
    rejected_commands:    usize,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. Settings.
    let settings = Settings::resolve(&args)?;
    let mut sim_config = settings.sim.clone();
    let mut explore = settings.explore.clone();
    if explore.movement == MovementPolicy::Manual && sim_config.max_ticks > MANUAL_TICK_CAP {
        warn!(
            cap = MANUAL_TICK_CAP,
            "manual movement gets no move commands in a headless run; capping max_ticks"
        );
        sim_config.max_ticks = MANUAL_TICK_CAP;
    }

    // 2. Ground truth.
    let truth = match &args.map {
        Some(path) => {
            let truth = load_truth(path).with_context(|| format!("loading map {}", path.display()))?;
            explore.geometry.cols = truth.cols();
            explore.geometry.rows = truth.rows();
            info!(path = %path.display(), cols = truth.cols(), rows = truth.rows(), "map loaded");
            truth
        }
        None => {
            let mut rng = SimRng::new(sim_config.seed).child(1);
            let g = explore.geometry;
            let truth = world::generate_islands(g.cols, g.rows, &settings.islands, &mut rng)?;
            info!(cols = g.cols, rows = g.rows, "island map generated");
            truth
        }
    };
    let truth = Arc::new(truth);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    save_matrix(&args.out.join("truth_map.txt"), truth.as_grid(), true)?;

    // 3. Build sim.
    let mut builder = SimBuilder::new(sim_config.clone(), explore.clone(), Arc::clone(&truth), AStarRouter);
    if truth.get(SPAWN_CELL) == Some(CellState::Free) {
        builder = builder.start_cell(SPAWN_CELL);
    }
    let mut sim = builder.build()?;
    info!(
        start = %sim.agent_cell(),
        movement = explore.movement.as_str(),
        radius = explore.sensor_radius,
        "agent placed"
    );

    // 4. Output.
    let writer = CsvWriter::new(&args.out)?;
    let mut output = SimOutputObserver::new(writer, &sim_config, &args.out);
    if args.no_header {
        output = output.without_header();
    }
    let mut obs = CountingObserver::new(output);

    // 5. Explore.
    let t0 = Instant::now();
    sim.run(&mut obs);

    // 6. Optional navigation leg.
    if let Some(target) = args.goto {
        let leg_start = sim.clock.current_tick;
        sim.submit(Command::NavigateTo(target));
        sim.run_ticks(1, &mut obs);
        let mut budget = GOTO_TICK_BUDGET;
        while sim.mode() == Mode::Navigate && budget > 0 {
            sim.run_ticks(1, &mut obs);
            budget -= 1;
        }
        info!(
            cell = %sim.agent_cell(),
            mode = %sim.mode(),
            ticks = sim.clock.current_tick.since(leg_start),
            "navigation leg done"
        );
    }

    let final_tick = sim.clock.current_tick;
    obs.finish(final_tick);
    let wall_secs = t0.elapsed().as_secs_f64();
    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    let summary = RunSummary {
        seed:                 sim_config.seed,
        movement:             explore.movement.as_str(),
        ticks:                obs.ticks,
        sim_secs:             sim.clock.elapsed_secs(),
        wall_secs,
        final_mode:           sim.mode(),
        exploration_complete: sim.exploration_complete,
        coverage:             sim.coverage,
        cells_revealed:       obs.revealed,
        free_cells:           sim.belief.as_grid().count(CellState::Free),
        wall_cells:           sim.belief.as_grid().count(CellState::Wall),
        truth_free_cells:     truth.as_grid().count(CellState::Free),
        mode_changes:         obs.mode_changes,
        rejected_commands:    obs.rejections,
    };
    let json = serde_json::to_string_pretty(&summary)?;
    std::fs::write(args.out.join("summary.json"), &json)?;

    println!("Run complete in {:.3} s ({} ticks, {:.1} s simulated)", wall_secs, summary.ticks, summary.sim_secs);
    println!("  final mode     : {}", summary.final_mode);
    println!("  coverage       : {:.2} %", summary.coverage * 100.0);
    println!("  free cells     : {} of {} in truth", summary.free_cells, summary.truth_free_cells);
    if sim.exploration_complete {
        println!("  final map      : {}", args.out.join(FINAL_MAP_FILE).display());
    }
    println!("  summary        : {}", args.out.join("summary.json").display());

    Ok(())
}
