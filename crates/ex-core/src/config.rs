//! Engine and run configuration.
//!
//! The four historical variants of the explorer differed only in sensor
//! radius, wander speed and noise, termination policy, and what drives
//! exploration.  [`ExploreConfig`] carries exactly those knobs plus the
//! world geometry; [`SimConfig`] carries the run-level settings.
//!
//! Typically loaded from a TOML file by the application crate (enable the
//! `serde` feature) and passed to `ex_sim::SimBuilder`.

use crate::{CoreError, CoreResult, WorldGeometry};

// ── Policies ──────────────────────────────────────────────────────────────────

/// Where the controller goes once the coverage goal is met.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Completion {
    /// Wait for navigation targets; exploration can be resumed.
    #[default]
    Idle,
    Finished,
}

/// When exploration stops.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TerminationPolicy {
    /// Stop once the coverage ratio reaches `goal` (in `(0, 1]`).
    ///
    /// Unreachable pockets may still be Unknown at that point; finalize
    /// closes them.
    Coverage { goal: f64, then: Completion },

    /// Stop once no Unknown cell is reachable from the agent through
    /// non-Wall cells.  May trigger below 100 % coverage.
    FrontierExhaustion,
}

impl Default for TerminationPolicy {
    fn default() -> Self {
        TerminationPolicy::Coverage { goal: 1.0, then: Completion::Idle }
    }
}

/// What moves the agent while exploring.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MovementPolicy {
    /// Straight-line travel, bouncing off walls and borders with a random
    /// heading perturbation.
    #[default]
    Wander,
    /// Only externally supplied displacement commands move the agent.
    Manual,
    /// Plan to the nearest reachable Unknown cell and follow that route.
    Frontier,
}

impl MovementPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementPolicy::Wander   => "wander",
            MovementPolicy::Manual   => "manual",
            MovementPolicy::Frontier => "frontier",
        }
    }
}

// ── ExploreConfig ─────────────────────────────────────────────────────────────

/// Parameter record for one exploration engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExploreConfig {
    pub geometry: WorldGeometry,

    /// Half-width of the square sensing window, in cells.  `0` senses only
    /// the agent's own cell; at most `max(cols, rows)`, which already
    /// covers the whole grid.
    pub sensor_radius: u32,

    /// World units per tick while wandering (or per manual step).
    pub wander_speed: f32,

    /// World units per tick while following a route.
    pub nav_speed: f32,

    /// Bounce perturbation bound in radians; the new heading is the
    /// reflected angle plus a uniform sample in `[-bound, bound]`.
    pub wander_noise_bound: f32,

    pub termination: TerminationPolicy,

    pub movement: MovementPolicy,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            geometry:           WorldGeometry::default(),
            sensor_radius:      4,
            wander_speed:       8.0,
            nav_speed:          5.0,
            wander_noise_bound: 0.35,
            termination:        TerminationPolicy::default(),
            movement:           MovementPolicy::default(),
        }
    }
}

impl ExploreConfig {
    /// Reject parameter combinations the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        self.geometry.validate()?;

        let span = self.geometry.cols.max(self.geometry.rows);
        if self.sensor_radius > span {
            return Err(CoreError::Config(format!(
                "sensor_radius {} exceeds the grid span {span}", self.sensor_radius
            )));
        }

        for (name, speed) in [("wander_speed", self.wander_speed), ("nav_speed", self.nav_speed)] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(CoreError::Config(format!("{name} must be positive, got {speed}")));
            }
        }
        if !(self.wander_noise_bound.is_finite() && self.wander_noise_bound >= 0.0) {
            return Err(CoreError::Config(format!(
                "wander_noise_bound must be non-negative, got {}", self.wander_noise_bound
            )));
        }
        if let TerminationPolicy::Coverage { goal, .. } = self.termination {
            if !(goal > 0.0 && goal <= 1.0) {
                return Err(CoreError::Config(format!("coverage goal must be in (0, 1], got {goal}")));
            }
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Fixed tick rate.  Default: 60.
    pub tick_rate_hz: u32,

    /// Hard cap on ticks for `Sim::run`.
    pub max_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Report a snapshot every N ticks.  `0` disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz:          60,
            max_ticks:             60 * 60 * 10,
            seed:                  42,
            output_interval_ticks: 60,
        }
    }
}

impl SimConfig {
    /// The tick at which a run stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> crate::Tick {
        crate::Tick(self.max_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> crate::SimClock {
        crate::SimClock::new(self.tick_rate_hz)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_rate_hz == 0 {
            return Err(CoreError::Config("tick_rate_hz must be at least 1".into()));
        }
        Ok(())
    }
}
