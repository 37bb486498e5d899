//! `ex-core` — foundational types for the `rust_explore` mapping engine.
//!
//! This crate is a dependency of every other `ex-*` crate.  It has no `ex-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`cell`]     | `Cell` grid coordinate, `CellState` (`Wall`/`Free`/`Unknown`) |
//! | [`geo`]      | `WorldPoint`, `WorldGeometry` (cell ↔ world conversion)     |
//! | [`mode`]     | `Mode` — the exploration state-machine state                |
//! | [`time`]     | `Tick`, `SimClock`                                          |
//! | [`rng`]      | `SimRng` (seeded, deterministic)                            |
//! | [`config`]   | `ExploreConfig`, `SimConfig`, termination/movement policies |
//! | [`error`]    | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod geo;
pub mod mode;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, CellState};
pub use config::{Completion, ExploreConfig, MovementPolicy, SimConfig, TerminationPolicy};
pub use error::{CoreError, CoreResult};
pub use geo::{WorldGeometry, WorldPoint};
pub use mode::Mode;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
