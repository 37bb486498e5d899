//! `ex-spatial` — search over occupancy grids.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`frontier`] | `nearest_unknown` — BFS to the closest reachable Unknown cell |
//! | [`router`]   | `Router` trait, `AStarRouter`, `Route`, `Passability`        |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                           |
//!
//! Both searches expand the four edge neighbors in the fixed
//! [`NEIGHBORS_4`][ex_core::cell::NEIGHBORS_4] order, so results are
//! deterministic for a given grid.
//!
//! Frontier search treats Unknown as traversable (it is looking for the edge
//! of knowledge); routing is parameterised by [`Passability`], which lets
//! navigation insist on certainty while frontier-driven exploration may cut
//! through Unknown space.

pub mod error;
pub mod frontier;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use frontier::nearest_unknown;
pub use router::{AStarRouter, Passability, Route, Router};
