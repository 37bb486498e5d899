//! `ex-mobility` — agent pose and movement.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`state`]      | `AgentState` — position, heading, route, mode tag          |
//! | [`controller`] | `MotionController` — route following, wandering, manual steps |
//!
//! # Movement model
//!
//! Positions are continuous world coordinates; the grid cell under the agent
//! is `floor(position / cell_size)`.  Each tick applies at most one of:
//!
//! 1. **Route following**: pure pursuit toward the center of the next route
//!    cell at `nav_speed`, snapping onto it once within one tick's travel.
//!    No collision check is made here: navigation routes cross only
//!    known-free cells, and the controller feels each Unknown cell of a
//!    frontier route against truth before stepping into it.
//! 2. **Wandering**: straight-line travel at `wander_speed`, reflecting off
//!    world borders and truth-grid walls with a random heading perturbation.
//! 3. **Manual step**: an externally supplied displacement, applied only if
//!    the destination cell is in bounds and not a wall in truth.
//!
//! After wandering or a manual step the position is clamped so the agent's
//! body stays inside the world.

pub mod controller;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::{FollowStep, MotionController};
pub use state::AgentState;
