//! `ex-grid` — occupancy grids, sensing, and finalization.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`grid`]   | `OccupancyGrid` — dense row-major `CellState` storage           |
//! | [`truth`]  | `TruthGrid` (Wall/Free only, immutable), `TruthGridBuilder`    |
//! | [`belief`] | `BeliefGrid` — the agent's knowledge; coverage and finalize    |
//! | [`sensor`] | `SensorModel` — square-window reveal of truth into belief      |
//! | [`error`]  | `GridError`, `GridResult<T>`                                   |
//!
//! # Knowledge model
//!
//! A `BeliefGrid` starts entirely Unknown.  The only writers are
//! [`SensorModel::reveal`], which copies truth cells into belief, and
//! [`BeliefGrid::finalize`], which closes every remaining Unknown cell as
//! Wall exactly once.  A sensed cell therefore always equals its truth cell
//! and is never reverted to Unknown.

pub mod belief;
pub mod error;
pub mod grid;
pub mod sensor;
pub mod truth;


pub use belief::BeliefGrid;
pub use error::{GridError, GridResult};
pub use grid::OccupancyGrid;
pub use sensor::SensorModel;
pub use truth::{TruthGrid, TruthGridBuilder};
