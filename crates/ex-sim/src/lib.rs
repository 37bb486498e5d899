//! `ex-sim` — the exploration controller and its fixed-tick loop.
//!
//! # Tick cycle
//!
//! ```text
//! every tick:
//!   ① Commands — apply queued Command values in arrival order
//!                (pause toggle, manual move, navigate-to, save).
//!   ② Sense    — copy truth into belief around the agent's cell.
//!   ③ Move     — Explore: wander / manual / frontier route
//!                Navigate: follow route; on empty → Finished or Idle
//!                Idle, Finished: stay put
//!   ④ Assess   — recompute coverage; in Explore test the termination
//!                policy and, once met, finalize belief and leave Explore.
//! ```
//!
//! # State machine
//!
//! ```text
//!            pause                 navigate-to ok
//!   Explore ───────▶ Idle ─────────────────────────▶ Navigate
//!      │   ◀───────   ▲                                  │
//!      │    pause     └──── route empty, incomplete ─────┤
//!      │ done                                            │
//!      └──────────▶ Idle / Finished ◀── route empty, complete
//! ```
//!
//! Finished accepts navigate-to as Idle does.  Rejected commands are
//! reported through [`SimObserver::on_command_rejected`] and leave the state
//! untouched.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ex_core::{ExploreConfig, SimConfig};
//! use ex_sim::{NoopObserver, SimBuilder};
//! use ex_spatial::AStarRouter;
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), ExploreConfig::default(), truth, AStarRouter)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod command;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use command::Command;
pub use error::{CommandError, SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, Snapshot, TickReport};
pub use sim::Sim;
