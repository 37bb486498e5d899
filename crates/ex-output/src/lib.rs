//! `ex-output` — map files and run telemetry.
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`matrix`]   | Text occupancy matrices: `read_matrix`, `write_matrix`, files  |
//! | [`csv`]      | `CsvWriter` — `tick_summaries.csv`, `events.csv`               |
//! | [`observer`] | `SimOutputObserver` — `SimObserver` bridge, map auto-save      |
//! | [`row`]      | `TickSummaryRow`, `EventRow`                                   |
//! | [`writer`]   | `OutputWriter` trait                                           |
//!
//! The engine itself performs no I/O; everything that touches the
//! filesystem lives here and is driven through `ex_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ex_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config, "./output");
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod matrix;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use matrix::{load_matrix, load_truth, read_matrix, save_matrix, write_matrix, MatrixFormat};
pub use observer::{SimOutputObserver, FINAL_MAP_FILE};
pub use row::{EventRow, TickSummaryRow};
pub use writer::OutputWriter;
