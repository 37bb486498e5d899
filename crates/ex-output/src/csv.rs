//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EventRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes run telemetry to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "elapsed_secs", "mode", "coverage", "x", "y", "heading", "route_len",
        ])?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["tick", "kind", "detail"])?;

        Ok(Self { summaries, events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.elapsed_secs),
            row.mode.as_str().to_owned(),
            format!("{:.4}", row.coverage),
            format!("{:.2}", row.x),
            format!("{:.2}", row.y),
            format!("{:.4}", row.heading),
            row.route_len.to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[row.tick.to_string(), row.kind.to_owned(), row.detail.clone()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
