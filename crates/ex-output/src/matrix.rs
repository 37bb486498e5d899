//! Whitespace-separated occupancy matrices.
//!
//! One text line per grid row (top row first), one integer per cell:
//! `0` wall, `1` free, `2` unknown.  `#` starts a comment that runs to the
//! end of the line; blank and comment-only lines are skipped.
//!
//! ```text
//! # size: 4x2
//! # 2: unknown, 1: free, 0: wall
//! 0 0 0 0
//! 0 1 2 0
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ex_core::CellState;
use ex_grid::{OccupancyGrid, TruthGrid};

use crate::{OutputError, OutputResult};

/// Which cell codes a matrix may contain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatrixFormat {
    /// `0`/`1` only: ground-truth maps.
    Binary,
    /// `0`/`1`/`2`: belief maps, which may still hold Unknown.
    Ternary,
}

impl MatrixFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            MatrixFormat::Binary  => "binary",
            MatrixFormat::Ternary => "ternary",
        }
    }

    fn decode(self, value: i64) -> Option<CellState> {
        match (self, value) {
            (_, 0)                     => Some(CellState::Wall),
            (_, 1)                     => Some(CellState::Free),
            (MatrixFormat::Ternary, 2) => Some(CellState::Unknown),
            _                          => None,
        }
    }
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Parse a matrix, rejecting non-integer tokens, codes outside `format`,
/// rows of unequal length, and input without any data rows.
pub fn read_matrix<R: BufRead>(reader: R, format: MatrixFormat) -> OutputResult<OccupancyGrid> {
    let mut rows: Vec<Vec<CellState>> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let data = line.split('#').next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }

        let row = data
            .split_whitespace()
            .map(|token| {
                let value: i64 = token.parse().map_err(|_| OutputError::Parse {
                    line:  line_no,
                    token: token.to_owned(),
                })?;
                format.decode(value).ok_or(OutputError::IllegalValue {
                    line: line_no,
                    value,
                    format: format.as_str(),
                })
            })
            .collect::<OutputResult<Vec<_>>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(OutputError::Ragged { line: line_no, expected: first.len(), got: row.len() });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(OutputError::Empty);
    }
    Ok(OccupancyGrid::from_rows(rows)?)
}

/// Read a matrix file.
pub fn load_matrix(path: &Path, format: MatrixFormat) -> OutputResult<OccupancyGrid> {
    read_matrix(BufReader::new(File::open(path)?), format)
}

/// Read a binary matrix file as ground truth.
pub fn load_truth(path: &Path) -> OutputResult<TruthGrid> {
    Ok(TruthGrid::try_from(load_matrix(path, MatrixFormat::Binary)?)?)
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Write `grid` one row per line.  With `header`, two comment lines giving
/// the size and the code legend come first.
pub fn write_matrix<W: Write>(grid: &OccupancyGrid, mut out: W, header: bool) -> OutputResult<()> {
    if header {
        writeln!(out, "# size: {}x{}", grid.cols(), grid.rows())?;
        writeln!(out, "# 2: unknown, 1: free, 0: wall")?;
    }
    for row in grid.row_slices() {
        let line: Vec<String> = row.iter().map(|s| s.code().to_string()).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    out.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `grid` to it.
pub fn save_matrix(path: &Path, grid: &OccupancyGrid, header: bool) -> OutputResult<()> {
    write_matrix(grid, BufWriter::new(File::create(path)?), header)
}
