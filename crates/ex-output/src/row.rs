//! Plain data row types written by output backends.

use ex_core::Mode;

/// Agent and map state at one snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub mode:         Mode,
    /// Fraction of cells no longer Unknown.
    pub coverage:     f64,
    pub x:            f32,
    pub y:            f32,
    pub heading:      f32,
    /// Cells left on the current route.
    pub route_len:    u64,
}

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:   u64,
    /// `mode_change`, `rejected`, `saved`, or `finalized`.
    pub kind:   &'static str,
    pub detail: String,
}
