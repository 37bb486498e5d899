//! External input to the controller.

use ex_core::Cell;

/// A queued input event, applied at the start of the next tick in arrival
/// order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Flip between `Explore` and `Idle`.
    TogglePause,
    /// Displace the agent by `(dx, dy)` world units if the destination is
    /// clear in truth.
    Manual { dx: f32, dy: f32 },
    /// Plan a known-free route to a cell and start navigating.
    NavigateTo(Cell),
    /// Ask the observer to persist the current belief.
    Save,
}

impl Command {
    /// Short name used in logs and rejection messages.
    pub fn name(&self) -> &'static str {
        match self {
            Command::TogglePause   => "pause toggle",
            Command::Manual { .. } => "manual move",
            Command::NavigateTo(_) => "navigate-to",
            Command::Save          => "save",
        }
    }
}
