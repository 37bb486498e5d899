//! Exploration state-machine states.

/// The controller mode, carried on the agent as its mode tag.
///
/// Transitions (see `ex-sim`):
///
/// | From       | Trigger                               | To                   |
/// |------------|---------------------------------------|----------------------|
/// | `Explore`  | termination policy satisfied          | `Idle` / `Finished`  |
/// | `Explore`  | pause toggle                          | `Idle`               |
/// | `Idle`     | pause toggle                          | `Explore`            |
/// | `Idle`     | navigate-to accepted                  | `Navigate`           |
/// | `Navigate` | route emptied, exploration incomplete | `Idle`               |
/// | `Navigate` | route emptied, exploration complete   | `Finished`           |
/// | `Finished` | navigate-to accepted                  | `Navigate`           |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Explore,
    Navigate,
    /// Paused or waiting for a navigation target.
    Idle,
    Finished,
}

impl Mode {
    /// `true` in the modes that accept a navigate-to command.
    #[inline]
    pub fn accepts_navigation(self) -> bool {
        matches!(self, Mode::Idle | Mode::Finished)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Explore  => "explore",
            Mode::Navigate => "navigate",
            Mode::Idle     => "idle",
            Mode::Finished => "finished",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
