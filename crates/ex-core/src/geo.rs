//! Continuous world coordinates and the mapping between world space and the
//! cell grid.
//!
//! World units are display pixels when rendered: a cell is
//! `cell_size` units wide and the world spans `cols * cell_size` by
//! `rows * cell_size`.

use crate::{Cell, CoreError, CoreResult};

/// A position in world units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: WorldPoint) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the vector from `self` to `other`, in radians.
    #[inline]
    pub fn angle_to(self, other: WorldPoint) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// The point `distance` units away along `heading`.
    #[inline]
    pub fn advanced(self, heading: f32, distance: f32) -> WorldPoint {
        WorldPoint::new(
            self.x + heading.cos() * distance,
            self.y + heading.sin() * distance,
        )
    }
}

impl std::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── WorldGeometry ─────────────────────────────────────────────────────────────

/// Grid dimensions plus the world-space scale of one cell and the agent's
/// collision radius.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldGeometry {
    pub cols: u32,
    pub rows: u32,
    /// Edge length of one cell in world units.
    pub cell_size: f32,
    /// Agent body radius in world units.
    pub agent_radius: f32,
}

impl Default for WorldGeometry {
    fn default() -> Self {
        Self { cols: 40, rows: 30, cell_size: 20.0, agent_radius: 10.0 }
    }
}

impl WorldGeometry {
    #[inline]
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// The cell containing `p` (floor division; may be out of bounds).
    #[inline]
    pub fn cell_of(&self, p: WorldPoint) -> Cell {
        Cell::new(
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }

    /// Like [`cell_of`][Self::cell_of] but fails when `p` lies off the grid.
    pub fn cell_checked(&self, p: WorldPoint) -> CoreResult<Cell> {
        let cell = self.cell_of(p);
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(CoreError::OutOfBounds { x: cell.x, y: cell.y, cols: self.cols, rows: self.rows })
        }
    }

    /// World-space center of `cell`.
    #[inline]
    pub fn cell_center(&self, cell: Cell) -> WorldPoint {
        WorldPoint::new(
            (cell.x as f32 + 0.5) * self.cell_size,
            (cell.y as f32 + 0.5) * self.cell_size,
        )
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.cols && (cell.y as u32) < self.rows
    }

    /// Clamp `p` so the agent body stays inside the world.
    pub fn clamp(&self, p: WorldPoint) -> WorldPoint {
        let r = self.agent_radius;
        WorldPoint::new(
            p.x.clamp(r, self.width() - r),
            p.y.clamp(r, self.height() - r),
        )
    }

    /// Check dimensions and scale.
    pub fn validate(&self) -> CoreResult<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(CoreError::Config(format!(
                "grid must be at least 1x1, got {}x{}", self.cols, self.rows
            )));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(CoreError::Config(format!("cell_size must be positive, got {}", self.cell_size)));
        }
        if !(self.agent_radius.is_finite() && self.agent_radius > 0.0) {
            return Err(CoreError::Config(format!(
                "agent_radius must be positive, got {}", self.agent_radius
            )));
        }
        if 2.0 * self.agent_radius >= self.width().min(self.height()) {
            return Err(CoreError::Config(format!(
                "agent diameter {} does not fit in a {}x{} world",
                2.0 * self.agent_radius, self.width(), self.height()
            )));
        }
        Ok(())
    }
}
