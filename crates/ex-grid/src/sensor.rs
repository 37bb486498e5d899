//! Idealized square-window sensor.
//!
//! No raycasting or occlusion: every in-bounds cell within `radius` cells of
//! the agent along both axes is copied from truth into belief, including
//! cells behind walls.

use ex_core::Cell;

use crate::{BeliefGrid, TruthGrid};

/// Reveals a `(2r + 1) × (2r + 1)` window centered on the agent's cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SensorModel {
    pub radius: u32,
}

impl SensorModel {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }

    /// All cells of the window around `center`, row by row.  Cells off the
    /// grid are included; callers filter by bounds.
    pub fn window(&self, center: Cell) -> impl Iterator<Item = Cell> {
        let r = self.radius as i32;
        (-r..=r).flat_map(move |j| (-r..=r).map(move |i| center.offset(i, j)))
    }

    /// Copy `truth` into `belief` over the window around `center`.
    ///
    /// Returns how many cells went from Unknown to known.  Both grids must
    /// share dimensions (checked once at simulation build time).
    pub fn reveal(&self, center: Cell, truth: &TruthGrid, belief: &mut BeliefGrid) -> usize {
        let mut revealed = 0;
        for cell in self.window(center) {
            if let Some(state) = truth.get(cell) {
                if belief.observe(cell, state) {
                    revealed += 1;
                }
            }
        }
        revealed
    }

    /// Contact observation of one cell, independent of the window: the
    /// agent feels what is directly in its way.  Returns `true` when the
    /// cell was Unknown before.
    pub fn touch(&self, cell: Cell, truth: &TruthGrid, belief: &mut BeliefGrid) -> bool {
        truth.get(cell).is_some_and(|state| belief.observe(cell, state))
    }
}
