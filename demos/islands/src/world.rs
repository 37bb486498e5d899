//! Ground-truth supplier: a walled room scattered with rectangular islands.

use ex_core::SimRng;
use ex_grid::{GridResult, TruthGrid, TruthGridBuilder};
use serde::Deserialize;

/// Island placement parameters (the `[islands]` table of the config file).
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct IslandParams {
    /// Placement attempts; some are skipped to keep the spawn corner open.
    pub count:    u32,
    pub min_size: u32,
    pub max_size: u32,
}

impl Default for IslandParams {
    fn default() -> Self {
        Self { count: 7, min_size: 5, max_size: 12 }
    }
}

/// Corner region (in cells) left free so the agent always has room to start.
const SPAWN_CLEARANCE: i32 = 10;

/// Border walls plus up to `params.count` solid rectangles.
///
/// An island whose top-left corner falls inside the spawn corner is skipped
/// rather than moved, so the actual island count varies with the seed.
pub fn generate_islands(
    cols: u32,
    rows: u32,
    params: &IslandParams,
    rng: &mut SimRng,
) -> GridResult<TruthGrid> {
    let mut builder = TruthGridBuilder::new(cols, rows)?.border();

    let lo = params.min_size.max(1);
    let hi = params.max_size.max(lo);
    let x_max = (cols as i32 - 15).max(3);
    let y_max = (rows as i32 - 15).max(3);

    for _ in 0..params.count {
        let w = rng.gen_range(lo..=hi);
        let h = rng.gen_range(lo..=hi);
        let x = rng.gen_range(3..=x_max);
        let y = rng.gen_range(3..=y_max);
        if x < SPAWN_CLEARANCE && y < SPAWN_CLEARANCE {
            continue;
        }
        builder = builder.wall_rect(x, y, w, h);
    }
    Ok(builder.build())
}
