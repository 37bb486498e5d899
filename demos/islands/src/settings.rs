//! Run settings: TOML file, then command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use ex_core::{Completion, ExploreConfig, MovementPolicy, SimConfig, TerminationPolicy};
use serde::Deserialize;

use crate::cli::{Args, Movement, Termination};
use crate::world::IslandParams;

/// Everything the demo can read from a config file.  Every table is
/// optional.
///
/// ```toml
/// [sim]
/// seed = 7
/// max_ticks = 20000
///
/// [explore]
/// sensor_radius = 3
/// movement = "frontier"
/// termination = { kind = "frontier_exhaustion" }
///
/// [explore.geometry]
/// cols = 40
/// rows = 30
///
/// [islands]
/// count = 9
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sim:     SimConfig,
    pub explore: ExploreConfig,
    pub islands: IslandParams,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Start from the file named by `--config` (or defaults) and apply the
    /// remaining flags on top.
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut s = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(seed) = args.seed {
            s.sim.seed = seed;
        }
        if let Some(max_ticks) = args.max_ticks {
            s.sim.max_ticks = max_ticks;
        }
        if let Some(radius) = args.radius {
            s.explore.sensor_radius = radius;
        }
        if let Some(noise) = args.noise {
            s.explore.wander_noise_bound = noise;
        }
        if let Some(movement) = args.movement {
            s.explore.movement = match movement {
                Movement::Wander   => MovementPolicy::Wander,
                Movement::Manual   => MovementPolicy::Manual,
                Movement::Frontier => MovementPolicy::Frontier,
            };
        }
        if let Some(termination) = args.termination {
            s.explore.termination = match termination {
                Termination::Frontier => TerminationPolicy::FrontierExhaustion,
                Termination::Coverage => TerminationPolicy::Coverage {
                    goal: args.goal.unwrap_or(1.0),
                    then: if args.finish { Completion::Finished } else { Completion::Idle },
                },
            };
        } else if let (Some(goal), TerminationPolicy::Coverage { goal: g, .. }) =
            (args.goal, &mut s.explore.termination)
        {
            *g = goal;
        }
        Ok(s)
    }
}
