//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ex_core::Cell;

/// Headless grid-exploration run over a generated island map or a matrix
/// file.
#[derive(Parser, Debug)]
#[command(name = "islands", version, about)]
pub struct Args {
    /// TOML config file (`[sim]`, `[explore]`, `[islands]` tables).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ground-truth matrix (0 = wall, 1 = free) instead of a generated map.
    #[arg(short, long)]
    pub map: Option<PathBuf>,

    /// Output directory for CSV telemetry and saved maps.
    #[arg(short, long, default_value = "output/islands")]
    pub out: PathBuf,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Sensor half-width in cells.
    #[arg(long)]
    pub radius: Option<u32>,

    /// Bounce perturbation bound in radians.
    #[arg(long)]
    pub noise: Option<f32>,

    #[arg(long, value_enum)]
    pub movement: Option<Movement>,

    #[arg(long, value_enum)]
    pub termination: Option<Termination>,

    /// Coverage goal in (0, 1] for the coverage policy.
    #[arg(long)]
    pub goal: Option<f64>,

    /// With the coverage policy, go straight to Finished instead of Idle.
    #[arg(long)]
    pub finish: bool,

    /// Save maps without the `# size` / legend comment lines.
    #[arg(long)]
    pub no_header: bool,

    /// After exploring, navigate to this cell (`X,Y`).
    #[arg(long, value_parser = parse_cell)]
    pub goto: Option<Cell>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Movement {
    Wander,
    Manual,
    Frontier,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Termination {
    Coverage,
    Frontier,
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y {y:?}: {e}"))?;
    Ok(Cell::new(x, y))
}
