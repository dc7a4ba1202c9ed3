#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum, builder::RangedU64ValueParser};

use crate::domain::terrain::{MAX_CEILING, MAX_LENGTH};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "terrain-ascii",
    version,
    about = "Random-walk terrain heightmaps rendered as ASCII art"
)]
pub struct Cli {
    /// Number of columns, including the boundary wall
    #[arg(
        long,
        default_value_t = 40,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_LENGTH as u64)
    )]
    pub length: usize,

    /// Grid height; the walk is clamped below it (default: apex + 1)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_CEILING)))]
    pub ceiling: Option<i32>,

    /// Terrain type: gentle_hills, mountains (unknown names use gentle slopes)
    #[arg(long, default_value = "gentle_hills")]
    pub terrain: String,

    /// Ground tile symbol
    #[arg(long, default_value_t = '*')]
    pub ground: char,

    /// Sky tile symbol
    #[arg(long, default_value_t = ' ')]
    pub sky: char,

    /// Seed for reproducible terrain
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Print a JSON report instead of the picture
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_LENGTH).contains(&self.length) {
            anyhow::bail!("--length must be between 1 and {MAX_LENGTH}");
        }
        if let Some(ceiling) = self.ceiling
            && !(1..=MAX_CEILING).contains(&ceiling)
        {
            anyhow::bail!("--ceiling must be between 1 and {MAX_CEILING}");
        }
        Ok(())
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }
}
