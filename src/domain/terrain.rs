use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Offset added to the apex to derive the wall when no ceiling is supplied.
pub const WALL_VARIANCE: i32 = 1;

/// Longest terrain accepted, wall included. Keeps the walk and the derived
/// wall well inside `i32` and the grid small enough to allocate.
pub const MAX_LENGTH: usize = 10_000;

/// Tallest ceiling accepted.
pub const MAX_CEILING: i32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("column {column} has height {height} outside 0..={ceiling}")]
    InvariantViolation {
        column: usize,
        height: i32,
        ceiling: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TerrainType {
    #[default]
    GentleHills,
    Mountains,
    Other,
}

impl TerrainType {
    /// Unknown names fall back to `Other` instead of failing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "gentle_hills" => Self::GentleHills,
            "mountains" => Self::Mountains,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn max_variance(self) -> i32 {
        match self {
            Self::GentleHills | Self::Other => 1,
            Self::Mountains => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GentleHills => "gentle_hills",
            Self::Mountains => "mountains",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileStyle {
    pub ground: char,
    pub sky: char,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            ground: '*',
            sky: ' ',
        }
    }
}

/// Apex of `heights`. With `ignore_wall`, entries equal to the wall (the
/// last element) are skipped.
#[must_use]
pub fn highest_point(heights: &[i32], ignore_wall: bool) -> Option<i32> {
    considered(heights, ignore_wall).max()
}

/// Nadir of `heights`, with the same wall handling as [`highest_point`].
#[must_use]
pub fn lowest_point(heights: &[i32], ignore_wall: bool) -> Option<i32> {
    considered(heights, ignore_wall).min()
}

fn considered(heights: &[i32], ignore_wall: bool) -> impl Iterator<Item = i32> + '_ {
    let wall = if ignore_wall {
        heights.last().copied()
    } else {
        None
    };
    heights
        .iter()
        .copied()
        .filter(move |height| Some(*height) != wall)
}

/// Lifts the walk so its nadir sits at zero. The trailing wall is carried
/// over unchanged.
#[must_use]
pub fn normalize(heights: &[i32]) -> Vec<i32> {
    let Some((wall, walk)) = heights.split_last() else {
        return Vec::new();
    };

    let shift = match walk.iter().copied().min() {
        Some(nadir) if nadir < 0 => -nadir,
        _ => 0,
    };

    walk.iter()
        .map(|height| height + shift)
        .chain(std::iter::once(*wall))
        .collect()
}
