pub mod generator;
pub mod grid;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    app::settings::TerrainSettings,
    domain::terrain::{
        TerrainError, TerrainType, TileStyle, WALL_VARIANCE, highest_point, lowest_point,
        normalize,
    },
};

use self::grid::Grid;

const STARTING_HEIGHT: i32 = 0;

/// A generated terrain profile together with everything derived from it.
///
/// All fields are computed in [`HeightMap::generate`] or
/// [`HeightMap::from_heights`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    heights: Vec<i32>,
    ceiling: i32,
    non_negative_heights: Vec<i32>,
    grid: Grid,
    terrain_type: TerrainType,
    tile_style: TileStyle,
}

impl HeightMap {
    /// Generates with a seeded RNG when `settings.seed` is set, otherwise
    /// with the thread RNG.
    pub fn new(settings: &TerrainSettings) -> Result<Self, TerrainError> {
        match settings.seed {
            Some(seed) => Self::generate(settings, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate(settings, &mut rand::rng()),
        }
    }

    pub fn generate<R: Rng + ?Sized>(
        settings: &TerrainSettings,
        rng: &mut R,
    ) -> Result<Self, TerrainError> {
        let heights = generator::generate(
            settings.length,
            settings.terrain_type,
            STARTING_HEIGHT,
            settings.ceiling,
            rng,
        )?;
        Self::assemble(heights, settings.terrain_type, settings.tile_style)
    }

    /// Builds a heightmap from a known walk. The wall is appended the same
    /// way generation does it.
    pub fn from_heights(
        walk: Vec<i32>,
        ceiling: Option<i32>,
        tile_style: TileStyle,
    ) -> Result<Self, TerrainError> {
        generator::validate_request(walk.len() + 1, ceiling)?;
        let wall = match ceiling {
            Some(ceiling) => ceiling,
            None => generator::derived_wall(&walk)?,
        };
        let mut heights = walk;
        heights.push(wall);
        Self::assemble(heights, TerrainType::Other, tile_style)
    }

    fn assemble(
        heights: Vec<i32>,
        terrain_type: TerrainType,
        tile_style: TileStyle,
    ) -> Result<Self, TerrainError> {
        let Some(&ceiling) = heights.last() else {
            return Err(TerrainError::InvalidArgument(
                "height sequence is empty".to_string(),
            ));
        };
        let non_negative_heights = normalize(&heights);
        let grid = grid::render(&non_negative_heights, ceiling, tile_style)?;
        log::debug!(
            "built {} columns of {terrain_type:?} terrain under ceiling {ceiling}",
            heights.len()
        );

        Ok(Self {
            heights,
            ceiling,
            non_negative_heights,
            grid,
            terrain_type,
            tile_style,
        })
    }

    #[must_use]
    pub fn height_values(&self) -> &[i32] {
        &self.heights
    }

    #[must_use]
    pub fn non_negative_heights(&self) -> &[i32] {
        &self.non_negative_heights
    }

    #[must_use]
    pub fn highest_point(&self) -> i32 {
        highest_point(&self.heights, false).unwrap_or(self.ceiling)
    }

    #[must_use]
    pub fn lowest_point(&self) -> i32 {
        lowest_point(&self.heights, false).unwrap_or(self.ceiling)
    }

    #[must_use]
    pub fn highest_point_of(heights: &[i32], ignore_wall: bool) -> Option<i32> {
        highest_point(heights, ignore_wall)
    }

    #[must_use]
    pub fn lowest_point_of(heights: &[i32], ignore_wall: bool) -> Option<i32> {
        lowest_point(heights, ignore_wall)
    }

    #[must_use]
    pub fn wall_variance(&self) -> i32 {
        WALL_VARIANCE
    }

    #[must_use]
    pub fn ceiling(&self) -> i32 {
        self.ceiling
    }

    #[must_use]
    pub fn terrain_type(&self) -> TerrainType {
        self.terrain_type
    }

    #[must_use]
    pub fn tile_style(&self) -> TileStyle {
        self.tile_style
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.grid.rows()
    }
}
