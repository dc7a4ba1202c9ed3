use serde::{Deserialize, Serialize};

use crate::{
    cli::Cli,
    domain::terrain::{TerrainType, TileStyle},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainSettings {
    pub length: usize,
    pub ceiling: Option<i32>,
    pub terrain_type: TerrainType,
    pub tile_style: TileStyle,
    pub seed: Option<u64>,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            length: 40,
            ceiling: None,
            terrain_type: TerrainType::GentleHills,
            tile_style: TileStyle::default(),
            seed: None,
        }
    }
}

impl TerrainSettings {
    pub fn from_cli(cli: &Cli) -> Self {
        let terrain_type = TerrainType::from_name(&cli.terrain);
        if terrain_type == TerrainType::Other {
            log::warn!(
                "unknown terrain type {:?}, falling back to gentle slopes",
                cli.terrain
            );
        }

        Self {
            length: cli.length,
            ceiling: cli.ceiling,
            terrain_type,
            tile_style: TileStyle {
                ground: cli.ground,
                sky: cli.sky,
            },
            seed: cli.seed,
        }
    }
}
