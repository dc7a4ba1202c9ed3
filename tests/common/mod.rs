#![allow(dead_code)]

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use terrain_ascii::{
    app::settings::TerrainSettings,
    cli::Cli,
    domain::terrain::{TerrainType, TileStyle},
    heightmap::HeightMap,
};

pub fn hash_dot() -> TileStyle {
    TileStyle {
        ground: '#',
        sky: '.',
    }
}

/// Parses `args` after the binary name, always with color off.
pub fn quiet_cli(args: &[&str]) -> Cli {
    let argv = ["terrain-ascii", "--no-color"]
        .into_iter()
        .chain(args.iter().copied());
    Cli::parse_from(argv)
}

pub fn seeded_map(
    length: usize,
    ceiling: Option<i32>,
    terrain_type: TerrainType,
    seed: u64,
) -> HeightMap {
    let settings = TerrainSettings {
        length,
        ceiling,
        terrain_type,
        ..TerrainSettings::default()
    };
    HeightMap::generate(&settings, &mut StdRng::seed_from_u64(seed)).expect("valid settings")
}

pub fn run_to_string(cli: &Cli) -> String {
    let mut out = Vec::new();
    terrain_ascii::run_with_output(cli, &mut out).expect("run succeeds");
    String::from_utf8(out).expect("utf-8 output")
}
