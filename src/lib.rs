pub mod app;
pub mod cli;
pub mod domain;
pub mod heightmap;
pub mod ui;

use std::io::{self, Write};

use anyhow::{Context, Result};
use app::settings::TerrainSettings;
use cli::Cli;
use heightmap::HeightMap;
use ui::{palette::Palette, report::HeightMapReport};

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(&cli, &mut out)
}

/// Builds one heightmap from `cli` and writes it to `out`.
pub fn run_with_output<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    cli.validate()?;
    let settings = TerrainSettings::from_cli(cli);
    let map = HeightMap::new(&settings).context("generating heightmap failed")?;
    log::info!(
        "generated {} columns, ceiling {}, apex {}, nadir {}",
        map.height_values().len(),
        map.ceiling(),
        map.highest_point(),
        map.lowest_point()
    );

    if cli.json {
        let report = HeightMapReport::new(settings, &map);
        serde_json::to_writer_pretty(&mut *out, &report)
            .context("serializing heightmap report failed")?;
        writeln!(out).context("writing heightmap report failed")?;
    } else {
        let palette = Palette::detect(cli.effective_color_mode());
        ui::print_heightmap(out, &map, palette).context("writing heightmap failed")?;
    }
    Ok(())
}
