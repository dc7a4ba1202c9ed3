pub mod palette;
pub mod report;

use std::io::{self, Write};

use crate::heightmap::HeightMap;

use self::palette::Palette;

/// Prints the heightmap one display row per line, sky first. A tile counts as
/// ground when its row lies below the column's lifted height.
pub fn print_heightmap<W: Write>(
    out: &mut W,
    map: &HeightMap,
    palette: Palette,
) -> io::Result<()> {
    let grid = map.grid();
    let wall_column = grid.width().saturating_sub(1);
    let heights = map.non_negative_heights();

    for row in (0..grid.ceiling()).rev() {
        let line = grid
            .columns()
            .iter()
            .zip(heights)
            .enumerate()
            .map(|(index, (column, &height))| {
                let is_ground = usize::try_from(height).is_ok_and(|height| row < height);
                palette.paint(column[row], is_ground, index == wall_column)
            })
            .collect::<String>();
        writeln!(out, "{line}")?;
    }
    out.flush()
}
