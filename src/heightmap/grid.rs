use crate::domain::terrain::{TerrainError, TileStyle};

/// Column-major tile grid. Each column is stored ground-first, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Vec<char>>,
    ceiling: usize,
}

impl Grid {
    #[must_use]
    pub fn columns(&self) -> &[Vec<char>] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&[char]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Display rows, sky first. Row `ceiling - 1` of storage comes out on top.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.ceiling)
            .rev()
            .map(|row| self.columns.iter().map(|column| column[row]).collect())
            .collect()
    }
}

/// Expands already non-negative `heights` into columns of `ceiling` tiles.
pub fn render(heights: &[i32], ceiling: i32, style: TileStyle) -> Result<Grid, TerrainError> {
    let rows = usize::try_from(ceiling).map_err(|_| {
        TerrainError::InvalidArgument(format!("ceiling must not be negative, got {ceiling}"))
    })?;

    let columns = heights
        .iter()
        .enumerate()
        .map(|(column, &height)| -> Result<Vec<char>, TerrainError> {
            let ground = usize::try_from(height)
                .ok()
                .filter(|ground| *ground <= rows)
                .ok_or(TerrainError::InvariantViolation {
                    column,
                    height,
                    ceiling,
                })?;
            let mut tiles = vec![style.sky; rows];
            tiles[..ground].fill(style.ground);
            Ok(tiles)
        })
        .collect::<Result<Vec<_>, TerrainError>>()?;

    Ok(Grid {
        columns,
        ceiling: rows,
    })
}
