use rand::Rng;

use crate::domain::terrain::{
    MAX_CEILING, MAX_LENGTH, TerrainError, TerrainType, WALL_VARIANCE,
};

/// Builds a height sequence of exactly `length` entries: a random walk from
/// `starting_height` followed by one wall entry.
///
/// With a `ceiling`, every walk value is clamped below it and the wall equals
/// it. Without one, the wall sits [`WALL_VARIANCE`] above the apex of the
/// walk once lifted to non-negative heights.
pub fn generate<R: Rng + ?Sized>(
    length: usize,
    terrain_type: TerrainType,
    starting_height: i32,
    ceiling: Option<i32>,
    rng: &mut R,
) -> Result<Vec<i32>, TerrainError> {
    validate_request(length, ceiling)?;

    let walk_len = length - 1;
    let max_variance = terrain_type.max_variance();
    let mut heights = Vec::with_capacity(length);
    if walk_len > 0 {
        heights.push(starting_height);
    }

    let mut previous = starting_height;
    while heights.len() < walk_len {
        let mut variance = rng.random_range(0..=max_variance);
        if rng.random_bool(0.5) {
            variance = -variance;
        }

        let next = previous.checked_add(variance).ok_or_else(|| {
            TerrainError::InvalidArgument(format!(
                "walk from starting height {starting_height} leaves the i32 range"
            ))
        })?;
        log::trace!("adding height {next}");
        heights.push(next);

        if let Some(ceiling) = ceiling {
            clamp_latest(&mut heights, ceiling);
        }
        previous = heights[heights.len() - 1];
    }

    let wall = match ceiling {
        Some(ceiling) => ceiling,
        None => derived_wall(&heights)?,
    };
    heights.push(wall);
    Ok(heights)
}

pub fn validate_request(length: usize, ceiling: Option<i32>) -> Result<(), TerrainError> {
    if !(1..=MAX_LENGTH).contains(&length) {
        return Err(TerrainError::InvalidArgument(format!(
            "length must be between 1 and {MAX_LENGTH}, got {length}"
        )));
    }
    if let Some(ceiling) = ceiling
        && !(1..=MAX_CEILING).contains(&ceiling)
    {
        return Err(TerrainError::InvalidArgument(format!(
            "ceiling must be between 1 and {MAX_CEILING}, got {ceiling}"
        )));
    }
    Ok(())
}

/// Applies the absolute clamp and then the range clamp to the last entry of
/// `heights`. Earlier entries are left alone.
pub(crate) fn clamp_latest(heights: &mut [i32], ceiling: i32) {
    let Some(latest) = heights.len().checked_sub(1) else {
        return;
    };

    if heights[latest] >= ceiling {
        let excess = heights[latest] - ceiling;
        log::debug!(
            "height {} reaches ceiling {ceiling}, lowering by {}",
            heights[latest],
            excess + 1
        );
        heights[latest] -= excess + 1;
    }

    // span math in i64: `nadir.abs()` alone overflows for i32::MIN
    let apex = i64::from(heights.iter().copied().max().unwrap_or_default());
    let nadir = i64::from(heights.iter().copied().min().unwrap_or_default());
    let range = apex + nadir.abs();
    let ceiling = i64::from(ceiling);
    if range >= ceiling {
        let excess = range - ceiling;
        log::debug!(
            "range {range} reaches ceiling {ceiling}, pulling height {} in by {}",
            heights[latest],
            excess + 1
        );
        let latest_height = i64::from(heights[latest]);
        let pulled = if latest_height >= 0 {
            latest_height - (excess + 1)
        } else {
            latest_height + (excess + 1)
        };
        heights[latest] = pulled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    }
}

pub(crate) fn derived_wall(walk: &[i32]) -> Result<i32, TerrainError> {
    let apex = i64::from(walk.iter().copied().max().unwrap_or_default());
    let nadir = i64::from(walk.iter().copied().min().unwrap_or_default().min(0));
    i32::try_from(apex - nadir + i64::from(WALL_VARIANCE)).map_err(|_| {
        TerrainError::InvalidArgument(format!(
            "walk spans {apex} down to {nadir}, too tall for a wall"
        ))
    })
}
