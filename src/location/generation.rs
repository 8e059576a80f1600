//! Procedural water layouts.
//!
//! Each archetype starts from open water and carves land in with its own
//! rule: river banks, lake shorelines, or a meandering stream channel.

use super::grid::{FishfinderCell, Grid};
use super::types::Archetype;
use crate::core::constants::{
    FISH_MARKERS_MAX, FISH_MARKERS_MIN, LAKE_SHORE_LAND_CHANCE, LAKE_SHORE_ROWS, RIVER_BANK_MAX,
    RIVER_BANK_MIN, STREAM_CHANNEL_MAX, STREAM_CHANNEL_MIN,
};
use crate::core::rng::RandomSource;

/// Builds a fresh grid for `archetype`. Both layers start clean, so calling
/// this again is how a location is regenerated.
pub fn generate_grid(archetype: Archetype, size: usize, rng: &mut impl RandomSource) -> Grid {
    let mut grid = Grid::open_water(size);

    match archetype {
        Archetype::River => carve_river(&mut grid, rng),
        Archetype::Lake => carve_lake(&mut grid, rng),
        Archetype::Stream => carve_stream(&mut grid, rng),
    }

    log::debug!(
        "generated {} grid {}x{} with {} water cells",
        archetype.name(),
        grid.size(),
        grid.size(),
        grid.water_cells().len()
    );
    grid
}

/// Land strips of 1-3 cells on each bank, rolled per row and per side.
fn carve_river(grid: &mut Grid, rng: &mut impl RandomSource) {
    let size = grid.size();
    for row in 0..size {
        let left = rng.range_inclusive(RIVER_BANK_MIN as u32, RIVER_BANK_MAX as u32) as usize;
        let right = rng.range_inclusive(RIVER_BANK_MIN as u32, RIVER_BANK_MAX as u32) as usize;

        for col in 0..left.min(size) {
            grid.set_fishfinder(row, col, FishfinderCell::Land);
        }
        for col in size.saturating_sub(right)..size {
            grid.set_fishfinder(row, col, FishfinderCell::Land);
        }
    }
}

/// Shoreline: the outer two rows top and bottom are patchy land.
fn carve_lake(grid: &mut Grid, rng: &mut impl RandomSource) {
    let size = grid.size();
    let shore_rows = (0..LAKE_SHORE_ROWS).chain(size.saturating_sub(LAKE_SHORE_ROWS)..size);
    for row in shore_rows {
        for col in 0..size {
            if rng.chance(LAKE_SHORE_LAND_CHANCE) {
                grid.set_fishfinder(row, col, FishfinderCell::Land);
            }
        }
    }
}

/// A channel of 3-5 water cells whose center drifts by at most one column
/// per row and never leaves the grid.
fn carve_stream(grid: &mut Grid, rng: &mut impl RandomSource) {
    let size = grid.size();
    let widest = STREAM_CHANNEL_MAX.min(size);
    let mut center = size / 2;

    for row in 0..size {
        let step = rng.index(3) as isize - 1;
        let width =
            rng.range_inclusive(STREAM_CHANNEL_MIN as u32, widest as u32) as usize;

        let (lo, hi) = channel_center_bounds(size, width);
        center = (center as isize + step).clamp(lo as isize, hi as isize) as usize;

        let (start, end) = channel_span(center, width);
        for col in 0..size {
            if col < start || col >= end {
                grid.set_fishfinder(row, col, FishfinderCell::Land);
            }
        }
    }
}

/// Range the channel center may take so `width` cells fit inside `size`.
fn channel_center_bounds(size: usize, width: usize) -> (usize, usize) {
    let half = width / 2;
    (half, size - (width - half))
}

/// Half-open column span of a channel around `center`.
fn channel_span(center: usize, width: usize) -> (usize, usize) {
    let start = center - width / 2;
    (start, start + width)
}

/// Lights up 5-10 distinct water cells as fish on the finder. Purely
/// informational; casts elsewhere can still hook fish. Returns how many
/// markers were placed.
pub fn scatter_fish(grid: &mut Grid, rng: &mut impl RandomSource) -> usize {
    grid.clear_fish();

    let mut candidates = grid.water_cells();
    if candidates.is_empty() {
        return 0;
    }
    let wanted = rng.range_inclusive(FISH_MARKERS_MIN as u32, FISH_MARKERS_MAX as u32) as usize;
    let count = wanted.min(candidates.len());

    for _ in 0..count {
        let idx = rng.index(candidates.len());
        let (row, col) = candidates.swap_remove(idx);
        grid.set_fishfinder(row, col, FishfinderCell::FishPresent);
    }
    count
}
