//! The two-layer fishing grid.
//!
//! The fish-finder layer says where the water is; the overhead layer only
//! ever shows where the last cast landed. They are separate matrices so a
//! cast marker can never leak into the water map or the other way round.

use crate::core::constants::{MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FishfinderCell {
    #[default]
    Water,
    Land,
    /// Water with fish showing on the finder.
    FishPresent,
}

impl FishfinderCell {
    pub fn is_water(&self) -> bool {
        !matches!(self, FishfinderCell::Land)
    }

    pub fn symbol(&self) -> char {
        match self {
            FishfinderCell::Water => '~',
            FishfinderCell::Land => '#',
            FishfinderCell::FishPresent => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverheadCell {
    #[default]
    Empty,
    CastMarker,
}

impl OverheadCell {
    pub fn symbol(&self) -> char {
        match self {
            OverheadCell::Empty => '.',
            OverheadCell::CastMarker => 'X',
        }
    }
}

/// Square fishing grid, indexed as `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    fishfinder: Vec<Vec<FishfinderCell>>,
    overhead: Vec<Vec<OverheadCell>>,
}

impl Grid {
    /// All-water grid with an empty overhead layer. `size` is clamped to the
    /// supported range.
    pub fn open_water(size: usize) -> Self {
        let size = clamp_size(size);
        Self {
            size,
            fishfinder: vec![vec![FishfinderCell::Water; size]; size],
            overhead: vec![vec![OverheadCell::Empty; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn fishfinder(&self) -> &[Vec<FishfinderCell>] {
        &self.fishfinder
    }

    pub fn overhead(&self) -> &[Vec<OverheadCell>] {
        &self.overhead
    }

    pub fn fishfinder_at(&self, row: usize, col: usize) -> Option<FishfinderCell> {
        self.fishfinder.get(row)?.get(col).copied()
    }

    pub fn overhead_at(&self, row: usize, col: usize) -> Option<OverheadCell> {
        self.overhead.get(row)?.get(col).copied()
    }

    /// Writes a fish-finder cell; out-of-range coordinates are clamped onto the edge.
    pub fn set_fishfinder(&mut self, row: usize, col: usize, cell: FishfinderCell) {
        let (row, col) = self.clamp(row, col);
        self.fishfinder[row][col] = cell;
    }

    pub fn water_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in self.fishfinder.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_water() {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// Most recent cast position, if any.
    pub fn cast_marker(&self) -> Option<(usize, usize)> {
        self.overhead.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|c| *c == OverheadCell::CastMarker)
                .map(|c| (r, c))
        })
    }

    /// Moves the cast marker to `(row, col)`, clearing any previous one.
    pub fn mark_cast(&mut self, row: usize, col: usize) {
        self.clear_overhead();
        let (row, col) = self.clamp(row, col);
        self.overhead[row][col] = OverheadCell::CastMarker;
    }

    pub fn clear_overhead(&mut self) {
        for row in &mut self.overhead {
            row.fill(OverheadCell::Empty);
        }
    }

    /// Drops every fish marker back to plain water.
    pub fn clear_fish(&mut self) {
        for cell in self.fishfinder.iter_mut().flatten() {
            if *cell == FishfinderCell::FishPresent {
                *cell = FishfinderCell::Water;
            }
        }
    }

    /// Column letter for display: 0 → 'a'.
    pub fn column_label(col: usize) -> char {
        (b'a' + (col.min(MAX_GRID_SIZE - 1)) as u8) as char
    }

    /// Caller-facing coordinate, e.g. `(3, 2)` → "c4".
    pub fn coordinate_label(row: usize, col: usize) -> String {
        format!("{}{}", Self::column_label(col), row + 1)
    }

    fn clamp(&self, row: usize, col: usize) -> (usize, usize) {
        (row.min(self.size - 1), col.min(self.size - 1))
    }
}

pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_water_layers_match() {
        let grid = Grid::open_water(10);
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.fishfinder().len(), 10);
        assert_eq!(grid.overhead().len(), 10);
        assert!(grid.fishfinder().iter().all(|r| r.len() == 10));
        assert!(grid.overhead().iter().all(|r| r.len() == 10));
        assert_eq!(grid.water_cells().len(), 100);
    }

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(Grid::open_water(1).size(), MIN_GRID_SIZE);
        assert_eq!(Grid::open_water(100).size(), MAX_GRID_SIZE);
    }

    #[test]
    fn test_mark_cast_keeps_only_latest() {
        let mut grid = Grid::open_water(6);
        grid.mark_cast(1, 1);
        grid.mark_cast(4, 2);
        assert_eq!(grid.cast_marker(), Some((4, 2)));
        let markers = grid
            .overhead()
            .iter()
            .flatten()
            .filter(|c| **c == OverheadCell::CastMarker)
            .count();
        assert_eq!(markers, 1);
    }

    #[test]
    fn test_cast_marker_never_touches_fishfinder() {
        let mut grid = Grid::open_water(5);
        grid.set_fishfinder(2, 2, FishfinderCell::Land);
        grid.mark_cast(2, 3);
        assert_eq!(grid.fishfinder_at(2, 3), Some(FishfinderCell::Water));
        assert_eq!(grid.fishfinder_at(2, 2), Some(FishfinderCell::Land));
    }

    #[test]
    fn test_out_of_range_writes_clamp_to_edge() {
        let mut grid = Grid::open_water(4);
        grid.set_fishfinder(9, 9, FishfinderCell::Land);
        assert_eq!(grid.fishfinder_at(3, 3), Some(FishfinderCell::Land));
        assert_eq!(grid.fishfinder_at(9, 9), None);
    }

    #[test]
    fn test_fish_present_counts_as_water() {
        assert!(FishfinderCell::FishPresent.is_water());
        assert!(FishfinderCell::Water.is_water());
        assert!(!FishfinderCell::Land.is_water());
    }

    #[test]
    fn test_coordinate_labels() {
        assert_eq!(Grid::column_label(0), 'a');
        assert_eq!(Grid::column_label(9), 'j');
        assert_eq!(Grid::coordinate_label(3, 2), "c4");
        assert_eq!(Grid::coordinate_label(9, 9), "j10");
    }
}
