//! Binary occupancy raster for one room.

use crate::core::{CellState, GridCoord};
use std::fmt::Write;

/// Row-major binary occupancy map.
///
/// Cell (0, 0) is the top-left corner; x indexes columns, y indexes rows
/// downward. Raw bytes follow the image convention: 0 obstacle, 255 free.
///
/// The input map is read-only during planning; the sweep decomposer works on
/// a clone into which it paints cell-separating walls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomGrid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl RoomGrid {
    /// Create a grid filled with a single state
    pub fn filled(width: usize, height: usize, state: CellState) -> Self {
        Self {
            cells: vec![state as u8; width * height],
            width,
            height,
        }
    }

    /// Create an all-free grid
    pub fn open(width: usize, height: usize) -> Self {
        Self::filled(width, height, CellState::Free)
    }

    /// Build a grid from raw raster rows (0 obstacle, non-zero free).
    ///
    /// All rows must share one length; intended for tests and fixtures.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        debug_assert!(rows.iter().all(|r| r.len() == width));

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            for &value in row {
                cells.push(CellState::from_u8(value) as u8);
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Get the cell state (out-of-bounds reads as Obstacle)
    #[inline]
    pub fn get(&self, coord: GridCoord) -> CellState {
        self.index(coord)
            .map(|i| CellState::from_u8(self.cells[i]))
            .unwrap_or(CellState::Obstacle)
    }

    /// Is the cell free space? (out-of-bounds reads as blocked)
    #[inline]
    pub fn is_free(&self, coord: GridCoord) -> bool {
        self.get(coord).is_free()
    }

    /// Set the cell state; out-of-bounds writes are ignored
    #[inline]
    pub fn set(&mut self, coord: GridCoord, state: CellState) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state as u8;
        }
    }

    /// Number of free cells in the grid
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// ASCII rendering for debugging ('#' obstacle, '.' free)
    pub fn ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let state = CellState::from_u8(self.cells[y * self.width + x]);
                let _ = write!(out, "{}", state.as_char());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid() {
        let grid = RoomGrid::open(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.free_count(), 12);
        assert!(grid.is_free(GridCoord::new(3, 2)));
    }

    #[test]
    fn test_out_of_bounds_reads_obstacle() {
        let grid = RoomGrid::open(4, 3);
        assert!(!grid.is_free(GridCoord::new(-1, 0)));
        assert!(!grid.is_free(GridCoord::new(4, 0)));
        assert!(!grid.is_free(GridCoord::new(0, 3)));
    }

    #[test]
    fn test_set_get() {
        let mut grid = RoomGrid::open(4, 3);
        grid.set(GridCoord::new(1, 1), CellState::Obstacle);
        assert_eq!(grid.get(GridCoord::new(1, 1)), CellState::Obstacle);
        assert_eq!(grid.get(GridCoord::new(2, 1)), CellState::Free);
        // Out-of-bounds write is a no-op
        grid.set(GridCoord::new(9, 9), CellState::Free);
        assert_eq!(grid.free_count(), 11);
    }

    #[test]
    fn test_from_rows() {
        let grid = RoomGrid::from_rows(&[vec![255, 0, 255], vec![0, 255, 0]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_free(GridCoord::new(0, 0)));
        assert!(!grid.is_free(GridCoord::new(1, 0)));
        assert!(grid.is_free(GridCoord::new(1, 1)));
    }

    #[test]
    fn test_ascii_dump() {
        let grid = RoomGrid::from_rows(&[vec![255, 0], vec![0, 255]]);
        assert_eq!(grid.ascii(), ".#\n#.\n");
    }
}
