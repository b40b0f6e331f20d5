//! Axis-aligned bounding box over grid coordinates.

use super::point::GridCoord;
use serde::{Deserialize, Serialize};

/// Inclusive axis-aligned bounding box in grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Smallest contained x
    pub min_x: i32,
    /// Largest contained x
    pub max_x: i32,
    /// Smallest contained y
    pub min_y: i32,
    /// Largest contained y
    pub max_y: i32,
}

impl GridBounds {
    /// Create bounds from explicit extents
    #[inline]
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Compute the bounding box of a point set.
    ///
    /// Returns `None` for an empty set.
    pub fn of_points(points: &[GridCoord]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = GridBounds::new(first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    /// Width in cells (inclusive extent)
    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    /// Height in cells (inclusive extent)
    #[inline]
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    /// Does the box contain the given coordinate?
    #[inline]
    pub fn contains(&self, p: GridCoord) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_points() {
        let points = [
            GridCoord::new(3, 7),
            GridCoord::new(-1, 2),
            GridCoord::new(5, 4),
        ];
        let bounds = GridBounds::of_points(&points).unwrap();
        assert_eq!(bounds, GridBounds::new(-1, 5, 2, 7));
        assert_eq!(bounds.width(), 7);
        assert_eq!(bounds.height(), 6);
    }

    #[test]
    fn test_of_points_empty() {
        assert!(GridBounds::of_points(&[]).is_none());
    }

    #[test]
    fn test_contains() {
        let bounds = GridBounds::new(0, 9, 0, 4);
        assert!(bounds.contains(GridCoord::new(0, 0)));
        assert!(bounds.contains(GridCoord::new(9, 4)));
        assert!(!bounds.contains(GridCoord::new(10, 4)));
        assert!(!bounds.contains(GridCoord::new(3, 5)));
    }
}
