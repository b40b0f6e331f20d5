//! Point and coordinate types for the occupancy grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Grid coordinates (integer cell indices)
///
/// The map origin is the top-left cell; x grows to the right (column index)
/// and y grows downward (row index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index, increasing downward)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance(&self, other: &GridCoord) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Get the 4 cardinal neighbors (N, E, S, W in map orientation, y-down)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y - 1), // North (up the map)
            GridCoord::new(self.x + 1, self.y), // East
            GridCoord::new(self.x, self.y + 1), // South
            GridCoord::new(self.x - 1, self.y), // West
        ]
    }

    /// Get the 8 neighbors, cardinals first then diagonals.
    ///
    /// The split matters for movement costs: indices 0-3 are unit moves,
    /// indices 4-7 are diagonal moves.
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.x, self.y - 1),     // N
            GridCoord::new(self.x + 1, self.y),     // E
            GridCoord::new(self.x, self.y + 1),     // S
            GridCoord::new(self.x - 1, self.y),     // W
            GridCoord::new(self.x + 1, self.y - 1), // NE
            GridCoord::new(self.x + 1, self.y + 1), // SE
            GridCoord::new(self.x - 1, self.y + 1), // SW
            GridCoord::new(self.x - 1, self.y - 1), // NW
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// World coordinates (meters, f32)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length (magnitude) of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotate this point around the origin by angle (radians)
    #[inline]
    pub fn rotate(&self, angle: f32) -> WorldPoint {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        WorldPoint::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        WorldPoint::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_coord_neighbors() {
        let c = GridCoord::new(5, 5);
        let n4 = c.neighbors_4();
        assert_eq!(n4[0], GridCoord::new(5, 4)); // N (up = smaller y)
        assert_eq!(n4[1], GridCoord::new(6, 5)); // E
        assert_eq!(n4[2], GridCoord::new(5, 6)); // S
        assert_eq!(n4[3], GridCoord::new(4, 5)); // W
    }

    #[test]
    fn test_grid_coord_neighbors_8_split() {
        let c = GridCoord::new(0, 0);
        let n8 = c.neighbors_8();
        // First four are unit moves, last four are diagonal moves
        for n in &n8[..4] {
            assert_eq!(c.manhattan_distance(n), 1);
        }
        for n in &n8[4..] {
            assert_eq!(c.manhattan_distance(n), 2);
        }
    }

    #[test]
    fn test_grid_coord_distance() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, 4);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_world_point_rotate() {
        let p = WorldPoint::new(1.0, 0.0);
        let rotated = p.rotate(std::f32::consts::FRAC_PI_2); // 90 degrees
        assert!((rotated.x - 0.0).abs() < 1e-6);
        assert!((rotated.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_world_point_length() {
        let v = WorldPoint::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }
}
