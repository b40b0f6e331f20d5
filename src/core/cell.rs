//! Cell states for the binary occupancy map.

use serde::{Deserialize, Serialize};

/// Binary occupancy value of one map cell.
///
/// The raster uses the common image convention: 0 is an obstacle (black),
/// 255 is free space (white). Any non-zero raw value decodes as free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Obstacle or wall, not traversable
    #[default]
    Obstacle = 0,

    /// Traversable free space
    Free = 255,
}

impl CellState {
    /// Is this cell free space?
    #[inline]
    pub fn is_free(self) -> bool {
        self == CellState::Free
    }

    /// Decode from a raw raster byte
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        if value == 0 {
            CellState::Obstacle
        } else {
            CellState::Free
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Obstacle => '#',
            CellState::Free => '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8() {
        assert_eq!(CellState::from_u8(0), CellState::Obstacle);
        assert_eq!(CellState::from_u8(255), CellState::Free);
        assert_eq!(CellState::from_u8(127), CellState::Free);
    }

    #[test]
    fn test_is_free() {
        assert!(CellState::Free.is_free());
        assert!(!CellState::Obstacle.is_free());
    }

    #[test]
    fn test_as_char() {
        assert_eq!(CellState::Obstacle.as_char(), '#');
        assert_eq!(CellState::Free.as_char(), '.');
    }
}
