//! Robot pose representation.

use super::point::WorldPoint;
use serde::{Deserialize, Serialize};

/// Planar pose (x, y, theta)
///
/// Positions are in grid cells while a plan is being assembled and in meters
/// after world scaling; theta is the heading in radians, measured CCW from
/// the +X axis.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position
    pub x: f32,
    /// Y position
    pub y: f32,
    /// Orientation in radians (CCW positive from +X)
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Get the position as a WorldPoint
    #[inline]
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Distance to another pose (position only)
    #[inline]
    pub fn distance(&self, other: &Pose2D) -> f32 {
        self.position().distance(&other.position())
    }
}
