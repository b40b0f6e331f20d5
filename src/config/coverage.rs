//! Coverage pattern configuration section.

use crate::core::WorldPoint;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Coverage pattern settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoverageSection {
    /// Fitting circle radius in cells. Used as the wall inset and as the
    /// spacing between sweep lines; fractional values are floored.
    #[serde(default = "defaults::fitting_radius")]
    pub fitting_radius: f32,

    /// Target spacing between waypoints on straight segments, cells
    #[serde(default = "defaults::path_eps")]
    pub path_eps: i32,

    /// Plan for the robot footprint directly (true) or map the field-of-view
    /// path back to body poses (false)
    #[serde(default = "defaults::plan_for_footprint")]
    pub plan_for_footprint: bool,

    /// Vector from robot center to the field-of-view midpoint, meters
    #[serde(default = "defaults::fov_offset")]
    pub robot_to_fov: [f32; 2],
}

impl Default for CoverageSection {
    fn default() -> Self {
        Self {
            fitting_radius: defaults::fitting_radius(),
            path_eps: defaults::path_eps(),
            plan_for_footprint: defaults::plan_for_footprint(),
            robot_to_fov: defaults::fov_offset(),
        }
    }
}

impl CoverageSection {
    /// FOV offset as a vector
    #[inline]
    pub fn fov_offset(&self) -> WorldPoint {
        WorldPoint::new(self.robot_to_fov[0], self.robot_to_fov[1])
    }
}
