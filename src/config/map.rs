//! Map geometry configuration section.

use crate::core::WorldPoint;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Map geometry settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapSection {
    /// Meters per grid cell
    #[serde(default = "defaults::resolution")]
    pub resolution: f32,

    /// World x of grid cell (0, 0), meters
    #[serde(default = "defaults::origin_coord")]
    pub origin_x: f32,

    /// World y of grid cell (0, 0), meters
    #[serde(default = "defaults::origin_coord")]
    pub origin_y: f32,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            origin_x: defaults::origin_coord(),
            origin_y: defaults::origin_coord(),
        }
    }
}

impl MapSection {
    /// Map origin as a point
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        WorldPoint::new(self.origin_x, self.origin_y)
    }
}
