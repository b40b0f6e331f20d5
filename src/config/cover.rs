//! Main CoverConfig and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::coverage::CoverageSection;
use super::error::ConfigLoadError;
use super::map::MapSection;
use super::pathfinding::AStarSettings;

/// Full planner configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CoverConfig {
    /// Map geometry settings
    #[serde(default)]
    pub map: MapSection,

    /// Coverage pattern settings
    #[serde(default)]
    pub coverage: CoverageSection,

    /// A* oracle settings
    #[serde(default)]
    pub pathfinding: AStarSettings,
}

impl CoverConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Builder-style setter for the map resolution
    pub fn with_resolution(mut self, resolution: f32) -> Self {
        self.map.resolution = resolution;
        self
    }

    /// Builder-style setter for the map origin
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.map.origin_x = x;
        self.map.origin_y = y;
        self
    }

    /// Builder-style setter for the fitting radius (cells)
    pub fn with_fitting_radius(mut self, radius: f32) -> Self {
        self.coverage.fitting_radius = radius;
        self
    }

    /// Builder-style setter for the waypoint spacing (cells)
    pub fn with_path_eps(mut self, eps: i32) -> Self {
        self.coverage.path_eps = eps;
        self
    }

    /// Builder-style setter for footprint planning mode
    pub fn with_plan_for_footprint(mut self, footprint: bool) -> Self {
        self.coverage.plan_for_footprint = footprint;
        self
    }

    /// Builder-style setter for the robot-to-FOV offset (meters)
    pub fn with_fov_offset(mut self, x: f32, y: f32) -> Self {
        self.coverage.robot_to_fov = [x, y];
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoverConfig::default();
        assert_eq!(config.map.resolution, 0.05);
        assert_eq!(config.coverage.path_eps, 2);
        assert!(config.coverage.plan_for_footprint);
        assert!(config.pathfinding.allow_diagonal);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = CoverConfig::default()
            .with_resolution(0.1)
            .with_fitting_radius(4.0)
            .with_fov_offset(0.5, 0.0);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = CoverConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.map.resolution, 0.1);
        assert_eq!(parsed.coverage.fitting_radius, 4.0);
        assert_eq!(parsed.coverage.robot_to_fov, [0.5, 0.0]);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "coverage:\n  path_eps: 5\n";
        let config = CoverConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.coverage.path_eps, 5);
        assert_eq!(config.map.resolution, 0.05);
        assert_eq!(config.coverage.fitting_radius, 3.0);
    }

    #[test]
    fn test_bad_yaml_fails() {
        assert!(CoverConfig::from_yaml("map: [not a map]").is_err());
    }
}
