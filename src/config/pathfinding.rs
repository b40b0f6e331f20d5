//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// A* algorithm settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarSettings {
    /// Enable 8-directional movement
    #[serde(default = "defaults::enabled")]
    pub allow_diagonal: bool,

    /// Cost multiplier for diagonal moves (sqrt(2))
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Maximum nodes to expand
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for AStarSettings {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            diagonal_cost: std::f32::consts::SQRT_2,
            max_iterations: 100_000,
        }
    }
}
