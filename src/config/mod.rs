//! Unified configuration loading.
//!
//! All settings live in a single YAML file split into sections; every field
//! has a serde default so partial files work.

mod cover;
mod coverage;
mod defaults;
mod error;
mod map;
mod pathfinding;

pub use cover::CoverConfig;
pub use coverage::CoverageSection;
pub use error::ConfigLoadError;
pub use map::MapSection;
pub use pathfinding::AStarSettings;
