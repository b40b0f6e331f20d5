//! # Hala-Cover: Boustrophedon Coverage Planning
//!
//! A coverage path planner for mobile robots working over binary occupancy
//! grids of indoor rooms. Given a map, the planner decomposes the free space
//! into obstacle-free cells using a Morse sweep-line construction, orders
//! the cells from the robot's start position, and fills each cell with a
//! back-and-forth ("ox-plowing") pattern of parallel horizontal passes.
//!
//! ## Quick Start
//!
//! ```rust
//! use hala_cover::{CoverConfig, CoveragePlanner, RoomGrid};
//! use hala_cover::core::GridCoord;
//!
//! let config = CoverConfig::default()
//!     .with_resolution(0.05)
//!     .with_fitting_radius(3.0);
//! let planner = CoveragePlanner::new(config);
//!
//! let room = RoomGrid::open(100, 80);
//! let path = planner.plan(&room, GridCoord::new(5, 5));
//! println!("{} poses over {} cells", path.poses.len(), path.cells_found);
//! ```
//!
//! ## Coordinate Frame
//!
//! Maps follow the image convention: cell (0, 0) is the top-left corner,
//! x grows right, y grows down. Raster bytes are 0 for obstacle and 255 for
//! free space. Output poses are in world meters, scaled by the map
//! resolution and offset by the map origin; headings are radians CCW from
//! the +X axis.
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (GridCoord, WorldPoint, Pose2D, ...)
//! - [`grid`]: the binary occupancy raster
//! - [`config`]: YAML-backed configuration sections
//! - [`decompose`]: sweep-line cell decomposition and contour extraction
//! - [`oracles`]: shortest-path and tour capabilities with bundled defaults
//! - [`planner`]: line generation, stitching, and the planner entry point
//! - [`io`]: SVG audit rendering
//!
//! ## Data Flow
//!
//! ```text
//! RoomGrid ──► decompose ──► extract_cells ──► TourSolver (visit order)
//!                                                    │
//!                                                    ▼
//!            poses ◄── footprint ◄── annotate ◄── stitch per cell
//!                                                 (ShortestPath links)
//! ```
//!
//! One plan call is a single synchronous computation with no shared state;
//! planners over distinct maps can run on parallel threads freely.

pub mod config;
pub mod core;
pub mod decompose;
pub mod grid;
pub mod io;
pub mod oracles;
pub mod planner;

// Re-export main types at crate root
pub use config::{ConfigLoadError, CoverConfig};
pub use grid::RoomGrid;
pub use planner::{CoveragePath, CoveragePlanner};

// Re-export extensibility traits and their bundled implementations
pub use oracles::{GreedyTour, GridAStar, ShortestPath, TourSolver};
