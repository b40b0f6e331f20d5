//! Exact cellular decomposition of the free space.
//!
//! The decomposition follows the Morse sweep-line construction: a horizontal
//! slice swept top-to-bottom marks cell boundaries wherever its connectivity
//! changes, and the resulting regions are extracted as boundary polygons.
//!
//! - [`sweep::decompose`]: paint cell separators into a map copy
//! - [`extract_cells`]: trace one polygon per separated region
//! - [`CellPolygon`]: per-cell geometry (centroid, bounds, containment)

mod contour;
mod polygon;
pub mod sweep;

pub use contour::extract_cells;
pub use polygon::CellPolygon;
pub use sweep::decompose;
