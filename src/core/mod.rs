//! Fundamental geometric types.

mod bounds;
mod cell;
mod point;
mod pose;

pub use bounds::GridBounds;
pub use cell::CellState;
pub use point::{GridCoord, WorldPoint};
pub use pose::Pose2D;
