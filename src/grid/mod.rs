//! Occupancy grid storage.

mod storage;

pub use storage::RoomGrid;
