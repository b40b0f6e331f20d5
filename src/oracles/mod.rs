//! Oracle capabilities consumed by the planner.
//!
//! The planner needs exactly two external algorithms: a shortest-path query
//! over the free grid and a tour solver for the cell visiting order. Both
//! are modeled as small traits so callers can inject their own solvers;
//! [`GridAStar`] and [`GreedyTour`] are the bundled defaults.

mod astar;
mod tour;

pub use astar::GridAStar;
pub use tour::GreedyTour;

use crate::core::GridCoord;
use crate::grid::RoomGrid;

/// Shortest-path oracle over the free cells of a grid.
///
/// Both queries return `None` when no path exists; the planner treats that
/// as a soft failure and continues without the connecting waypoints.
pub trait ShortestPath: Send + Sync {
    /// Length of the shortest path in cell units
    fn distance(&self, grid: &RoomGrid, from: GridCoord, to: GridCoord) -> Option<f32>;

    /// Full waypoint trace of the shortest path, start and goal included
    fn trace(&self, grid: &RoomGrid, from: GridCoord, to: GridCoord) -> Option<Vec<GridCoord>>;
}

/// Tour oracle choosing a visiting order over a node set.
pub trait TourSolver: Send + Sync {
    /// Return a permutation of `0..nodes.len()` beginning at `start_index`.
    ///
    /// Distances are Euclidean over the nodes scaled by `resolution`; the
    /// grid is available for solvers that route between nodes.
    fn solve(
        &self,
        grid: &RoomGrid,
        nodes: &[GridCoord],
        resolution: f32,
        start_index: usize,
    ) -> Vec<usize>;
}
