//! Coverage planner orchestration.
//!
//! Pipeline per plan call: decompose the free space into cells, order the
//! cells from the robot start, generate and stitch the boustrophedon lines
//! of each cell, annotate headings, and adapt the result to the configured
//! footprint mode. Every stage is best-effort; anomalies degrade the path
//! instead of failing the call.

mod footprint;
mod lines;
mod orientation;
mod stitcher;

pub use lines::{sweep_lines, SweepLine};

use crate::config::CoverConfig;
use crate::core::{GridCoord, Pose2D};
use crate::decompose::{decompose, extract_cells};
use crate::grid::RoomGrid;
use crate::oracles::{GreedyTour, GridAStar, ShortestPath, TourSolver};
use log::{debug, info, warn};

/// Result of one coverage plan call.
///
/// `poses` is the world-frame pose sequence; the counters describe how the
/// plan went and surface soft failures that were skipped over.
#[derive(Clone, Debug, Default)]
pub struct CoveragePath {
    /// Ordered poses in world coordinates (meters, radians)
    pub poses: Vec<Pose2D>,
    /// Number of decomposition cells found
    pub cells_found: usize,
    /// Number of sweep lines traced across all cells
    pub lines_traced: usize,
    /// Shortest-path queries that failed and were bridged by a jump
    pub oracle_failures: usize,
    /// FOV waypoints dropped because no body pose was reachable
    pub dropped_poses: usize,
}

impl CoveragePath {
    fn empty() -> Self {
        Self::default()
    }

    /// Does the plan contain any pose?
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

/// Boustrophedon coverage planner.
///
/// Owns its two oracle capabilities; [`GridAStar`] and [`GreedyTour`] are
/// used unless the caller injects replacements.
pub struct CoveragePlanner {
    config: CoverConfig,
    shortest_path: Box<dyn ShortestPath>,
    tour: Box<dyn TourSolver>,
}

impl CoveragePlanner {
    /// Create a planner with the bundled oracles
    pub fn new(config: CoverConfig) -> Self {
        let astar = GridAStar::new(config.pathfinding.clone());
        Self {
            config,
            shortest_path: Box::new(astar),
            tour: Box::new(GreedyTour::new()),
        }
    }

    /// Create a planner with injected oracles
    pub fn with_oracles(
        config: CoverConfig,
        shortest_path: Box<dyn ShortestPath>,
        tour: Box<dyn TourSolver>,
    ) -> Self {
        Self {
            config,
            shortest_path,
            tour,
        }
    }

    /// Planner configuration
    pub fn config(&self) -> &CoverConfig {
        &self.config
    }

    /// Plan a coverage path over the room starting at `start`.
    ///
    /// Returns a possibly-empty pose list; invalid inputs and unreachable
    /// sections are logged and skipped, never raised.
    pub fn plan(&self, room: &RoomGrid, start: GridCoord) -> CoveragePath {
        let coverage = &self.config.coverage;
        if room.cell_count() == 0 || coverage.fitting_radius <= 0.0 || coverage.path_eps < 1 {
            warn!(
                "[Planner] rejected plan request: {}x{} map, radius {}, eps {}",
                room.width(),
                room.height(),
                coverage.fitting_radius,
                coverage.path_eps
            );
            return CoveragePath::empty();
        }

        info!(
            "[Planner] planning coverage of {}x{} map from ({}, {})",
            room.width(),
            room.height(),
            start.x,
            start.y
        );

        // Cellular decomposition of the free space
        let cell_map = decompose(room);
        let cells = extract_cells(&cell_map);
        if cells.is_empty() {
            info!("[Planner] map has no free space, returning empty path");
            return CoveragePath::empty();
        }

        // Visit order anchored at the cell containing the start
        let start_cell = cells
            .iter()
            .position(|c| c.contains(start))
            .unwrap_or_else(|| {
                warn!(
                    "[Planner] start ({}, {}) is in no cell, anchoring at cell 0",
                    start.x, start.y
                );
                0
            });
        let centroids: Vec<GridCoord> = cells.iter().map(|c| c.centroid()).collect();
        let order = self
            .tour
            .solve(room, &centroids, self.config.map.resolution, start_cell);

        // Boustrophedon pass through every cell in tour order
        let radius = (coverage.fitting_radius.floor() as i32).max(1);
        let mut waypoints = Vec::new();
        let mut robot_pos = start;
        let mut lines_traced = 0usize;
        let mut oracle_failures = 0usize;

        for &cell_idx in &order {
            let cell_lines = sweep_lines(room, &cells[cell_idx], radius);
            debug!(
                "[Planner] cell {}: {} sweep line(s)",
                cell_idx,
                cell_lines.len()
            );
            lines_traced += cell_lines.len();
            oracle_failures += stitcher::stitch_cell(
                room,
                self.shortest_path.as_ref(),
                &cell_lines,
                coverage.path_eps,
                &mut robot_pos,
                &mut waypoints,
            );
        }

        let fov_poses = orientation::annotate(&waypoints);

        // Adapt to the requested footprint mode and scale to world frame
        let resolution = self.config.map.resolution;
        let origin = self.config.map.origin();
        let (poses, dropped_poses) = if coverage.plan_for_footprint {
            (
                footprint::scale_to_world(&fov_poses, resolution, origin),
                0,
            )
        } else {
            let (body, dropped) = footprint::map_to_body_path(
                room,
                &fov_poses,
                coverage.fov_offset(),
                resolution,
                start,
            );
            (footprint::scale_to_world(&body, resolution, origin), dropped)
        };

        info!(
            "[Planner] plan complete: {} pose(s) over {} cell(s), {} line(s)",
            poses.len(),
            cells.len(),
            lines_traced
        );
        CoveragePath {
            poses,
            cells_found: cells.len(),
            lines_traced,
            oracle_failures,
            dropped_poses,
        }
    }
}
