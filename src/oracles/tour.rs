//! Greedy nearest-neighbor tour solver.

use crate::core::GridCoord;
use crate::grid::RoomGrid;
use log::trace;

use super::TourSolver;

/// Default tour oracle: greedy nearest-neighbor over centroid distances.
///
/// Always picks the closest unvisited node next. Ties break toward the
/// lowest index, so the result is deterministic.
#[derive(Clone, Debug, Default)]
pub struct GreedyTour;

impl GreedyTour {
    /// Create a solver
    pub fn new() -> Self {
        Self
    }
}

impl TourSolver for GreedyTour {
    fn solve(
        &self,
        _grid: &RoomGrid,
        nodes: &[GridCoord],
        resolution: f32,
        start_index: usize,
    ) -> Vec<usize> {
        if nodes.is_empty() {
            return Vec::new();
        }
        let start = start_index.min(nodes.len() - 1);

        let mut order = Vec::with_capacity(nodes.len());
        let mut visited = vec![false; nodes.len()];
        let mut current = start;
        order.push(start);
        visited[start] = true;

        while order.len() < nodes.len() {
            let mut best = usize::MAX;
            let mut best_dist = f32::INFINITY;
            for (i, node) in nodes.iter().enumerate() {
                if visited[i] {
                    continue;
                }
                let dist = nodes[current].distance(node) * resolution;
                if dist < best_dist {
                    best_dist = dist;
                    best = i;
                }
            }

            trace!("[Tour] {} -> {} ({:.2})", current, best, best_dist);
            visited[best] = true;
            order.push(best);
            current = best;
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_starts_at_start_index() {
        let grid = RoomGrid::open(10, 10);
        let nodes = [
            GridCoord::new(0, 0),
            GridCoord::new(9, 9),
            GridCoord::new(5, 5),
        ];
        let order = GreedyTour::new().solve(&grid, &nodes, 0.05, 1);
        assert_eq!(order[0], 1);
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_tour_picks_nearest_next() {
        let grid = RoomGrid::open(30, 10);
        // Nodes on a line; greedy from index 0 walks them in x order
        let nodes = [
            GridCoord::new(0, 5),
            GridCoord::new(20, 5),
            GridCoord::new(5, 5),
            GridCoord::new(12, 5),
        ];
        let order = GreedyTour::new().solve(&grid, &nodes, 1.0, 0);
        assert_eq!(order, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_empty_nodes() {
        let grid = RoomGrid::open(5, 5);
        assert!(GreedyTour::new().solve(&grid, &[], 1.0, 0).is_empty());
    }

    #[test]
    fn test_start_index_clamped() {
        let grid = RoomGrid::open(5, 5);
        let nodes = [GridCoord::new(1, 1), GridCoord::new(3, 3)];
        let order = GreedyTour::new().solve(&grid, &nodes, 1.0, 99);
        assert_eq!(order[0], 1);
    }
}
