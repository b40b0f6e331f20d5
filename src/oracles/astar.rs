//! A* shortest-path oracle over the binary grid.

use crate::config::AStarSettings;
use crate::core::GridCoord;
use crate::grid::RoomGrid;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::ShortestPath;

/// A node in the A* search
#[derive(Clone, Debug)]
struct AStarNode {
    coord: GridCoord,
    g_cost: f32,
    f_cost: f32, // g_cost + heuristic
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Default shortest-path oracle: A* over free cells.
///
/// 8-connected by default with an octile heuristic; the line endpoints it
/// links are already inset from walls by the fitting radius, so no footprint
/// inflation happens here.
pub struct GridAStar {
    config: AStarSettings,
}

impl GridAStar {
    /// Create a planner with the given settings
    pub fn new(config: AStarSettings) -> Self {
        Self { config }
    }

    /// Create with default settings
    pub fn with_defaults() -> Self {
        Self::new(AStarSettings::default())
    }

    /// Run the search and return the path with its cost.
    fn search(&self, grid: &RoomGrid, start: GridCoord, goal: GridCoord) -> Option<(Vec<GridCoord>, f32)> {
        if !grid.is_free(start) || !grid.is_free(goal) {
            debug!(
                "[AStar] endpoint blocked: start=({},{}) goal=({},{})",
                start.x, start.y, goal.x, goal.y
            );
            return None;
        }

        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_scores: HashMap<GridCoord, f32> = HashMap::new();

        open_set.push(AStarNode {
            coord: start,
            g_cost: 0.0,
            f_cost: self.heuristic(start, goal),
        });
        g_scores.insert(start, 0.0);

        let mut nodes_expanded = 0usize;

        while let Some(current) = open_set.pop() {
            nodes_expanded += 1;
            if nodes_expanded > self.config.max_iterations {
                debug!("[AStar] gave up after {} nodes", nodes_expanded);
                return None;
            }

            if current.coord == goal {
                let path = reconstruct_path(&came_from, goal);
                trace!(
                    "[AStar] path of {} cells, cost {:.2}, {} nodes expanded",
                    path.len(),
                    current.g_cost,
                    nodes_expanded
                );
                return Some((path, current.g_cost));
            }

            if !closed_set.insert(current.coord) {
                continue;
            }

            let neighbors = if self.config.allow_diagonal {
                current.coord.neighbors_8().to_vec()
            } else {
                current.coord.neighbors_4().to_vec()
            };

            for (i, neighbor) in neighbors.into_iter().enumerate() {
                if closed_set.contains(&neighbor) || !grid.is_free(neighbor) {
                    continue;
                }

                // neighbors_8 lists cardinals first, diagonals from index 4
                let move_cost = if self.config.allow_diagonal && i >= 4 {
                    self.config.diagonal_cost
                } else {
                    1.0
                };

                let tentative_g = g_scores[&current.coord] + move_cost;
                let current_g = g_scores.get(&neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative_g < current_g {
                    came_from.insert(neighbor, current.coord);
                    g_scores.insert(neighbor, tentative_g);
                    open_set.push(AStarNode {
                        coord: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g + self.heuristic(neighbor, goal),
                    });
                }
            }
        }

        debug!("[AStar] no path after expanding {} nodes", nodes_expanded);
        None
    }

    /// Octile distance for 8-connected grids, Manhattan otherwise
    fn heuristic(&self, from: GridCoord, to: GridCoord) -> f32 {
        let dx = (from.x - to.x).abs() as f32;
        let dy = (from.y - to.y).abs() as f32;

        if self.config.allow_diagonal {
            let min = dx.min(dy);
            let max = dx.max(dy);
            min * self.config.diagonal_cost + (max - min)
        } else {
            dx + dy
        }
    }
}

impl ShortestPath for GridAStar {
    fn distance(&self, grid: &RoomGrid, from: GridCoord, to: GridCoord) -> Option<f32> {
        self.search(grid, from, to).map(|(_, cost)| cost)
    }

    fn trace(&self, grid: &RoomGrid, from: GridCoord, to: GridCoord) -> Option<Vec<GridCoord>> {
        self.search(grid, from, to).map(|(path, _)| path)
    }
}

/// Walk the came_from chain back from the goal
fn reconstruct_path(came_from: &HashMap<GridCoord, GridCoord>, goal: GridCoord) -> Vec<GridCoord> {
    let mut path = Vec::new();
    let mut current = goal;

    while let Some(&prev) = came_from.get(&current) {
        path.push(current);
        current = prev;
    }
    path.push(current);
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    fn wall_room() -> RoomGrid {
        // 20x20 open room with a vertical wall leaving a gap at the bottom
        let mut grid = RoomGrid::open(20, 20);
        for y in 0..15 {
            grid.set(GridCoord::new(10, y), CellState::Obstacle);
        }
        grid
    }

    #[test]
    fn test_straight_path() {
        let grid = RoomGrid::open(20, 10);
        let astar = GridAStar::with_defaults();
        let path = astar
            .trace(&grid, GridCoord::new(2, 5), GridCoord::new(15, 5))
            .unwrap();
        assert_eq!(path[0], GridCoord::new(2, 5));
        assert_eq!(*path.last().unwrap(), GridCoord::new(15, 5));
        assert_eq!(path.len(), 14);

        let dist = astar
            .distance(&grid, GridCoord::new(2, 5), GridCoord::new(15, 5))
            .unwrap();
        assert!((dist - 13.0).abs() < 1e-3);
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = RoomGrid::open(5, 5);
        let astar = GridAStar::with_defaults();
        let p = GridCoord::new(2, 2);
        assert_eq!(astar.trace(&grid, p, p).unwrap(), vec![p]);
        assert_eq!(astar.distance(&grid, p, p).unwrap(), 0.0);
    }

    #[test]
    fn test_path_routes_around_wall() {
        let grid = wall_room();
        let astar = GridAStar::with_defaults();
        let path = astar
            .trace(&grid, GridCoord::new(5, 5), GridCoord::new(15, 5))
            .unwrap();
        // Must dip below the wall end at y=15
        assert!(path.iter().any(|p| p.y >= 15));
        for p in &path {
            assert!(grid.is_free(*p));
        }
    }

    #[test]
    fn test_no_path_through_full_wall() {
        let mut grid = RoomGrid::open(20, 20);
        for y in 0..20 {
            grid.set(GridCoord::new(10, y), CellState::Obstacle);
        }
        let astar = GridAStar::with_defaults();
        assert!(astar
            .trace(&grid, GridCoord::new(5, 5), GridCoord::new(15, 5))
            .is_none());
    }

    #[test]
    fn test_blocked_endpoints_fail() {
        let mut grid = RoomGrid::open(10, 10);
        grid.set(GridCoord::new(2, 2), CellState::Obstacle);
        let astar = GridAStar::with_defaults();
        assert!(astar
            .distance(&grid, GridCoord::new(2, 2), GridCoord::new(5, 5))
            .is_none());
        assert!(astar
            .distance(&grid, GridCoord::new(5, 5), GridCoord::new(2, 2))
            .is_none());
    }

    #[test]
    fn test_4_connected_path_is_manhattan() {
        let grid = RoomGrid::open(20, 20);
        let config = AStarSettings {
            allow_diagonal: false,
            ..Default::default()
        };
        let astar = GridAStar::new(config);
        let dist = astar
            .distance(&grid, GridCoord::new(2, 2), GridCoord::new(8, 7))
            .unwrap();
        assert!((dist - 11.0).abs() < 1e-3);
    }
}
