//! Intra-cell path stitching.
//!
//! Turns a cell's sweep lines into one ordered waypoint sequence: pick the
//! entry corner closest to the robot, trace each line, and connect
//! successive lines through free space with the shortest-path oracle.

use crate::core::GridCoord;
use crate::grid::RoomGrid;
use crate::oracles::ShortestPath;
use log::warn;

use super::lines::SweepLine;

/// Append the serpentine path through one cell to `out`.
///
/// `robot_pos` is the position the robot reaches the cell from; on return it
/// holds the exit point of the last traced line, which becomes the entry
/// reference for the next cell. Returns the number of failed oracle
/// connections (each one falls back to jumping straight to the line entry).
pub fn stitch_cell(
    room: &RoomGrid,
    oracle: &dyn ShortestPath,
    lines: &[SweepLine],
    path_eps: i32,
    robot_pos: &mut GridCoord,
    out: &mut Vec<GridCoord>,
) -> usize {
    if lines.is_empty() {
        return 0;
    }
    let mut failures = 0;
    let last = lines.len() - 1;

    // Distances to the four candidate entry corners decide the vertical
    // traversal order and the horizontal direction of the first line.
    let d1 = distance_or_inf(oracle, room, *robot_pos, lines[0].left);
    let d2 = distance_or_inf(oracle, room, *robot_pos, lines[0].right);
    let d3 = distance_or_inf(oracle, room, *robot_pos, lines[last].left);
    let d4 = distance_or_inf(oracle, room, *robot_pos, lines[last].right);

    let mut from_top = true;
    let mut left = true;
    if (d3 < d1 && d3 < d2) || (d4 < d1 && d4 < d2) {
        from_top = false;
        if d4 < d3 {
            left = false;
        }
    } else if d2 < d1 {
        left = false;
    }

    let order: Vec<usize> = if from_top {
        (0..lines.len()).collect()
    } else {
        (0..lines.len()).rev().collect()
    };

    let mut first = true;
    for idx in order {
        let line = &lines[idx];
        let (entry, exit) = if left {
            (line.left, line.right)
        } else {
            (line.right, line.left)
        };

        if first {
            // The cell is entered at this corner, nothing to connect yet
            *robot_pos = entry;
            first = false;
        }

        // Route from the current position to the line entry, thinning the
        // oracle's trace to the waypoint spacing
        match oracle.trace(room, *robot_pos, entry) {
            Some(path) => {
                for p in path {
                    if robot_pos.distance(&p) >= path_eps as f32 {
                        out.push(p);
                        *robot_pos = p;
                    }
                }
            }
            None => {
                warn!(
                    "[Stitcher] no route to line entry ({}, {}), jumping there",
                    entry.x, entry.y
                );
                failures += 1;
            }
        }
        out.push(entry);

        // Trace the line itself in path_eps steps
        if left {
            let mut dx = path_eps;
            while line.left.x + dx < line.right.x {
                out.push(GridCoord::new(line.left.x + dx, line.left.y));
                dx += path_eps;
            }
            out.push(line.right);
        } else {
            let mut dx = -path_eps;
            while line.right.x + dx > line.left.x {
                out.push(GridCoord::new(line.right.x + dx, line.right.y));
                dx -= path_eps;
            }
            out.push(line.left);
        }

        *robot_pos = exit;
        left = !left;
    }

    failures
}

fn distance_or_inf(
    oracle: &dyn ShortestPath,
    room: &RoomGrid,
    from: GridCoord,
    to: GridCoord,
) -> f32 {
    oracle.distance(room, from, to).unwrap_or(f32::INFINITY)
}
