//! Morse sweep-line cell decomposition.
//!
//! Sweeps a horizontal slice top-to-bottom over the room map and watches the
//! connectivity of the slice: how many free-space segments it crosses. When
//! the segment count increases (IN event) an obstacle has just split a free
//! run; when it decreases (OUT event) two runs have merged past the end of an
//! obstacle. At each event the row next to the obstacle is searched for
//! critical points, and from each critical point a separating wall is painted
//! left and right into a working copy of the map until existing obstacles
//! stop it. The result is a map whose maximal free regions are the cells of
//! the decomposition.

use crate::core::{CellState, GridCoord};
use crate::grid::RoomGrid;
use log::{debug, trace};

/// Decompose the room into obstacle-free cells.
///
/// Returns a copy of `room` with cell-separating walls painted in. A map
/// without any free cell is returned unchanged; the contour extractor then
/// finds zero cells and the planner yields an empty path.
pub fn decompose(room: &RoomGrid) -> RoomGrid {
    let mut cell_map = room.clone();
    let height = room.height() as i32;

    let y_start = match (0..height).find(|&y| row_has_free(room, y)) {
        Some(y) => y,
        None => return cell_map,
    };

    // Segment count of the first populated row seeds the sweep; every later
    // row is compared against its predecessor.
    let mut previous_segments = count_segment_breaks(room, y_start);
    trace!(
        "[Sweep] start row y={} with {} segment break(s)",
        y_start,
        previous_segments
    );

    for y in y_start + 1..height {
        let segments = count_segment_breaks(room, y);

        if segments > previous_segments {
            // IN event: the critical point sits on this row, its free stencil
            // in the row above.
            trace!("[Sweep] IN event at y={} ({} -> {})", y, previous_segments, segments);
            mark_separators(room, &mut cell_map, y, y - 1);
        } else if segments < previous_segments {
            // OUT event: the obstacle ended above, so the critical point sits
            // on the previous row and the free stencil below it.
            trace!("[Sweep] OUT event at y={} ({} -> {})", y, previous_segments, segments);
            mark_separators(room, &mut cell_map, y - 1, y);
        }

        previous_segments = segments;
    }

    debug!(
        "[Sweep] decomposition done, {} free cells remain of {}",
        cell_map.free_count(),
        room.free_count()
    );
    cell_map
}

/// Does row `y` contain any free cell?
fn row_has_free(room: &RoomGrid, y: i32) -> bool {
    (0..room.width() as i32).any(|x| room.is_free(GridCoord::new(x, y)))
}

/// Count the free-to-obstacle transitions in row `y`, starting at the row's
/// first free cell. A trailing obstacle run counts like any other; only the
/// relative change between rows matters to the sweep.
fn count_segment_breaks(room: &RoomGrid, y: i32) -> usize {
    let mut hit_free = false;
    let mut in_obstacle = false;
    let mut count = 0;

    for x in 0..room.width() as i32 {
        let free = room.is_free(GridCoord::new(x, y));
        if free && !hit_free {
            hit_free = true;
        } else if hit_free {
            if !in_obstacle && !free {
                count += 1;
                in_obstacle = true;
            } else if in_obstacle && free {
                in_obstacle = false;
            }
        }
    }
    count
}

/// Search `event_row` for critical points and paint their separators.
///
/// A critical point is an obstacle cell, preceded in its row by free space,
/// whose three neighbors at x-1, x, x+1 on `stencil_row` are all free.
/// Cells outside the grid count as obstacle, so obstacles hugging the map
/// edge never qualify.
fn mark_separators(room: &RoomGrid, cell_map: &mut RoomGrid, event_row: i32, stencil_row: i32) {
    let mut hit_free = false;

    for x in 0..room.width() as i32 {
        if room.is_free(GridCoord::new(x, event_row)) {
            hit_free = true;
        } else if hit_free {
            let critical =
                (-1..=1).all(|dx| room.is_free(GridCoord::new(x + dx, stencil_row)));
            if critical {
                trace!("[Sweep] critical point at ({}, {})", x, event_row);
                paint_separator(cell_map, x, event_row);
            }
        }
    }
}

/// Paint obstacle left and right of the critical point at (`x`, `y`),
/// stopping at the first cell that is already obstacle in the working map.
/// Separators painted by an earlier critical point on the same row stop the
/// flood, so overlapping events never double-cover a row.
fn paint_separator(cell_map: &mut RoomGrid, x: i32, y: i32) {
    let width = cell_map.width() as i32;

    let mut dx = x - 1;
    while dx >= 0 && cell_map.is_free(GridCoord::new(dx, y)) {
        cell_map.set(GridCoord::new(dx, y), CellState::Obstacle);
        dx -= 1;
    }

    let mut dx = x + 1;
    while dx < width && cell_map.is_free(GridCoord::new(dx, y)) {
        cell_map.set(GridCoord::new(dx, y), CellState::Obstacle);
        dx += 1;
    }
}
