//! Boustrophedon sweep line generation for one cell.

use crate::core::GridCoord;
use crate::decompose::CellPolygon;
use crate::grid::RoomGrid;
use log::trace;

/// One horizontal pass of the boustrophedon pattern.
///
/// Both endpoints share a y and are inset from the cell walls by the
/// fitting radius, so a disk of that radius centered anywhere on the line
/// stays in free space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepLine {
    /// Left (smaller x) endpoint
    pub left: GridCoord,
    /// Right (larger x) endpoint
    pub right: GridCoord,
}

/// Compute the ordered sweep lines spanning a cell top to bottom.
///
/// Cells shorter than the fitting diameter get a single line through their
/// vertical middle. Rows where no valid inset endpoints exist are skipped
/// silently, so degenerate cells may produce no lines at all.
pub fn sweep_lines(room: &RoomGrid, cell: &CellPolygon, radius: i32) -> Vec<SweepLine> {
    debug_assert!(radius >= 1);
    let bounds = cell.bounds();
    let mut lines = Vec::new();

    if bounds.max_y - bounds.min_y <= 2 * radius {
        // Cell fits under one pass
        let y = bounds.min_y + (bounds.max_y - bounds.min_y) / 2;
        if let Some(line) = line_at(room, &bounds, radius, y) {
            lines.push(line);
        }
        return lines;
    }

    let mut y = (bounds.min_y - 1) + radius;
    while y <= bounds.max_y {
        if let Some(line) = line_at(room, &bounds, radius, y) {
            lines.push(line);
        } else {
            trace!("[Lines] no valid endpoints at y={}, skipping", y);
        }
        y += radius;
    }
    lines
}

/// Build the inset line at row `y`, or `None` when the row has no free
/// span wide enough for both insets.
fn line_at(
    room: &RoomGrid,
    bounds: &crate::core::GridBounds,
    radius: i32,
    y: i32,
) -> Option<SweepLine> {
    // First free cell scanning right from the cell's left extent
    let first_free = (bounds.min_x..=bounds.max_x)
        .find(|&x| room.is_free(GridCoord::new(x, y)))?;
    // First free cell scanning left from the right extent
    let last_free = (bounds.min_x..=bounds.max_x)
        .rev()
        .find(|&x| room.is_free(GridCoord::new(x, y)))?;

    let left = GridCoord::new(first_free + radius, y);
    let right = GridCoord::new(last_free - radius, y);

    if left.x > right.x || !room.is_free(left) || !room.is_free(right) {
        return None;
    }
    Some(SweepLine { left, right })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;
    use crate::decompose::extract_cells;

    fn single_cell(room: &RoomGrid) -> CellPolygon {
        let cells = extract_cells(room);
        assert_eq!(cells.len(), 1);
        cells.into_iter().next().unwrap()
    }

    #[test]
    fn test_open_rectangle_lines() {
        // 20x10, radius 2: passes at y = 1, 3, 5, 7, 9, inset to x in [2, 17]
        let room = RoomGrid::open(20, 10);
        let cell = single_cell(&room);
        let lines = sweep_lines(&room, &cell, 2);

        assert_eq!(lines.len(), 5);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.left, GridCoord::new(2, 1 + 2 * i as i32));
            assert_eq!(line.right, GridCoord::new(17, 1 + 2 * i as i32));
        }
    }

    #[test]
    fn test_corridor_single_middle_line() {
        // Height 4 is within the fitting diameter, one line through the middle
        let room = RoomGrid::open(50, 4);
        let cell = single_cell(&room);
        let lines = sweep_lines(&room, &cell, 2);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].left, GridCoord::new(2, 1));
        assert_eq!(lines[0].right, GridCoord::new(47, 1));
    }

    #[test]
    fn test_large_room_line_count() {
        // 100x100, radius 5: lines at y = 4, 9, ..., 99
        let room = RoomGrid::open(100, 100);
        let cell = single_cell(&room);
        let lines = sweep_lines(&room, &cell, 5);

        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0].left.y, 4);
        assert_eq!(lines.last().unwrap().left.y, 99);
    }

    #[test]
    fn test_too_narrow_cell_emits_nothing() {
        // 3 cells wide, insets of radius 2 cross over
        let room = RoomGrid::open(3, 12);
        let cell = single_cell(&room);
        assert!(sweep_lines(&room, &cell, 2).is_empty());
    }

    #[test]
    fn test_blocked_row_skipped() {
        // Wide room, one row fully walled: that pass disappears, others stay
        let mut room = RoomGrid::open(30, 13);
        for x in 0..30 {
            room.set(GridCoord::new(x, 5), CellState::Obstacle);
        }
        // Treat the whole area as one cell to isolate the row scan
        let cell = single_cell(&RoomGrid::open(30, 13));
        let lines = sweep_lines(&room, &cell, 3);

        assert!(lines.iter().all(|l| l.left.y != 5));
        assert!(!lines.is_empty());
    }
}
