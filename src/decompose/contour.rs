//! Cell contour extraction from the decomposed map.
//!
//! Labels each maximal 4-connected free region and traces its outer boundary
//! with Moore neighborhood tracing. Each traced boundary becomes one
//! [`CellPolygon`].

use crate::core::GridCoord;
use crate::grid::RoomGrid;
use log::debug;

use super::polygon::CellPolygon;

/// Moore neighborhood directions, clockwise from east (y grows downward)
const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),   // 0: east
    (1, 1),   // 1: south-east
    (0, 1),   // 2: south
    (-1, 1),  // 3: south-west
    (-1, 0),  // 4: west
    (-1, -1), // 5: north-west
    (0, -1),  // 6: north
    (1, -1),  // 7: north-east
];

/// Extract one polygon per maximal free region of the decomposed map.
///
/// Regions are scanned in row-major order, so the returned list is ordered
/// top-to-bottom by each cell's topmost boundary point.
pub fn extract_cells(map: &RoomGrid) -> Vec<CellPolygon> {
    let width = map.width();
    let height = map.height();
    let mut labels = vec![0u32; width * height];
    let mut polygons = Vec::new();
    let mut next_label = 1u32;

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let seed = GridCoord::new(x, y);
            if !map.is_free(seed) || labels[y as usize * width + x as usize] != 0 {
                continue;
            }

            flood_fill(map, &mut labels, seed, next_label);

            let inside = |p: GridCoord| {
                p.x >= 0
                    && p.y >= 0
                    && (p.x as usize) < width
                    && (p.y as usize) < height
                    && labels[p.y as usize * width + p.x as usize] == next_label
            };
            let contour = trace_boundary(&inside, seed, width * height);
            polygons.push(CellPolygon::new(contour));
            next_label += 1;
        }
    }

    debug!("[Contour] extracted {} cell(s)", polygons.len());
    polygons
}

/// Label the 4-connected free region containing `seed`.
fn flood_fill(map: &RoomGrid, labels: &mut [u32], seed: GridCoord, label: u32) {
    let width = map.width();
    let mut stack = vec![seed];
    labels[seed.y as usize * width + seed.x as usize] = label;

    while let Some(current) = stack.pop() {
        for neighbor in current.neighbors_4() {
            if !map.is_free(neighbor) {
                continue;
            }
            let idx = neighbor.y as usize * width + neighbor.x as usize;
            if labels[idx] == 0 {
                labels[idx] = label;
                stack.push(neighbor);
            }
        }
    }
}

/// Trace the outer boundary of a region with Moore neighborhood tracing.
///
/// `start` must be the region's topmost-leftmost pixel (row-major scan order
/// guarantees the region lies below-right of it). Returns the ordered
/// boundary pixels; a single isolated pixel yields a one-point contour.
fn trace_boundary(
    inside: &dyn Fn(GridCoord) -> bool,
    start: GridCoord,
    max_steps: usize,
) -> Vec<GridCoord> {
    // Initial backtrack direction: the first neighbor outside the region
    let mut backtrack = 0usize;
    for (i, &(dx, dy)) in DIRECTIONS.iter().enumerate() {
        if !inside(GridCoord::new(start.x + dx, start.y + dy)) {
            backtrack = i;
            break;
        }
    }

    let mut contour = Vec::new();
    let mut current = start;
    let mut dir = backtrack;
    let mut steps = 0usize;

    loop {
        if contour.last() != Some(&current) && !contour.contains(&current) {
            contour.push(current);
        }

        // Resume the clockwise search three positions back from the last
        // move direction, so the trace hugs the region boundary
        let search_start = (dir + 5) % 8;
        let mut advanced = false;

        for i in 0..8 {
            let check_dir = (search_start + i) % 8;
            let (dx, dy) = DIRECTIONS[check_dir];
            let next = GridCoord::new(current.x + dx, current.y + dy);

            if inside(next) {
                if next == start && steps > 0 {
                    return contour;
                }
                current = next;
                dir = check_dir;
                advanced = true;
                break;
            }
        }

        if !advanced {
            // Isolated pixel, nothing to walk around
            break;
        }

        steps += 1;
        if steps >= max_steps * 2 {
            break;
        }
    }

    contour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    #[test]
    fn test_no_free_space_no_cells() {
        let map = RoomGrid::filled(6, 6, CellState::Obstacle);
        assert!(extract_cells(&map).is_empty());
    }

    #[test]
    fn test_single_region() {
        let map = RoomGrid::open(8, 5);
        let cells = extract_cells(&map);
        assert_eq!(cells.len(), 1);

        let bounds = cells[0].bounds();
        assert_eq!(bounds.min_x, 0);
        assert_eq!(bounds.max_x, 7);
        assert_eq!(bounds.min_y, 0);
        assert_eq!(bounds.max_y, 4);
    }

    #[test]
    fn test_two_regions_split_by_wall() {
        let mut map = RoomGrid::open(9, 5);
        for y in 0..5 {
            map.set(GridCoord::new(4, y), CellState::Obstacle);
        }
        let cells = extract_cells(&map);
        assert_eq!(cells.len(), 2);

        // Row-major scan finds the left region first
        assert_eq!(cells[0].bounds().max_x, 3);
        assert_eq!(cells[1].bounds().min_x, 5);
    }

    #[test]
    fn test_single_pixel_region() {
        let mut map = RoomGrid::filled(5, 5, CellState::Obstacle);
        map.set(GridCoord::new(2, 2), CellState::Free);
        let cells = extract_cells(&map);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].vertices(), &[GridCoord::new(2, 2)]);
    }

    #[test]
    fn test_one_row_strip() {
        let mut map = RoomGrid::filled(7, 3, CellState::Obstacle);
        for x in 1..6 {
            map.set(GridCoord::new(x, 1), CellState::Free);
        }
        let cells = extract_cells(&map);
        assert_eq!(cells.len(), 1);
        let bounds = cells[0].bounds();
        assert_eq!((bounds.min_x, bounds.max_x), (1, 5));
        assert_eq!((bounds.min_y, bounds.max_y), (1, 1));
        // Every strip pixel is a boundary pixel
        assert_eq!(cells[0].vertices().len(), 5);
    }

    #[test]
    fn test_boundary_only_vertices() {
        let map = RoomGrid::open(6, 6);
        let cells = extract_cells(&map);
        // Interior pixels are not part of the contour: 6x6 has 20 boundary pixels
        assert_eq!(cells[0].vertices().len(), 20);
    }
}
