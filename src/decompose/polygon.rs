//! Per-cell polygon container.

use crate::core::{CellState, GridBounds, GridCoord};
use crate::grid::RoomGrid;
use serde::{Deserialize, Serialize};

/// One decomposition cell as a closed boundary polygon.
///
/// Vertices are the ordered boundary pixels produced by contour tracing.
/// The centroid (vertex mean) and the bounding box are cached at
/// construction; both drive the downstream ordering and line generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CellPolygon {
    vertices: Vec<GridCoord>,
    centroid: GridCoord,
    bounds: GridBounds,
}

impl CellPolygon {
    /// Build a polygon from its ordered boundary points.
    pub fn new(vertices: Vec<GridCoord>) -> Self {
        debug_assert!(!vertices.is_empty(), "cell polygon needs at least one point");

        let n = vertices.len().max(1) as i64;
        let sum_x: i64 = vertices.iter().map(|v| v.x as i64).sum();
        let sum_y: i64 = vertices.iter().map(|v| v.y as i64).sum();
        let centroid = GridCoord::new((sum_x / n) as i32, (sum_y / n) as i32);

        let bounds =
            GridBounds::of_points(&vertices).unwrap_or_else(|| GridBounds::new(0, 0, 0, 0));

        Self {
            vertices,
            centroid,
            bounds,
        }
    }

    /// Ordered boundary points
    #[inline]
    pub fn vertices(&self) -> &[GridCoord] {
        &self.vertices
    }

    /// Vertex-mean centroid
    #[inline]
    pub fn centroid(&self) -> GridCoord {
        self.centroid
    }

    /// Axis-aligned bounding box of the boundary
    #[inline]
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Is the point inside the cell (boundary included)?
    ///
    /// Boundary membership is exact since every boundary pixel is a vertex;
    /// interior membership uses the even-odd ray crossing rule.
    pub fn contains(&self, p: GridCoord) -> bool {
        if !self.bounds.contains(p) {
            return false;
        }
        if self.vertices.contains(&p) {
            return true;
        }
        if self.vertices.len() < 3 {
            return false;
        }

        let px = p.x as f32;
        let py = p.y as f32;
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let xi = self.vertices[i].x as f32;
            let yi = self.vertices[i].y as f32;
            let xj = self.vertices[j].x as f32;
            let yj = self.vertices[j].y as f32;

            let crosses = ((yi > py) != (yj > py))
                && (px < (xj - xi) * (py - yi) / (yj - yi + f32::EPSILON) + xi);
            if crosses {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Rasterize the cell onto a fresh grid of the given size.
    ///
    /// Cell pixels are marked free, everything else obstacle.
    pub fn render_mask(&self, width: usize, height: usize) -> RoomGrid {
        let mut mask = RoomGrid::filled(width, height, CellState::Obstacle);
        for y in self.bounds.min_y..=self.bounds.max_y {
            for x in self.bounds.min_x..=self.bounds.max_x {
                let p = GridCoord::new(x, y);
                if self.contains(p) {
                    mask.set(p, CellState::Free);
                }
            }
        }
        mask
    }
}
