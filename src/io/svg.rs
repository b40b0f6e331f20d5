//! SVG audit rendering of a room map and its coverage path.
//!
//! Serves the same purpose as an on-screen debug view: the occupancy
//! raster, the painted cell boundaries, and the planned trajectory in one
//! picture that can be opened after a test run.

use crate::core::{GridCoord, Pose2D, WorldPoint};
use crate::grid::RoomGrid;
use std::fmt::Write;
use std::path::Path;

/// SVG color scheme
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Obstacle cell color
    pub obstacle: &'static str,
    /// Free cell color
    pub free: &'static str,
    /// Trajectory color
    pub trajectory: &'static str,
    /// Marker color
    pub marker: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            obstacle: "#333333",
            free: "#FFFFFF",
            trajectory: "#2222AA",
            marker: "#AA2222",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per grid cell
    pub cell_px: f32,
    /// Padding around the map in pixels
    pub padding: f32,
    /// Trajectory line width in pixels
    pub trajectory_width: f32,
    /// Marker radius in pixels
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_px: 8.0,
            padding: 16.0,
            trajectory_width: 2.0,
            marker_radius: 3.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG visualization builder for one plan
pub struct CoverageSvg<'a> {
    room: &'a RoomGrid,
    config: SvgConfig,
    resolution: f32,
    origin: WorldPoint,
    trajectory: Vec<Pose2D>,
    markers: Vec<WorldPoint>,
    title: Option<String>,
}

impl<'a> CoverageSvg<'a> {
    /// Create a visualizer for a room.
    ///
    /// `resolution` and `origin` must match the values the plan was scaled
    /// with, so world-frame poses land on the right cells.
    pub fn new(room: &'a RoomGrid, resolution: f32, origin: WorldPoint) -> Self {
        Self {
            room,
            config: SvgConfig::default(),
            resolution,
            origin,
            trajectory: Vec::new(),
            markers: Vec::new(),
            title: None,
        }
    }

    /// Replace the rendering configuration
    pub fn with_config(mut self, config: SvgConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the title text
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the trajectory (world-frame poses)
    pub fn set_trajectory(&mut self, poses: &[Pose2D]) {
        self.trajectory = poses.to_vec();
    }

    /// Add a point marker (world frame)
    pub fn add_marker(&mut self, point: WorldPoint) {
        self.markers.push(point);
    }

    fn world_to_px(&self, p: WorldPoint) -> (f32, f32) {
        (
            (p.x - self.origin.x) / self.resolution * self.config.cell_px + self.config.padding,
            (p.y - self.origin.y) / self.resolution * self.config.cell_px + self.config.padding,
        )
    }

    /// Render to an SVG string
    pub fn to_svg(&self) -> String {
        let cell_px = self.config.cell_px;
        let width = self.room.width() as f32 * cell_px + 2.0 * self.config.padding;
        let height = self.room.height() as f32 * cell_px + 2.0 * self.config.padding;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        );

        // Free background, obstacle cells on top
        let _ = writeln!(
            svg,
            r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            self.config.padding,
            self.config.padding,
            self.room.width() as f32 * cell_px,
            self.room.height() as f32 * cell_px,
            self.config.colors.free
        );
        for y in 0..self.room.height() as i32 {
            for x in 0..self.room.width() as i32 {
                if self.room.is_free(GridCoord::new(x, y)) {
                    continue;
                }
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                    x as f32 * cell_px + self.config.padding,
                    y as f32 * cell_px + self.config.padding,
                    cell_px,
                    cell_px,
                    self.config.colors.obstacle
                );
            }
        }

        if self.trajectory.len() >= 2 {
            let mut points = String::new();
            for pose in &self.trajectory {
                let (px, py) = self.world_to_px(pose.position());
                let _ = write!(points, "{:.1},{:.1} ", px, py);
            }
            let _ = writeln!(
                svg,
                r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
                points.trim_end(),
                self.config.colors.trajectory,
                self.config.trajectory_width
            );
        }

        for marker in &self.markers {
            let (px, py) = self.world_to_px(*marker);
            let _ = writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                px, py, self.config.marker_radius, self.config.colors.marker
            );
        }

        if let Some(title) = &self.title {
            let _ = writeln!(
                svg,
                r#"  <text x="{:.1}" y="{:.1}" font-size="12" font-family="monospace">{}</text>"#,
                self.config.padding,
                self.config.padding * 0.75,
                title
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the SVG to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_svg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    #[test]
    fn test_svg_structure() {
        let mut room = RoomGrid::open(4, 3);
        room.set(GridCoord::new(1, 1), CellState::Obstacle);

        let mut vis = CoverageSvg::new(&room, 1.0, WorldPoint::ZERO);
        vis.set_title("plan");
        vis.set_trajectory(&[Pose2D::new(0.0, 0.0, 0.0), Pose2D::new(3.0, 2.0, 0.0)]);
        vis.add_marker(WorldPoint::new(0.0, 0.0));

        let svg = vis.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        // One background rect plus one obstacle rect
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("plan"));
    }

    #[test]
    fn test_trajectory_pixel_mapping() {
        let room = RoomGrid::open(10, 10);
        let vis = CoverageSvg::new(&room, 0.5, WorldPoint::new(-1.0, -1.0));
        // World (0, 0) is cell (2, 2): pixel 2 * 8 + 16 = 32
        let (px, py) = vis.world_to_px(WorldPoint::ZERO);
        assert!((px - 32.0).abs() < 1e-4);
        assert!((py - 32.0).abs() < 1e-4);
    }
}
