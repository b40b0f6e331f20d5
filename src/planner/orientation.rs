//! Heading annotation for waypoint sequences.

use crate::core::{GridCoord, Pose2D};

/// Convert waypoints into poses, deriving each heading from the vector to
/// the next waypoint. The last pose wraps around to the first waypoint;
/// callers with non-cyclic paths should override that final heading.
pub fn annotate(points: &[GridCoord]) -> Vec<Pose2D> {
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let next = points[(i + 1) % n];
            let theta = ((next.y - p.y) as f32).atan2((next.x - p.x) as f32);
            Pose2D::new(p.x as f32, p.y as f32, theta)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_empty_input() {
        assert!(annotate(&[]).is_empty());
    }

    #[test]
    fn test_square_loop_headings() {
        // Clockwise square in image coordinates (y down)
        let points = [
            GridCoord::new(0, 0),
            GridCoord::new(5, 0),
            GridCoord::new(5, 5),
            GridCoord::new(0, 5),
        ];
        let poses = annotate(&points);

        assert_eq!(poses.len(), 4);
        assert!((poses[0].theta - 0.0).abs() < 1e-6); // heading east
        assert!((poses[1].theta - FRAC_PI_2).abs() < 1e-6); // heading down
        assert!((poses[2].theta.abs() - PI).abs() < 1e-6); // heading west
        assert!((poses[3].theta + FRAC_PI_2).abs() < 1e-6); // heading up, cyclic
    }

    #[test]
    fn test_single_point_zero_heading() {
        let poses = annotate(&[GridCoord::new(3, 4)]);
        assert_eq!(poses.len(), 1);
        assert_eq!(poses[0].theta, 0.0);
        assert_eq!(poses[0].x, 3.0);
        assert_eq!(poses[0].y, 4.0);
    }
}
