//! Footprint adaptation and world scaling.
//!
//! The stitched path traces the sensor field-of-view midpoint. In footprint
//! mode those poses already are robot body poses and only need scaling to
//! world coordinates. In FOV mode each pose is first mapped to a body pose
//! by undoing the robot-to-FOV offset; body positions that land in an
//! obstacle fall back to the closest free point on the offset circle.

use crate::core::{GridCoord, Pose2D, WorldPoint};
use crate::grid::RoomGrid;
use log::warn;

/// Circle samples for the fallback search (5 degree steps)
const CIRCLE_SAMPLES: usize = 72;

/// Scale grid-frame poses to world coordinates.
pub fn scale_to_world(poses: &[Pose2D], resolution: f32, origin: WorldPoint) -> Vec<Pose2D> {
    poses
        .iter()
        .map(|p| {
            Pose2D::new(
                p.x * resolution + origin.x,
                p.y * resolution + origin.y,
                p.theta,
            )
        })
        .collect()
}

/// Map FOV midpoint poses to robot body poses, both in grid cells.
///
/// The body candidate is the FOV position minus the offset vector rotated
/// by the pose heading. When the candidate is blocked, the free point on
/// the offset-radius circle around the FOV midpoint closest to the previous
/// body position is used instead; when the whole circle is blocked the
/// waypoint is dropped. Returns the body poses and the dropped count.
pub fn map_to_body_path(
    room: &RoomGrid,
    fov_poses: &[Pose2D],
    fov_offset: WorldPoint,
    resolution: f32,
    start: GridCoord,
) -> (Vec<Pose2D>, usize) {
    let offset_cells = WorldPoint::new(fov_offset.x / resolution, fov_offset.y / resolution);
    let radius = offset_cells.length();

    let mut previous = WorldPoint::new(start.x as f32, start.y as f32);
    let mut body_poses = Vec::with_capacity(fov_poses.len());
    let mut dropped = 0usize;

    for pose in fov_poses {
        let rotated = offset_cells.rotate(pose.theta);
        let candidate = WorldPoint::new(pose.x - rotated.x, pose.y - rotated.y);

        let body = if is_free_at(room, candidate) {
            Some(candidate)
        } else {
            closest_free_on_circle(room, pose.position(), radius, previous)
        };

        match body {
            Some(b) => {
                body_poses.push(Pose2D::new(b.x, b.y, pose.theta));
                previous = b;
            }
            None => {
                warn!(
                    "[Footprint] no reachable body pose for FOV point ({:.1}, {:.1}), dropping",
                    pose.x, pose.y
                );
                dropped += 1;
            }
        }
    }

    (body_poses, dropped)
}

fn is_free_at(room: &RoomGrid, p: WorldPoint) -> bool {
    room.is_free(GridCoord::new(p.x.round() as i32, p.y.round() as i32))
}

/// Pick the free point on the circle around `center` closest to `previous`.
fn closest_free_on_circle(
    room: &RoomGrid,
    center: WorldPoint,
    radius: f32,
    previous: WorldPoint,
) -> Option<WorldPoint> {
    let step = std::f32::consts::TAU / CIRCLE_SAMPLES as f32;
    let mut best: Option<WorldPoint> = None;
    let mut best_dist = f32::INFINITY;

    for i in 0..CIRCLE_SAMPLES {
        let angle = i as f32 * step;
        let p = WorldPoint::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
        if !is_free_at(room, p) {
            continue;
        }
        let dist = p.distance(&previous);
        if dist < best_dist {
            best_dist = dist;
            best = Some(p);
        }
    }
    best
}
