//! Default value functions for serde deserialization.

pub fn resolution() -> f32 {
    0.05
}

pub fn origin_coord() -> f32 {
    0.0
}

pub fn fitting_radius() -> f32 {
    3.0
}

pub fn path_eps() -> i32 {
    2
}

pub fn plan_for_footprint() -> bool {
    true
}

pub fn fov_offset() -> [f32; 2] {
    [0.0, 0.0]
}

pub fn enabled() -> bool {
    true
}

pub fn diagonal_cost() -> f32 {
    std::f32::consts::SQRT_2
}

pub fn max_iterations() -> usize {
    100_000
}
