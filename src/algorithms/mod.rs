//! Trajectory computation

pub mod minimum_curvature;
pub mod trajectory;

pub use minimum_curvature::{compute_station, compute_trajectory, dogleg_angle, ratio_factor, MinimumCurvature};
pub use trajectory::Trajectory;
