//! Survey constants and default engine parameters

/// Course length that dogleg severity and build rate are normalized to (degrees per 100 units)
pub const DEFAULT_COURSE_LENGTH: f64 = 100.0;

/// Dogleg angle (radians) below which consecutive stations are treated as collinear
pub const DEFAULT_COLLINEAR_TOLERANCE: f64 = 1e-9;

/// Minimum number of stations that make up a complete trajectory
pub const MIN_TRAJECTORY_STATIONS: usize = 2;

pub const MAX_INCLINATION_DEG: f64 = 180.0;
pub const MAX_AZIMUTH_DEG: f64 = 360.0;
