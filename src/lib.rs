//! Wellbore directional survey computation
//!
//! Validates survey stations (measured depth, inclination, azimuth) and
//! derives true vertical depth, northing, easting, vertical section and
//! dogleg severity with the minimum-curvature method.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use core::{StationId, StationInput, SurveyPoint, SurveyStation};
pub use algorithms::{compute_station, compute_trajectory, MinimumCurvature, Trajectory};
pub use processing::{summarize, TrajectoryAggregator, TrajectorySummary};
pub use validation::{
    validate_sequence, validate_station, SequenceViolation, StationValidator, StationViolation,
    TrajectoryError, TrajectoryResult,
};
pub use utils::{ConfigError, SurveyConfig};
pub use api::{JsonFormatter, SurveyReport, TextFormatter};
