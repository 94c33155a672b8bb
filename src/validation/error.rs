use crate::core::StationId;
use std::fmt;
use thiserror::Error;

/// Raw station field, named the way violation messages refer to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MeasuredDepth,
    Inclination,
    Azimuth,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::MeasuredDepth => write!(f, "Measured depth"),
            Field::Inclination => write!(f, "Inclination"),
            Field::Azimuth => write!(f, "Azimuth"),
        }
    }
}

/// A user-facing reason a candidate station cannot be accepted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StationViolation {
    #[error("{0} is required")]
    Missing(Field),

    #[error("{0} must be a finite number")]
    NotFinite(Field),

    #[error("Measured depth must be greater than or equal to 0 (got {0})")]
    NegativeDepth(f64),

    #[error("Inclination must be between 0 and 180 degrees (got {0})")]
    InclinationOutOfRange(f64),

    #[error("Azimuth must be between 0 and 360 degrees (got {0})")]
    AzimuthOutOfRange(f64),

    #[error("Measured depth must be greater than previous station's measured depth ({previous}), got {current}")]
    DepthNotIncreasing { previous: f64, current: f64 },

    #[error("Measured depth must be less than next station's measured depth ({next}), got {current}")]
    DepthNotBeforeNext { next: f64, current: f64 },
}

/// Violation found while checking a whole station sequence
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceViolation {
    #[error("Trajectory must contain at least {required} stations (got {actual})")]
    TooFewStations { required: usize, actual: usize },

    /// `position` is 1-based
    #[error("Station {position}: {violation}")]
    Station {
        position: usize,
        violation: StationViolation,
    },
}

/// Errors returned by trajectory operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    #[error("Station rejected: {}", join(.0))]
    InvalidStation(Vec<StationViolation>),

    #[error("Survey rejected: {}", join(.0))]
    InvalidSequence(Vec<SequenceViolation>),

    /// Calculator invoked without the validator's depth-order guarantee
    #[error("Measured depth {current} does not exceed previous station depth {previous}")]
    NonIncreasingDepth { previous: f64, current: f64 },

    #[error("Station is missing required fields: {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("Unknown station {0}")]
    UnknownStation(StationId),

    #[error("Station {0} already exists")]
    DuplicateStation(StationId),
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

impl TrajectoryError {
    /// Whether the error carries user-facing validation messages
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TrajectoryError::InvalidStation(_)
                | TrajectoryError::InvalidSequence(_)
                | TrajectoryError::Incomplete { .. }
        )
    }

    /// Human-readable messages, one per underlying problem
    pub fn messages(&self) -> Vec<String> {
        match self {
            TrajectoryError::InvalidStation(violations) => violations.iter().map(ToString::to_string).collect(),
            TrajectoryError::InvalidSequence(violations) => violations.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
