//! Station validation and error taxonomy

pub mod error;
pub mod station;

pub use error::{Field, SequenceViolation, StationViolation, TrajectoryError, TrajectoryResult};
pub use station::{validate_sequence, validate_station, StationValidator};
