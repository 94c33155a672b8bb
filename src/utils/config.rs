use crate::core::{DEFAULT_COLLINEAR_TOLERANCE, DEFAULT_COURSE_LENGTH, MIN_TRAJECTORY_STATIONS};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Survey engine parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Length that dogleg severity and build rate are normalized to
    /// (100 for deg/100 ft, 30 for deg/30 m)
    pub course_length: f64,
    /// Dogleg angle (radians) below which the ratio factor is taken as 1
    pub collinear_tolerance: f64,
    /// Minimum station count for a complete trajectory
    pub min_sequence_stations: usize,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            course_length: DEFAULT_COURSE_LENGTH,
            collinear_tolerance: DEFAULT_COLLINEAR_TOLERANCE,
            min_sequence_stations: MIN_TRAJECTORY_STATIONS,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Failed to access config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SurveyConfig {
    /// Load configuration from a JSON file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;

        let config: SurveyConfig = serde_json::from_str(&content)?;
        if let Some(error) = config.validate().into_iter().next() {
            return Err(error);
        }

        log::debug!("Loaded survey config from '{}': {:?}", path_str, config);
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_string_lossy().to_string(),
            source,
        })
    }

    /// Check every parameter, returning all problems found
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(self.course_length.is_finite() && self.course_length > 0.0) {
            errors.push(ConfigError::InvalidParameter {
                parameter: "course_length",
                value: self.course_length.to_string(),
                reason: "Course length must be a positive length",
            });
        }

        if !(self.collinear_tolerance >= 0.0 && self.collinear_tolerance < PI) {
            errors.push(ConfigError::InvalidParameter {
                parameter: "collinear_tolerance",
                value: self.collinear_tolerance.to_string(),
                reason: "Collinear tolerance must be in [0, pi) radians",
            });
        }

        if self.min_sequence_stations == 0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "min_sequence_stations",
                value: self.min_sequence_stations.to_string(),
                reason: "A trajectory needs at least one station",
            });
        }

        errors
    }

    pub fn with_course_length(mut self, course_length: f64) -> Self {
        self.course_length = course_length;
        self
    }

    pub fn with_collinear_tolerance(mut self, tolerance: f64) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }

    pub fn with_min_sequence_stations(mut self, count: usize) -> Self {
        self.min_sequence_stations = count;
        self
    }
}
