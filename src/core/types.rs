//! Survey station data types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a station within one trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Raw candidate station as entered by a user or bulk import.
///
/// Fields are optional so that a missing value can be told apart from a
/// legitimate zero. Angles are in degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StationId>,
    #[serde(default)]
    pub measured_depth: Option<f64>,
    #[serde(default)]
    pub inclination: Option<f64>,
    #[serde(default)]
    pub azimuth: Option<f64>,
}

impl StationInput {
    pub fn new(measured_depth: f64, inclination: f64, azimuth: f64) -> Self {
        Self {
            id: None,
            measured_depth: Some(measured_depth),
            inclination: Some(inclination),
            azimuth: Some(azimuth),
        }
    }

    /// Names of the required raw fields that are absent
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.measured_depth.is_none() {
            missing.push("measured_depth");
        }
        if self.inclination.is_none() {
            missing.push("inclination");
        }
        if self.azimuth.is_none() {
            missing.push("azimuth");
        }
        missing
    }
}

/// Raw station with every required field present (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyPoint {
    pub measured_depth: f64,
    pub inclination: f64,
    pub azimuth: f64,
}

impl SurveyPoint {
    pub fn new(measured_depth: f64, inclination: f64, azimuth: f64) -> Self {
        Self { measured_depth, inclination, azimuth }
    }

    pub fn inclination_rad(&self) -> f64 {
        self.inclination.to_radians()
    }

    pub fn azimuth_rad(&self) -> f64 {
        self.azimuth.to_radians()
    }
}

impl TryFrom<&StationInput> for SurveyPoint {
    type Error = Vec<&'static str>;

    fn try_from(input: &StationInput) -> Result<Self, Self::Error> {
        match (input.measured_depth, input.inclination, input.azimuth) {
            (Some(measured_depth), Some(inclination), Some(azimuth)) => {
                Ok(SurveyPoint { measured_depth, inclination, azimuth })
            }
            _ => Err(input.missing_fields()),
        }
    }
}

/// Fully derived survey station.
///
/// Lengths share the unit of `measured_depth`; angles are degrees and
/// `dog_leg_severity` is degrees per course length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyStation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StationId>,
    pub measured_depth: f64,
    pub inclination: f64,
    pub azimuth: f64,
    pub true_vertical_depth: f64,
    pub northing: f64,
    pub easting: f64,
    pub vertical_section: f64,
    pub dog_leg_severity: f64,
}

impl SurveyStation {
    /// Raw inputs of this station
    pub fn point(&self) -> SurveyPoint {
        SurveyPoint::new(self.measured_depth, self.inclination, self.azimuth)
    }
}
