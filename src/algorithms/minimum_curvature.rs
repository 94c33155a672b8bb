//! Minimum-curvature survey calculation
//!
//! Derives true vertical depth, northing, easting, vertical section and
//! dogleg severity for a station from its raw inputs and the fully derived
//! station before it. Angles are degrees at the boundary and radians inside.

use crate::core::{SurveyPoint, SurveyStation};
use crate::utils::config::SurveyConfig;
use crate::validation::error::{TrajectoryError, TrajectoryResult};
use nalgebra::Vector2;

/// Minimum-curvature calculator
#[derive(Debug, Clone, Default)]
pub struct MinimumCurvature {
    config: SurveyConfig,
}

impl MinimumCurvature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SurveyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Compute the derived station for `candidate` given its predecessor.
    ///
    /// Without a predecessor the station is projected in a straight line
    /// from the surface origin. With one, `candidate` must be strictly
    /// deeper; otherwise `NonIncreasingDepth` is returned.
    pub fn compute_station(
        &self,
        candidate: &SurveyPoint,
        previous: Option<&SurveyStation>,
    ) -> TrajectoryResult<SurveyStation> {
        let station = match previous {
            None => self.from_origin(candidate),
            Some(prev) => self.from_previous(candidate, prev)?,
        };

        log::debug!(
            "MD {:.2}: TVD={:.4} N={:.4} E={:.4} VS={:.4} DLS={:.4}",
            station.measured_depth,
            station.true_vertical_depth,
            station.northing,
            station.easting,
            station.vertical_section,
            station.dog_leg_severity
        );

        Ok(station)
    }

    /// Compute every station front-to-back, each against the previous result
    pub fn compute_trajectory(&self, points: &[SurveyPoint]) -> TrajectoryResult<Vec<SurveyStation>> {
        let mut stations: Vec<SurveyStation> = Vec::with_capacity(points.len());
        for point in points {
            let station = self.compute_station(point, stations.last())?;
            stations.push(station);
        }
        Ok(stations)
    }

    fn from_origin(&self, candidate: &SurveyPoint) -> SurveyStation {
        let md = candidate.measured_depth;
        let horizontal = horizontal_direction(candidate) * md;

        SurveyStation {
            id: None,
            measured_depth: md,
            inclination: candidate.inclination,
            azimuth: candidate.azimuth,
            true_vertical_depth: md * candidate.inclination_rad().cos(),
            northing: horizontal.x,
            easting: horizontal.y,
            vertical_section: 0.0,
            dog_leg_severity: 0.0,
        }
    }

    fn from_previous(&self, candidate: &SurveyPoint, prev: &SurveyStation) -> TrajectoryResult<SurveyStation> {
        let delta_md = candidate.measured_depth - prev.measured_depth;
        // Also rejects NaN
        if !(delta_md > 0.0) {
            return Err(TrajectoryError::NonIncreasingDepth {
                previous: prev.measured_depth,
                current: candidate.measured_depth,
            });
        }

        let prev_point = prev.point();
        let beta = dogleg_angle(&prev_point, candidate);
        let dls = beta.to_degrees() / (delta_md / self.config.course_length);
        let rf = ratio_factor(beta, self.config.collinear_tolerance);
        let half_course = delta_md / 2.0;

        let tvd = prev.true_vertical_depth
            + half_course * (prev_point.inclination_rad().cos() + candidate.inclination_rad().cos());

        let delta = (horizontal_direction(&prev_point) + horizontal_direction(candidate)) * half_course * rf;
        let position = Vector2::new(prev.northing, prev.easting) + delta;

        Ok(SurveyStation {
            id: None,
            measured_depth: candidate.measured_depth,
            inclination: candidate.inclination,
            azimuth: candidate.azimuth,
            true_vertical_depth: tvd,
            northing: position.x,
            easting: position.y,
            vertical_section: position.norm(),
            dog_leg_severity: dls,
        })
    }
}

/// Dogleg angle between two stations in radians, within [0, pi].
///
/// Equal to `acos(cos i1 cos i2 + sin i1 sin i2 cos(a2 - a1))`, evaluated in
/// half-angle form so identical directions give exactly zero.
pub fn dogleg_angle(from: &SurveyPoint, to: &SurveyPoint) -> f64 {
    let (i1, i2) = (from.inclination_rad(), to.inclination_rad());
    let half_inc = ((i2 - i1) / 2.0).sin();
    let half_az = ((to.azimuth_rad() - from.azimuth_rad()) / 2.0).sin();

    let h = half_inc * half_inc + i1.sin() * i2.sin() * half_az * half_az;
    2.0 * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Minimum-curvature ratio factor; 1 at or below `tolerance`
pub fn ratio_factor(beta: f64, tolerance: f64) -> f64 {
    if beta <= tolerance {
        1.0
    } else {
        (2.0 / beta) * (beta / 2.0).tan()
    }
}

/// Horizontal (north, east) components of the unit tangent at a station
fn horizontal_direction(point: &SurveyPoint) -> Vector2<f64> {
    let (inc, az) = (point.inclination_rad(), point.azimuth_rad());
    Vector2::new(inc.sin() * az.cos(), inc.sin() * az.sin())
}

/// Compute a station with default configuration
pub fn compute_station(candidate: &SurveyPoint, previous: Option<&SurveyStation>) -> TrajectoryResult<SurveyStation> {
    MinimumCurvature::new().compute_station(candidate, previous)
}

/// Compute an ordered list of stations with default configuration
pub fn compute_trajectory(points: &[SurveyPoint]) -> TrajectoryResult<Vec<SurveyStation>> {
    MinimumCurvature::new().compute_trajectory(points)
}
