use crate::core::SurveyStation;
use crate::utils::config::SurveyConfig;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Roll-up metrics for an ordered, fully derived trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    pub station_count: usize,
    /// Measured depth of the last station
    pub total_md: f64,
    /// True vertical depth of the last station
    pub total_tvd: f64,
    /// Horizontal distance of the last station from the origin
    pub total_displacement: f64,
    /// Direction of the last station from the origin, degrees in [0, 360)
    pub vs_azimuth: f64,
    pub max_inclination: f64,
    pub max_dls: f64,
    /// Mean inclination change per course length over consecutive pairs;
    /// `None` with fewer than two stations
    pub avg_build_rate: Option<f64>,
    /// `total_tvd / total_displacement`; `None` for a purely vertical well
    pub kd_ratio: Option<f64>,
}

/// Computes [`TrajectorySummary`] on demand; holds no trajectory state
#[derive(Debug, Clone, Default)]
pub struct TrajectoryAggregator {
    config: SurveyConfig,
}

impl TrajectoryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SurveyConfig) -> Self {
        Self { config }
    }

    /// Summarize `stations`, or `None` when there are none
    pub fn summarize(&self, stations: &[SurveyStation]) -> Option<TrajectorySummary> {
        let last = stations.last()?;

        let total_displacement = Vector2::new(last.northing, last.easting).norm();

        let max_inclination = stations.iter().map(|s| s.inclination).fold(f64::NEG_INFINITY, f64::max);
        let max_dls = stations.iter().map(|s| s.dog_leg_severity).fold(f64::NEG_INFINITY, f64::max);

        let kd_ratio = if total_displacement > 0.0 {
            Some(last.true_vertical_depth / total_displacement)
        } else {
            None
        };

        Some(TrajectorySummary {
            station_count: stations.len(),
            total_md: last.measured_depth,
            total_tvd: last.true_vertical_depth,
            total_displacement,
            vs_azimuth: normalize_azimuth(last.easting.atan2(last.northing).to_degrees()),
            max_inclination,
            max_dls,
            avg_build_rate: self.average_build_rate(stations),
            kd_ratio,
        })
    }

    fn average_build_rate(&self, stations: &[SurveyStation]) -> Option<f64> {
        let rates: Vec<f64> = stations
            .windows(2)
            .filter_map(|pair| {
                let delta_md = pair[1].measured_depth - pair[0].measured_depth;
                // Pairs without positive course length have no defined rate
                (delta_md > 0.0).then(|| (pair[1].inclination - pair[0].inclination) / delta_md * self.config.course_length)
            })
            .collect();

        if rates.is_empty() {
            None
        } else {
            Some(rates.iter().sum::<f64>() / rates.len() as f64)
        }
    }
}

/// Map an azimuth in degrees to [0, 360)
fn normalize_azimuth(degrees: f64) -> f64 {
    let mut az = degrees;
    if az < 0.0 {
        az += 360.0;
    }
    if az >= 360.0 {
        az -= 360.0;
    }
    // Drops a negative zero
    az + 0.0
}

/// Summarize with default configuration
pub fn summarize(stations: &[SurveyStation]) -> Option<TrajectorySummary> {
    TrajectoryAggregator::new().summarize(stations)
}
