use crate::core::{StationInput, SurveyStation, MAX_AZIMUTH_DEG, MAX_INCLINATION_DEG};
use crate::utils::config::SurveyConfig;
use crate::validation::error::{Field, SequenceViolation, StationViolation};

/// Validator for candidate survey stations.
///
/// Checks are pure: inputs are never modified and every violation is
/// collected rather than stopping at the first.
#[derive(Debug, Clone, Default)]
pub struct StationValidator {
    config: SurveyConfig,
}

impl StationValidator {
    /// Create a validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom configuration
    pub fn with_config(config: SurveyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Validate a candidate against the accepted stations that precede it
    pub fn validate_station(&self, candidate: &StationInput, preceding: &[SurveyStation]) -> Vec<StationViolation> {
        let previous_md = preceding.last().map(|station| station.measured_depth);
        self.check(candidate, previous_md, None)
    }

    /// Validate a candidate that will sit between `preceding` and `next`
    pub fn validate_between(
        &self,
        candidate: &StationInput,
        preceding: &[SurveyStation],
        next: Option<&SurveyStation>,
    ) -> Vec<StationViolation> {
        let previous_md = preceding.last().map(|station| station.measured_depth);
        self.check(candidate, previous_md, next.map(|station| station.measured_depth))
    }

    /// Validate a whole ordered list of raw stations.
    ///
    /// Each station is checked against the one before it; violations are
    /// prefixed with their 1-based position.
    pub fn validate_sequence(&self, stations: &[StationInput]) -> Vec<SequenceViolation> {
        let mut violations = Vec::new();

        let required = self.config.min_sequence_stations;
        if stations.len() < required {
            violations.push(SequenceViolation::TooFewStations {
                required,
                actual: stations.len(),
            });
        }

        for (index, station) in stations.iter().enumerate() {
            let previous_md = index
                .checked_sub(1)
                .and_then(|prev| stations[prev].measured_depth);

            violations.extend(
                self.check(station, previous_md, None)
                    .into_iter()
                    .map(|violation| SequenceViolation::Station {
                        position: index + 1,
                        violation,
                    }),
            );
        }

        violations
    }

    fn check(&self, candidate: &StationInput, previous_md: Option<f64>, next_md: Option<f64>) -> Vec<StationViolation> {
        let mut violations = Vec::new();

        let depth = required(candidate.measured_depth, Field::MeasuredDepth, &mut violations);
        let inclination = required(candidate.inclination, Field::Inclination, &mut violations);
        let azimuth = required(candidate.azimuth, Field::Azimuth, &mut violations);

        if let Some(md) = depth {
            if md < 0.0 {
                violations.push(StationViolation::NegativeDepth(md));
            }

            // Ordering is only meaningful against a known, finite neighbour
            if let Some(previous) = previous_md.filter(|md| md.is_finite()) {
                if md <= previous {
                    violations.push(StationViolation::DepthNotIncreasing { previous, current: md });
                }
            }
            if let Some(next) = next_md.filter(|md| md.is_finite()) {
                if md >= next {
                    violations.push(StationViolation::DepthNotBeforeNext { next, current: md });
                }
            }
        }

        if let Some(inc) = inclination {
            if !(0.0..=MAX_INCLINATION_DEG).contains(&inc) {
                violations.push(StationViolation::InclinationOutOfRange(inc));
            }
        }

        if let Some(az) = azimuth {
            if !(0.0..=MAX_AZIMUTH_DEG).contains(&az) {
                violations.push(StationViolation::AzimuthOutOfRange(az));
            }
        }

        violations
    }
}

/// Present, finite value of a required field; records a violation otherwise
fn required(value: Option<f64>, field: Field, violations: &mut Vec<StationViolation>) -> Option<f64> {
    match value {
        None => {
            violations.push(StationViolation::Missing(field));
            None
        }
        Some(v) if !v.is_finite() => {
            violations.push(StationViolation::NotFinite(field));
            None
        }
        Some(v) => Some(v),
    }
}

/// Validate a candidate station with default configuration
pub fn validate_station(candidate: &StationInput, preceding: &[SurveyStation]) -> Vec<StationViolation> {
    StationValidator::new().validate_station(candidate, preceding)
}

/// Validate an ordered station list with default configuration
pub fn validate_sequence(stations: &[StationInput]) -> Vec<SequenceViolation> {
    StationValidator::new().validate_sequence(stations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(md: f64) -> SurveyStation {
        SurveyStation {
            id: None,
            measured_depth: md,
            inclination: 0.0,
            azimuth: 0.0,
            true_vertical_depth: md,
            northing: 0.0,
            easting: 0.0,
            vertical_section: 0.0,
            dog_leg_severity: 0.0,
        }
    }

    #[test]
    fn test_valid_first_station() {
        let violations = validate_station(&StationInput::new(0.0, 0.0, 0.0), &[]);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let violations = validate_station(&StationInput::default(), &[]);
        assert_eq!(
            violations,
            vec![
                StationViolation::Missing(Field::MeasuredDepth),
                StationViolation::Missing(Field::Inclination),
                StationViolation::Missing(Field::Azimuth),
            ]
        );
        assert_eq!(violations[0].to_string(), "Measured depth is required");
    }

    #[test]
    fn test_range_rejection() {
        let violations = validate_station(&StationInput::new(500.0, 200.0, 90.0), &[]);
        assert_eq!(violations, vec![StationViolation::InclinationOutOfRange(200.0)]);

        let violations = validate_station(&StationInput::new(500.0, 45.0, 400.0), &[]);
        assert_eq!(violations, vec![StationViolation::AzimuthOutOfRange(400.0)]);

        // Reported even when other fields are bad too
        let violations = validate_station(&StationInput::new(-1.0, 200.0, 400.0), &[accepted(10.0)]);
        assert_eq!(violations.len(), 4);
        assert!(violations.contains(&StationViolation::InclinationOutOfRange(200.0)));
        assert!(violations.contains(&StationViolation::AzimuthOutOfRange(400.0)));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(validate_station(&StationInput::new(100.0, 180.0, 360.0), &[]).is_empty());
        assert!(validate_station(&StationInput::new(100.0, -0.1, 0.0), &[]).len() == 1);
    }

    #[test]
    fn test_monotonic_depth_rejection() {
        let preceding = vec![accepted(500.0), accepted(1000.0)];

        for md in [1000.0, 999.9, 0.0] {
            let violations = validate_station(&StationInput::new(md, 10.0, 10.0), &preceding);
            assert!(violations.contains(&StationViolation::DepthNotIncreasing { previous: 1000.0, current: md }));
            assert!(violations.iter().any(|v| v.to_string().contains("greater than previous station")));
        }

        assert!(validate_station(&StationInput::new(1000.5, 10.0, 10.0), &preceding).is_empty());
    }

    #[test]
    fn test_non_finite_values() {
        let violations = validate_station(&StationInput::new(f64::NAN, f64::INFINITY, 0.0), &[accepted(10.0)]);
        assert_eq!(
            violations,
            vec![
                StationViolation::NotFinite(Field::MeasuredDepth),
                StationViolation::NotFinite(Field::Inclination),
            ]
        );
    }

    #[test]
    fn test_validate_between_checks_next_station() {
        let validator = StationValidator::new();
        let next = accepted(2000.0);

        let violations = validator.validate_between(&StationInput::new(2000.0, 5.0, 5.0), &[accepted(1000.0)], Some(&next));
        assert_eq!(violations, vec![StationViolation::DepthNotBeforeNext { next: 2000.0, current: 2000.0 }]);

        assert!(validator
            .validate_between(&StationInput::new(1500.0, 5.0, 5.0), &[accepted(1000.0)], Some(&next))
            .is_empty());
    }

    #[test]
    fn test_sequence_requires_two_stations() {
        let violations = validate_sequence(&[StationInput::new(100.0, 0.0, 0.0)]);
        assert_eq!(violations, vec![SequenceViolation::TooFewStations { required: 2, actual: 1 }]);
        assert!(violations[0].to_string().contains("at least 2 stations"));

        let violations = validate_sequence(&[]);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_sequence_violations_are_positioned() {
        let stations = vec![
            StationInput::new(0.0, 0.0, 0.0),
            StationInput::new(1000.0, 10.0, 45.0),
            StationInput::new(900.0, 190.0, 45.0),
        ];

        let violations = validate_sequence(&stations);
        let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.starts_with("Station 3: ")));
    }

    #[test]
    fn test_sequence_skips_order_check_after_missing_depth() {
        let stations = vec![
            StationInput::new(100.0, 0.0, 0.0),
            StationInput { measured_depth: None, ..StationInput::new(0.0, 1.0, 1.0) },
            StationInput::new(50.0, 2.0, 2.0),
        ];

        let violations = validate_sequence(&stations);
        assert_eq!(
            violations,
            vec![SequenceViolation::Station {
                position: 2,
                violation: StationViolation::Missing(Field::MeasuredDepth),
            }]
        );
    }

    #[test]
    fn test_custom_minimum_station_count() {
        let validator = StationValidator::with_config(SurveyConfig::default().with_min_sequence_stations(1));
        assert!(validator.validate_sequence(&[StationInput::new(100.0, 0.0, 0.0)]).is_empty());
    }
}
