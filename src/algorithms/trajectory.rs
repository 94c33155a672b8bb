//! Caller-owned ordered survey trajectory

use crate::algorithms::minimum_curvature::MinimumCurvature;
use crate::core::{StationId, StationInput, SurveyPoint, SurveyStation};
use crate::processing::summary::{TrajectoryAggregator, TrajectorySummary};
use crate::utils::config::SurveyConfig;
use crate::validation::error::{StationViolation, TrajectoryError, TrajectoryResult};
use crate::validation::station::StationValidator;

/// Ordered list of derived stations for one wellbore.
///
/// Stations are kept strictly increasing in measured depth. Editing or
/// inserting a station computes only that station against its predecessor;
/// later stations keep their derived values until [`Trajectory::recompute`]
/// is called.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    stations: Vec<SurveyStation>,
    next_id: u32,
    validator: StationValidator,
    calculator: MinimumCurvature,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SurveyConfig) -> Self {
        Self {
            stations: Vec::new(),
            next_id: 0,
            validator: StationValidator::with_config(config.clone()),
            calculator: MinimumCurvature::with_config(config),
        }
    }

    /// Validate a complete survey and compute every station in order
    pub fn from_inputs(inputs: &[StationInput]) -> TrajectoryResult<Self> {
        Self::from_inputs_with_config(inputs, SurveyConfig::default())
    }

    pub fn from_inputs_with_config(inputs: &[StationInput], config: SurveyConfig) -> TrajectoryResult<Self> {
        let mut trajectory = Self::with_config(config);

        let violations = trajectory.validator.validate_sequence(inputs);
        if !violations.is_empty() {
            log::warn!("Survey rejected with {} violation(s)", violations.len());
            return Err(TrajectoryError::InvalidSequence(violations));
        }

        for input in inputs {
            trajectory.append(input)?;
        }
        log::info!("Computed trajectory with {} stations", trajectory.len());
        Ok(trajectory)
    }

    pub fn stations(&self) -> &[SurveyStation] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, id: StationId) -> Option<&SurveyStation> {
        self.position(id).map(|index| &self.stations[index])
    }

    /// Validate a station deeper than every existing one and add it at the end
    pub fn append(&mut self, input: &StationInput) -> TrajectoryResult<StationId> {
        let id = self.claim_id(input.id)?;
        let violations = self.validator.validate_station(input, &self.stations);
        let station = self.accept(input, violations, self.stations.last(), id)?;

        self.stations.push(station);
        self.commit_id(id);
        Ok(id)
    }

    /// Validate a station and place it at its measured-depth position
    pub fn insert(&mut self, input: &StationInput) -> TrajectoryResult<StationId> {
        let id = self.claim_id(input.id)?;
        let index = match input.measured_depth {
            Some(md) if md.is_finite() => self.stations.partition_point(|s| s.measured_depth < md),
            _ => self.stations.len(),
        };

        let (before, after) = self.stations.split_at(index);
        let violations = self.validator.validate_between(input, before, after.first());
        let station = self.accept(input, violations, before.last(), id)?;

        self.stations.insert(index, station);
        self.commit_id(id);
        Ok(id)
    }

    /// Replace the raw inputs of an existing station.
    ///
    /// The new depth must stay between its neighbours. Only this station is
    /// recomputed.
    pub fn update(&mut self, id: StationId, input: &StationInput) -> TrajectoryResult<&SurveyStation> {
        let index = self.position(id).ok_or(TrajectoryError::UnknownStation(id))?;

        let before = &self.stations[..index];
        let next = self.stations.get(index + 1);
        let violations = self.validator.validate_between(input, before, next);
        let station = self.accept(input, violations, before.last(), id)?;

        self.stations[index] = station;
        Ok(&self.stations[index])
    }

    /// Remove a station; remaining identifiers are not renumbered
    pub fn remove(&mut self, id: StationId) -> TrajectoryResult<SurveyStation> {
        let index = self.position(id).ok_or(TrajectoryError::UnknownStation(id))?;
        Ok(self.stations.remove(index))
    }

    /// Recompute every station front-to-back from its raw inputs
    pub fn recompute(&mut self) -> TrajectoryResult<()> {
        let points: Vec<SurveyPoint> = self.stations.iter().map(SurveyStation::point).collect();
        let computed = self.calculator.compute_trajectory(&points)?;

        for (station, derived) in self.stations.iter_mut().zip(computed) {
            *station = SurveyStation { id: station.id, ..derived };
        }
        Ok(())
    }

    /// Summary statistics over the current stations
    pub fn summary(&self) -> Option<TrajectorySummary> {
        TrajectoryAggregator::with_config(self.calculator.config().clone()).summarize(&self.stations)
    }

    fn position(&self, id: StationId) -> Option<usize> {
        self.stations.iter().position(|s| s.id == Some(id))
    }

    fn claim_id(&self, requested: Option<StationId>) -> TrajectoryResult<StationId> {
        let id = requested.unwrap_or(StationId(self.next_id));
        // Auto ids stop advancing at u32::MAX, so they can collide too
        if self.position(id).is_some() {
            return Err(TrajectoryError::DuplicateStation(id));
        }
        Ok(id)
    }

    fn commit_id(&mut self, id: StationId) {
        self.next_id = self.next_id.max(id.0.saturating_add(1));
    }

    fn accept(
        &self,
        input: &StationInput,
        violations: Vec<StationViolation>,
        previous: Option<&SurveyStation>,
        id: StationId,
    ) -> TrajectoryResult<SurveyStation> {
        if !violations.is_empty() {
            log::warn!("Station {} rejected: {} violation(s)", id, violations.len());
            return Err(TrajectoryError::InvalidStation(violations));
        }

        let point = SurveyPoint::try_from(input).map_err(|missing| TrajectoryError::Incomplete { missing })?;
        let station = self.calculator.compute_station(&point, previous)?;
        Ok(SurveyStation { id: Some(id), ..station })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::minimum_curvature::compute_station;

    fn build_and_hold() -> Vec<StationInput> {
        vec![
            StationInput::new(0.0, 0.0, 0.0),
            StationInput::new(1000.0, 0.0, 0.0),
            StationInput::new(1500.0, 15.0, 60.0),
            StationInput::new(2000.0, 30.0, 60.0),
            StationInput::new(3000.0, 30.0, 60.0),
        ]
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut trajectory = Trajectory::new();
        let a = trajectory.append(&StationInput::new(0.0, 0.0, 0.0)).unwrap();
        let b = trajectory.append(&StationInput::new(500.0, 2.0, 10.0)).unwrap();

        assert_eq!(a, StationId(0));
        assert_eq!(b, StationId(1));
        assert_eq!(trajectory.get(b).unwrap().measured_depth, 500.0);
    }

    #[test]
    fn test_append_rejects_shallower_station() {
        let mut trajectory = Trajectory::new();
        trajectory.append(&StationInput::new(1000.0, 0.0, 0.0)).unwrap();

        let err = trajectory.append(&StationInput::new(1000.0, 5.0, 0.0)).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            TrajectoryError::InvalidStation(ref v) if v.contains(&StationViolation::DepthNotIncreasing { previous: 1000.0, current: 1000.0 })
        ));
        assert_eq!(trajectory.len(), 1);
    }

    #[test]
    fn test_from_inputs_matches_sequential_computation() {
        let trajectory = Trajectory::from_inputs(&build_and_hold()).unwrap();
        let stations = trajectory.stations();

        assert_eq!(stations.len(), 5);
        assert_eq!(stations[0].id, Some(StationId(0)));
        assert_eq!(stations[0].true_vertical_depth, 0.0);
        for pair in stations.windows(2) {
            let expected = compute_station(&pair[1].point(), Some(&pair[0])).unwrap();
            assert_eq!(pair[1].true_vertical_depth, expected.true_vertical_depth);
            assert_eq!(pair[1].northing, expected.northing);
            assert_eq!(pair[1].easting, expected.easting);
        }
    }

    #[test]
    fn test_from_inputs_reports_every_violation() {
        let inputs = vec![
            StationInput::new(100.0, 0.0, 0.0),
            StationInput::new(50.0, 200.0, 0.0),
        ];

        let err = Trajectory::from_inputs(&inputs).unwrap_err();
        let messages = err.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.starts_with("Station 2: ")));
    }

    #[test]
    fn test_insert_between_stations() {
        let mut trajectory = Trajectory::new();
        trajectory.append(&StationInput::new(0.0, 0.0, 0.0)).unwrap();
        trajectory.append(&StationInput::new(2000.0, 20.0, 90.0)).unwrap();
        let deeper_before = *trajectory.stations().last().unwrap();

        let id = trajectory.insert(&StationInput::new(1000.0, 10.0, 90.0)).unwrap();

        let depths: Vec<f64> = trajectory.stations().iter().map(|s| s.measured_depth).collect();
        assert_eq!(depths, vec![0.0, 1000.0, 2000.0]);
        assert_eq!(trajectory.stations()[1].id, Some(id));
        // Later stations are left as they were
        assert_eq!(*trajectory.stations().last().unwrap(), deeper_before);
    }

    #[test]
    fn test_insert_rejects_duplicate_depth() {
        let mut trajectory = Trajectory::from_inputs(&build_and_hold()).unwrap();
        let err = trajectory.insert(&StationInput::new(1500.0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            TrajectoryError::InvalidStation(ref v) if v.contains(&StationViolation::DepthNotBeforeNext { next: 1500.0, current: 1500.0 })
        ));
    }

    #[test]
    fn test_update_recomputes_only_edited_station() {
        let mut trajectory = Trajectory::from_inputs(&build_and_hold()).unwrap();
        let before: Vec<SurveyStation> = trajectory.stations().to_vec();

        let edited = trajectory.update(StationId(2), &StationInput::new(1500.0, 20.0, 60.0)).unwrap();
        assert_eq!(edited.inclination, 20.0);
        assert_eq!(edited.id, Some(StationId(2)));
        let expected = compute_station(&SurveyPoint::new(1500.0, 20.0, 60.0), Some(&before[1])).unwrap();
        assert_eq!(edited.true_vertical_depth, expected.true_vertical_depth);

        let after = trajectory.stations();
        assert_eq!(after[..2], before[..2]);
        assert_eq!(after[3..], before[3..]);
    }

    #[test]
    fn test_update_must_stay_between_neighbours() {
        let mut trajectory = Trajectory::from_inputs(&build_and_hold()).unwrap();
        let err = trajectory.update(StationId(2), &StationInput::new(2500.0, 15.0, 60.0)).unwrap_err();
        assert!(err.is_validation());

        let err = trajectory.update(StationId(99), &StationInput::new(2500.0, 15.0, 60.0)).unwrap_err();
        assert_eq!(err, TrajectoryError::UnknownStation(StationId(99)));
    }

    #[test]
    fn test_remove_keeps_remaining_ids() {
        let mut trajectory = Trajectory::from_inputs(&build_and_hold()).unwrap();
        let removed = trajectory.remove(StationId(1)).unwrap();
        assert_eq!(removed.measured_depth, 1000.0);

        let ids: Vec<Option<StationId>> = trajectory.stations().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![Some(StationId(0)), Some(StationId(2)), Some(StationId(3)), Some(StationId(4))]);
        assert!(trajectory.remove(StationId(1)).is_err());

        let next = trajectory.append(&StationInput::new(3500.0, 30.0, 60.0)).unwrap();
        assert_eq!(next, StationId(5));
    }

    #[test]
    fn test_recompute_restores_consistency() {
        let mut trajectory = Trajectory::from_inputs(&build_and_hold()).unwrap();
        trajectory.update(StationId(2), &StationInput::new(1500.0, 20.0, 60.0)).unwrap();
        trajectory.recompute().unwrap();

        let fresh = Trajectory::from_inputs(&[
            StationInput::new(0.0, 0.0, 0.0),
            StationInput::new(1000.0, 0.0, 0.0),
            StationInput::new(1500.0, 20.0, 60.0),
            StationInput::new(2000.0, 30.0, 60.0),
            StationInput::new(3000.0, 30.0, 60.0),
        ])
        .unwrap();
        assert_eq!(trajectory.stations(), fresh.stations());
    }

    #[test]
    fn test_requested_ids() {
        let mut trajectory = Trajectory::new();
        let input = StationInput { id: Some(StationId(10)), ..StationInput::new(0.0, 0.0, 0.0) };
        assert_eq!(trajectory.append(&input).unwrap(), StationId(10));

        let duplicate = StationInput { id: Some(StationId(10)), ..StationInput::new(100.0, 0.0, 0.0) };
        assert_eq!(trajectory.append(&duplicate).unwrap_err(), TrajectoryError::DuplicateStation(StationId(10)));

        assert_eq!(trajectory.append(&StationInput::new(100.0, 0.0, 0.0)).unwrap(), StationId(11));
    }

    #[test]
    fn test_auto_id_never_reuses_max_id() {
        let mut trajectory = Trajectory::new();
        let input = StationInput { id: Some(StationId(u32::MAX)), ..StationInput::new(0.0, 0.0, 0.0) };
        assert_eq!(trajectory.append(&input).unwrap(), StationId(u32::MAX));

        let err = trajectory.append(&StationInput::new(10.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, TrajectoryError::DuplicateStation(StationId(u32::MAX)));
        let err = trajectory.insert(&StationInput::new(10.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, TrajectoryError::DuplicateStation(StationId(u32::MAX)));
        assert_eq!(trajectory.len(), 1);

        // An explicit free id still works
        let input = StationInput { id: Some(StationId(3)), ..StationInput::new(10.0, 0.0, 0.0) };
        assert_eq!(trajectory.append(&input).unwrap(), StationId(3));
    }

    #[test]
    fn test_summary_of_empty_trajectory() {
        assert!(Trajectory::new().summary().is_none());
    }

    #[test]
    fn test_valid_surveys_always_compute_and_summarize() {
        // Deterministic LCG so every run sees the same surveys
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 11) as f64 / (1u64 << 53) as f64
        };

        for _ in 0..200 {
            let count = 2 + (next() * 30.0) as usize;
            let mut md = next() * 100.0;
            let inputs: Vec<StationInput> = (0..count)
                .map(|_| {
                    md += 0.01 + next() * 250.0;
                    StationInput::new(md, next() * 180.0, next() * 360.0)
                })
                .collect();

            assert!(StationValidator::new().validate_sequence(&inputs).is_empty());
            let trajectory = Trajectory::from_inputs(&inputs).unwrap();
            let summary = trajectory.summary().unwrap();

            assert_eq!(summary.total_md, md);
            assert_eq!(summary.station_count, count);
            assert!(trajectory.stations().iter().all(|s| s.true_vertical_depth.is_finite()
                && s.northing.is_finite()
                && s.easting.is_finite()
                && s.dog_leg_severity >= 0.0));
        }
    }
}
