// ABOUTME: Equivalence scoring with load-equivalence (strength) and pace-degradation (cardio) models
// ABOUTME: Maps records to one comparable scalar and projects magnitudes to other ordering values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! Equivalence Scorer
//!
//! One scalar per record so that personal bests at different rep counts or
//! distances can be ranked against each other.
//!
//! - **Strength**: `score = L` for a single rep, otherwise `L x (1 + R / 30)`.
//!   Zero load scores zero.
//! - **Cardio**: `P = P0 x (1 + 0.05 x (D / D0 - 1))`, the pace expected at
//!   distance `D` from a reference pace `P0` held over `D0`. Scoring a record
//!   against itself yields its own pace, so cardio scores are lower-is-better
//!   and must be compared through [`Family::normalize`].

use kaiserlift_core::constants::{cardio::PACE_DEGRADATION_PER_RATIO, strength};
use kaiserlift_core::errors::{AppError, AppResult};
use kaiserlift_core::models::{Family, PerformanceRecord};
use serde_json::json;

/// Score a record with the formula of `family`
///
/// # Errors
///
/// Returns `AppError::InvalidRecord` if the record is outside the formula's
/// domain: non-finite values, non-positive repetitions or distance, negative
/// load, or non-positive pace.
pub fn score_equivalence(record: &PerformanceRecord, family: Family) -> AppResult<f64> {
    match family {
        Family::Strength => load_equivalence(record.magnitude, record.ordering)
            .map_err(|e| e.with_resource_id(record.activity.clone())),
        Family::Cardio => pace_at_distance(record.magnitude, record.ordering, record.ordering)
            .map_err(|e| e.with_resource_id(record.activity.clone())),
    }
}

/// Project the magnitude of `reference` to another ordering-axis value
///
/// Strength inverts the load-equivalence curve (the load expected for
/// `target_ordering` reps at the same equivalence); cardio applies the pace
/// degradation model from the reference distance.
///
/// # Errors
///
/// Returns `AppError::InvalidRecord` if the reference cannot be scored or the
/// target ordering is non-positive.
pub fn estimate_magnitude_at_ordering(
    reference: &PerformanceRecord,
    target_ordering: f64,
    family: Family,
) -> AppResult<f64> {
    let estimate = match family {
        Family::Strength => load_equivalence(reference.magnitude, reference.ordering)
            .and_then(|one_rm| load_at_reps(one_rm, target_ordering)),
        Family::Cardio => {
            pace_at_distance(reference.magnitude, reference.ordering, target_ordering)
        }
    };
    estimate.map_err(|e| e.with_resource_id(reference.activity.clone()))
}

/// Load-equivalence of `load` lifted for `reps` repetitions
///
/// # Errors
///
/// Returns `AppError::InvalidRecord` for non-finite input, `reps <= 0`, or
/// `load < 0`.
pub fn load_equivalence(load: f64, reps: f64) -> AppResult<f64> {
    if !load.is_finite() || !reps.is_finite() {
        return Err(AppError::invalid_record("Load and reps must be finite numbers")
            .with_details(json!({ "load": load.to_string(), "reps": reps.to_string() })));
    }
    if reps <= 0.0 {
        return Err(AppError::invalid_record(format!(
            "Reps must be positive, got {reps}"
        )));
    }
    if load < 0.0 {
        return Err(AppError::invalid_record(format!(
            "Load must be non-negative, got {load}"
        )));
    }

    if load <= 0.0 {
        return Ok(0.0);
    }
    if is_single_rep(reps) {
        return Ok(load);
    }

    Ok(load * (1.0 + reps / strength::EQUIVALENCE_REP_DIVISOR))
}

/// Load expected for `reps` repetitions at a given load-equivalence
///
/// # Errors
///
/// Returns `AppError::InvalidRecord` for non-finite input, `reps <= 0`, or a
/// negative equivalence.
pub fn load_at_reps(one_rm: f64, reps: f64) -> AppResult<f64> {
    if !one_rm.is_finite() || !reps.is_finite() || reps <= 0.0 || one_rm < 0.0 {
        return Err(AppError::invalid_record(format!(
            "Cannot estimate load for {reps} reps from equivalence {one_rm}"
        )));
    }

    if one_rm <= 0.0 {
        return Ok(0.0);
    }
    if is_single_rep(reps) {
        return Ok(one_rm);
    }

    Ok(one_rm / (1.0 + reps / strength::EQUIVALENCE_REP_DIVISOR))
}

/// Pace expected at `target_distance` given `reference_pace` over `reference_distance`
///
/// # Errors
///
/// Returns `AppError::InvalidRecord` for non-finite input, non-positive
/// distances, or a non-positive reference pace.
pub fn pace_at_distance(
    reference_pace: f64,
    reference_distance: f64,
    target_distance: f64,
) -> AppResult<f64> {
    if !reference_pace.is_finite() || !reference_distance.is_finite() || !target_distance.is_finite()
    {
        return Err(AppError::invalid_record(
            "Pace and distances must be finite numbers",
        ));
    }
    if reference_distance <= 0.0 {
        return Err(AppError::invalid_record(format!(
            "Reference distance must be positive, got {reference_distance}"
        )));
    }
    if target_distance <= 0.0 {
        return Err(AppError::invalid_record(format!(
            "Target distance must be positive, got {target_distance}"
        )));
    }
    if reference_pace <= 0.0 {
        return Err(AppError::invalid_record(format!(
            "Pace must be positive, got {reference_pace}"
        )));
    }

    let ratio = target_distance / reference_distance;
    Ok(reference_pace * PACE_DEGRADATION_PER_RATIO.mul_add(ratio - 1.0, 1.0))
}

fn is_single_rep(reps: f64) -> bool {
    (reps - strength::SINGLE_REP).abs() < f64::EPSILON
}

/// Family-dispatched scoring, `Family::Strength.score_equivalence(&record)`
pub trait FamilyEquivalence {
    /// Score `record` with this family's formula
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidRecord` if the record cannot be scored.
    fn score_equivalence(&self, record: &PerformanceRecord) -> AppResult<f64>;
}

impl FamilyEquivalence for Family {
    fn score_equivalence(&self, record: &PerformanceRecord) -> AppResult<f64> {
        score_equivalence(record, *self)
    }
}

/// Convenience scoring on a record's own family
pub trait EquivalenceExt {
    /// Equivalence score using the record's own family
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidRecord` if the record cannot be scored.
    fn equivalence_score(&self) -> AppResult<f64>;

    /// Equivalence score on the higher-is-better scale
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidRecord` if the record cannot be scored.
    fn normalized_equivalence(&self) -> AppResult<f64>;
}

impl EquivalenceExt for PerformanceRecord {
    fn equivalence_score(&self) -> AppResult<f64> {
        score_equivalence(self, self.family)
    }

    fn normalized_equivalence(&self) -> AppResult<f64> {
        Ok(self.family.normalize(self.equivalence_score()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaiserlift_core::errors::ErrorCode;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_strength_scores() {
        assert!(close(load_equivalence(100.0, 1.0).unwrap(), 100.0));
        assert!(close(load_equivalence(0.0, 5.0).unwrap(), 0.0));
        assert!(close(load_equivalence(100.0, 30.0).unwrap(), 200.0));
        assert!(close(load_equivalence(1.0, 15.0).unwrap(), 1.5));
    }

    #[test]
    fn test_strength_invalid() {
        let zero_reps = load_equivalence(100.0, 0.0).unwrap_err();
        assert_eq!(zero_reps.code, ErrorCode::InvalidRecord);
        assert!(load_equivalence(-5.0, 3.0).is_err());
        assert!(load_equivalence(f64::NAN, 3.0).is_err());
        assert!(load_equivalence(0.0, -1.0).is_err());
    }

    #[test]
    fn test_inverse_load_equivalence() {
        let load = load_at_reps(200.0, 4.0).unwrap();
        assert!(close(load, 176.470_588_235_294_12));
        assert!(close(load_equivalence(load, 4.0).unwrap(), 200.0));
        assert!(close(load_at_reps(200.0, 1.0).unwrap(), 200.0));
        assert!(close(load_at_reps(0.0, 8.0).unwrap(), 0.0));
    }

    #[test]
    fn test_cardio_degradation() {
        assert!(close(pace_at_distance(570.0, 5.0, 10.0).unwrap(), 598.5));
        assert!(close(pace_at_distance(570.0, 5.0, 5.0).unwrap(), 570.0));
        assert!(pace_at_distance(570.0, 5.0, 2.5).unwrap() < 570.0);
        assert!(pace_at_distance(570.0, 0.0, 2.5).is_err());
        assert!(pace_at_distance(-1.0, 5.0, 2.5).is_err());
    }

    #[test]
    fn test_score_record_against_itself() {
        let run = PerformanceRecord::cardio("Running", 5.0, 570.0);
        assert!(close(run.equivalence_score().unwrap(), 570.0));
        assert!(close(run.normalized_equivalence().unwrap(), -570.0));
        assert!(close(Family::Cardio.score_equivalence(&run).unwrap(), 570.0));
    }

    #[test]
    fn test_estimate_magnitude_at_ordering() {
        let lift = PerformanceRecord::strength("Squat", 1.0, 200.0);
        let at_four = estimate_magnitude_at_ordering(&lift, 4.0, Family::Strength).unwrap();
        assert!(close(at_four, 176.470_588_235_294_12));

        let run = PerformanceRecord::cardio("Running", 5.0, 570.0);
        let at_ten = estimate_magnitude_at_ordering(&run, 10.0, Family::Cardio).unwrap();
        assert!(close(at_ten, 598.5));
    }

    #[test]
    fn test_error_carries_activity() {
        let bad = PerformanceRecord::strength("Deadlift", 0.0, 300.0);
        let error = score_equivalence(&bad, Family::Strength).unwrap_err();
        assert_eq!(error.context.resource_id.as_deref(), Some("Deadlift"));
    }
}
