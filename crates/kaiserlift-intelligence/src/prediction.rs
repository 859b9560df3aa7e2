// ABOUTME: Magnitude prediction at arbitrary ordering values from a frontier's neighbouring points
// ABOUTME: Reports optimistic and conservative estimates plus standard rep-max and race tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! Magnitude Predictor
//!
//! Projects the frontier to an ordering value nobody has attempted yet (a
//! 3-rep max, a marathon pace). Two frontier anchors each produce an estimate
//! through the equivalence curve; the better one is reported as optimistic,
//! the other as conservative. The two are never averaged.
//!
//! Anchor choice:
//! - target inside the frontier range: the nearest point at or below it and
//!   the nearest point above it
//! - target outside the range: the two frontier points closest to it
//! - single-point frontier: that point for both estimates

use crate::equivalence::estimate_magnitude_at_ordering;
use kaiserlift_core::constants::{race_distances::STANDARD_RACES, strength::STANDARD_REP_TARGETS};
use kaiserlift_core::errors::AppResult;
use kaiserlift_core::models::{Family, PerformanceRecord};
use serde::{Deserialize, Serialize};

/// Estimated magnitude at one ordering value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnitudePrediction {
    /// Ordering value predicted for
    pub target_ordering: f64,
    /// Better of the two anchor estimates
    pub optimistic: f64,
    /// Worse of the two anchor estimates
    pub conservative: f64,
    /// Frontier point behind the optimistic estimate
    pub optimistic_anchor: PerformanceRecord,
    /// Frontier point behind the conservative estimate
    pub conservative_anchor: PerformanceRecord,
}

impl MagnitudePrediction {
    /// Spread between the estimates on the magnitude axis
    #[must_use]
    pub fn spread(&self) -> f64 {
        (self.optimistic - self.conservative).abs()
    }
}

/// Prediction with a display label ("5RM", "Half Marathon")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPrediction {
    /// Label of the standard ordering value
    pub label: String,
    /// The prediction
    pub prediction: MagnitudePrediction,
}

/// Predict the magnitude achievable at `target_ordering`
///
/// Returns `Ok(None)` for an empty frontier.
///
/// # Errors
///
/// Returns `AppError::InvalidRecord` if an anchor cannot be scored or the
/// target ordering is non-positive.
pub fn predict_at_ordering(
    frontier: &[PerformanceRecord],
    target_ordering: f64,
    family: Family,
) -> AppResult<Option<MagnitudePrediction>> {
    let mut sorted: Vec<&PerformanceRecord> = frontier.iter().collect();
    sorted.sort_by(|a, b| a.ordering.total_cmp(&b.ordering));

    let Some((first, second)) = anchors(&sorted, target_ordering) else {
        return Ok(None);
    };

    let first_estimate = estimate_magnitude_at_ordering(first, target_ordering, family)?;
    let second_estimate = estimate_magnitude_at_ordering(second, target_ordering, family)?;

    let (optimistic, optimistic_anchor, conservative, conservative_anchor) =
        if family.is_better(second_estimate, first_estimate) {
            (second_estimate, second, first_estimate, first)
        } else {
            (first_estimate, first, second_estimate, second)
        };

    Ok(Some(MagnitudePrediction {
        target_ordering,
        optimistic,
        conservative,
        optimistic_anchor: optimistic_anchor.clone(),
        conservative_anchor: conservative_anchor.clone(),
    }))
}

/// Predictions at the family's standard ordering values
///
/// Strength reports rep maxes at 1, 3, 5, 8, 10 and 12 reps; cardio reports
/// paces for 5K, 10K, half marathon and marathon (distances in miles). An
/// empty frontier yields an empty table.
///
/// # Errors
///
/// Returns `AppError::InvalidRecord` if a frontier point cannot be scored.
pub fn predict_standard_orderings(
    frontier: &[PerformanceRecord],
    family: Family,
) -> AppResult<Vec<NamedPrediction>> {
    let table: Vec<(String, f64)> = match family {
        Family::Strength => STANDARD_REP_TARGETS
            .iter()
            .map(|&reps| (format!("{reps}RM"), reps))
            .collect(),
        Family::Cardio => STANDARD_RACES
            .iter()
            .map(|&(name, distance)| (name.to_owned(), distance))
            .collect(),
    };

    let mut predictions = Vec::with_capacity(table.len());
    for (label, ordering) in table {
        if let Some(prediction) = predict_at_ordering(frontier, ordering, family)? {
            predictions.push(NamedPrediction { label, prediction });
        }
    }
    Ok(predictions)
}

fn anchors<'a>(
    sorted: &[&'a PerformanceRecord],
    target: f64,
) -> Option<(&'a PerformanceRecord, &'a PerformanceRecord)> {
    match sorted {
        [] => None,
        [only] => Some((*only, *only)),
        _ => {
            let above = sorted.partition_point(|r| r.ordering <= target);
            let last = sorted.len() - 1;
            Some(match above {
                0 => (sorted[0], sorted[1]),
                i if i > last => (sorted[last], sorted[last - 1]),
                i => (sorted[i - 1], sorted[i]),
            })
        }
    }
}
