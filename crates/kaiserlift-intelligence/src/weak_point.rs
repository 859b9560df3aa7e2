// ABOUTME: Weak-point selection over a frontier and easiest-target ranking
// ABOUTME: Picks the frontier point with the lowest equivalence score to train next
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

use crate::equivalence::EquivalenceExt;
use kaiserlift_core::errors::AppResult;
use kaiserlift_core::models::{PerformanceRecord, TargetRecord};
use serde::{Deserialize, Serialize};

/// Frontier point with the lowest equivalence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakPoint {
    /// The weakest frontier record
    pub record: PerformanceRecord,
    /// Its equivalence score (raw, family units)
    pub equivalence_score: f64,
}

/// Select the weak point of a frontier
///
/// Scores are compared on the normalized (higher-is-better) scale. Ties go to
/// the first record in ordering-ascending order. An empty frontier has no
/// weak point.
///
/// # Errors
///
/// Returns `AppError::InvalidRecord` if any frontier record cannot be scored.
pub fn select_weak_point(frontier: &[PerformanceRecord]) -> AppResult<Option<WeakPoint>> {
    let mut sorted: Vec<&PerformanceRecord> = frontier.iter().collect();
    sorted.sort_by(|a, b| a.ordering.total_cmp(&b.ordering));

    let mut weakest: Option<(f64, WeakPoint)> = None;
    for record in sorted {
        let equivalence_score = record.equivalence_score()?;
        let normalized = record.family.normalize(equivalence_score);
        let is_weaker = match &weakest {
            Some((current, _)) => normalized < *current,
            None => true,
        };
        if is_weaker {
            weakest = Some((
                normalized,
                WeakPoint {
                    record: record.clone(),
                    equivalence_score,
                },
            ));
        }
    }

    Ok(weakest.map(|(_, point)| point))
}

/// The `n` easiest targets, ascending by normalized equivalence score
///
/// Ties keep their synthesis order.
#[must_use]
pub fn select_easiest_targets(targets: &[TargetRecord], n: usize) -> Vec<TargetRecord> {
    let mut ranked: Vec<&TargetRecord> = targets.iter().collect();
    ranked.sort_by(|a, b| a.normalized_score().total_cmp(&b.normalized_score()));
    ranked.into_iter().take(n).cloned().collect()
}
