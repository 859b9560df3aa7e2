// ABOUTME: Pareto front calculator reducing observation histories to non-dominated personal bests
// ABOUTME: Groups by activity, collapses duplicate ordering values, and sweeps for dominance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! Pareto Front Calculator
//!
//! A record A is dominated by B (same activity) when B attempted strictly
//! more (more reps, longer distance) and was no worse on the normalized
//! magnitude axis. The frontier is what survives, sorted by ordering axis.
//!
//! The quadratic pairwise check is expressed as a sort-and-sweep: after
//! collapsing each ordering value to its best record, walk from the most
//! demanding point downward keeping the best normalized betterness seen so
//! far. A point survives only if it strictly beats everything above it.

use kaiserlift_core::models::{Family, PerformanceRecord};
use std::collections::HashMap;
use tracing::debug;

/// Records of one activity, in input order
#[derive(Debug, Clone)]
pub struct ActivityGroup<'a> {
    /// Activity name
    pub activity: &'a str,
    /// Family shared by the group
    pub family: Family,
    /// Member records in first-seen order
    pub records: Vec<&'a PerformanceRecord>,
}

impl ActivityGroup<'_> {
    /// Frontier of this group
    #[must_use]
    pub fn frontier(&self) -> Vec<PerformanceRecord> {
        frontier_of(&self.records)
    }
}

/// Partition records by `(family, activity)`
///
/// Groups appear in the order their first record appears in the input, so the
/// caller controls activity ordering through input order.
#[must_use]
pub fn group_by_activity(records: &[PerformanceRecord]) -> Vec<ActivityGroup<'_>> {
    let mut index: HashMap<(Family, &str), usize> = HashMap::new();
    let mut groups: Vec<ActivityGroup<'_>> = Vec::new();

    for record in records {
        let key = (record.family, record.activity.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ActivityGroup {
                activity: record.activity.as_str(),
                family: record.family,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    groups
}

/// Whether `a` is dominated by `b`
///
/// Records of different activities or families never dominate each other.
#[must_use]
pub fn is_dominated_by(a: &PerformanceRecord, b: &PerformanceRecord) -> bool {
    a.activity == b.activity
        && a.family == b.family
        && b.ordering > a.ordering
        && b.normalized_betterness() >= a.normalized_betterness()
}

/// Frontier of every activity in `records`
///
/// Output is grouped per activity (first-appearance order) and each group is
/// sorted by ordering axis ascending. Empty input yields an empty frontier.
#[must_use]
pub fn compute_frontier(records: &[PerformanceRecord]) -> Vec<PerformanceRecord> {
    group_by_activity(records)
        .into_iter()
        .flat_map(|group| group.frontier())
        .collect()
}

/// Frontier of records already known to share one activity
#[must_use]
pub fn compute_group_frontier(records: &[PerformanceRecord]) -> Vec<PerformanceRecord> {
    let refs: Vec<&PerformanceRecord> = records.iter().collect();
    frontier_of(&refs)
}

/// Best record per distinct ordering value, sorted ascending
///
/// Ties on normalized betterness keep the first-seen record.
#[must_use]
pub fn collapse_duplicates<'a>(records: &[&'a PerformanceRecord]) -> Vec<&'a PerformanceRecord> {
    let mut sorted: Vec<&PerformanceRecord> = records.to_vec();
    // Stable: equal ordering values stay in input order
    sorted.sort_by(|a, b| a.ordering.total_cmp(&b.ordering));

    let mut collapsed: Vec<&PerformanceRecord> = Vec::with_capacity(sorted.len());
    for record in sorted {
        match collapsed.last_mut() {
            Some(best) if best.ordering.total_cmp(&record.ordering).is_eq() => {
                if record.normalized_betterness() > best.normalized_betterness() {
                    *best = record;
                }
            }
            _ => collapsed.push(record),
        }
    }

    collapsed
}

fn frontier_of(records: &[&PerformanceRecord]) -> Vec<PerformanceRecord> {
    let collapsed = collapse_duplicates(records);

    let mut frontier: Vec<PerformanceRecord> = Vec::with_capacity(collapsed.len());
    let mut running_best = f64::NEG_INFINITY;
    for record in collapsed.iter().rev() {
        let betterness = record.normalized_betterness();
        if betterness > running_best {
            frontier.push((*record).clone());
            running_best = betterness;
        }
    }
    frontier.reverse();

    if let Some(first) = records.first() {
        debug!(
            activity = %first.activity,
            family = %first.family,
            observations = records.len(),
            distinct = collapsed.len(),
            frontier = frontier.len(),
            "Computed Pareto frontier"
        );
    }

    frontier
}
