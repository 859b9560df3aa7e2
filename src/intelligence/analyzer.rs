// ABOUTME: Frontier analyzer grouping raw observations and building one report per activity
// ABOUTME: Runs frontier, targets, weak point and predictions per group on the rayon pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

use crate::config::KaiserliftConfig;
use kaiserlift_core::errors::AppResult;
use kaiserlift_core::models::{Family, PerformanceRecord, TargetRecord};
use kaiserlift_intelligence::config::SynthesisConfig;
use kaiserlift_intelligence::pareto::{group_by_activity, ActivityGroup};
use kaiserlift_intelligence::prediction::{predict_standard_orderings, NamedPrediction};
use kaiserlift_intelligence::targets::TargetSynthesizer;
use kaiserlift_intelligence::weak_point::{select_easiest_targets, select_weak_point, WeakPoint};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Everything derived for one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityReport {
    /// Activity name
    pub activity: String,
    /// Activity family
    pub family: Family,
    /// Number of raw observations in the group
    pub observations: usize,
    /// Personal-record frontier, ordering ascending
    pub frontier: Vec<PerformanceRecord>,
    /// Next-PR targets in emission order
    pub targets: Vec<TargetRecord>,
    /// Lowest-scoring frontier point
    pub weak_point: Option<WeakPoint>,
    /// Rep-max or race-pace table
    pub predictions: Vec<NamedPrediction>,
}

impl ActivityReport {
    /// The `n` easiest targets to attempt next
    #[must_use]
    pub fn next_targets(&self, n: usize) -> Vec<TargetRecord> {
        select_easiest_targets(&self.targets, n)
    }
}

/// Outcome of analyzing one activity group
///
/// A group whose records cannot be scored carries its error here without
/// affecting sibling groups.
#[derive(Debug)]
pub struct GroupAnalysis {
    /// Activity name
    pub activity: String,
    /// Activity family
    pub family: Family,
    /// Report or the error that stopped this group
    pub result: AppResult<ActivityReport>,
}

/// Per-activity frontier pipeline
#[derive(Debug, Clone)]
pub struct FrontierAnalyzer {
    synthesizer: TargetSynthesizer,
    parallel_groups: bool,
}

impl Default for FrontierAnalyzer {
    fn default() -> Self {
        Self::new(SynthesisConfig::default())
    }
}

impl FrontierAnalyzer {
    /// Analyzer with the given increments, analyzing groups in parallel
    #[must_use]
    pub const fn new(config: SynthesisConfig) -> Self {
        Self {
            synthesizer: TargetSynthesizer::new(config),
            parallel_groups: true,
        }
    }

    /// Analyzer from the runtime configuration
    #[must_use]
    pub fn from_config(config: &KaiserliftConfig) -> Self {
        Self {
            synthesizer: TargetSynthesizer::new(config.synthesis.clone()),
            parallel_groups: config.parallel_groups,
        }
    }

    /// Toggle parallel group analysis
    #[must_use]
    pub const fn with_parallel_groups(mut self, parallel_groups: bool) -> Self {
        self.parallel_groups = parallel_groups;
        self
    }

    /// Analyze every activity in `records`
    ///
    /// Results follow the first-appearance order of each activity in the
    /// input, whether or not groups run in parallel.
    #[must_use]
    pub fn analyze(&self, records: &[PerformanceRecord]) -> Vec<GroupAnalysis> {
        let groups = group_by_activity(records);
        info!(
            records = records.len(),
            groups = groups.len(),
            parallel = self.parallel_groups,
            "Analyzing activity groups"
        );

        if self.parallel_groups {
            groups.par_iter().map(|group| self.analyze_group(group)).collect()
        } else {
            groups.iter().map(|group| self.analyze_group(group)).collect()
        }
    }

    /// Analyze a single activity of the given family
    ///
    /// Groups are keyed by family and name, so a strength and a cardio
    /// activity sharing a name are analyzed separately. Returns `None` if no
    /// record matches both. Records of other activities are ignored.
    #[must_use]
    pub fn analyze_activity(
        &self,
        records: &[PerformanceRecord],
        family: Family,
        activity: &str,
    ) -> Option<GroupAnalysis> {
        group_by_activity(records)
            .into_iter()
            .find(|group| group.family == family && group.activity == activity)
            .map(|group| self.analyze_group(&group))
    }

    fn analyze_group(&self, group: &ActivityGroup<'_>) -> GroupAnalysis {
        let result = self.build_report(group);
        if let Err(e) = &result {
            warn!(
                activity = %group.activity,
                family = %group.family,
                error = %e,
                "Skipping activity with invalid records"
            );
        }
        GroupAnalysis {
            activity: group.activity.to_owned(),
            family: group.family,
            result,
        }
    }

    fn build_report(&self, group: &ActivityGroup<'_>) -> AppResult<ActivityReport> {
        let frontier = group.frontier();
        let targets = self.synthesizer.synthesize(&frontier, group.family)?;
        let weak_point = select_weak_point(&frontier)?;
        let predictions = predict_standard_orderings(&frontier, group.family)?;

        debug!(
            activity = %group.activity,
            ordering_axis = group.family.ordering_label(),
            magnitude_axis = group.family.magnitude_label(),
            frontier = frontier.len(),
            targets = targets.len(),
            "Built activity report"
        );

        Ok(ActivityReport {
            activity: group.activity.to_owned(),
            family: group.family,
            observations: group.records.len(),
            frontier,
            targets,
            weak_point,
            predictions,
        })
    }
}
