// ABOUTME: Bi-objective performance record and synthesized target record types
// ABOUTME: Shared by the Pareto front calculator, target synthesizer, and report output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

use super::Family;
use serde::{Deserialize, Serialize};

/// One observed (or synthesized) performance of an activity
///
/// `ordering` is "how much was attempted" (repetitions or distance) and
/// `magnitude` is "how hard" (load or pace). Equivalence scores are derived on
/// demand and never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Activity name, the grouping key
    pub activity: String,
    /// Family selecting formulas and the better-direction of `magnitude`
    pub family: Family,
    /// Repetitions (strength) or distance (cardio)
    pub ordering: f64,
    /// Load (strength) or pace in seconds per distance unit (cardio)
    pub magnitude: f64,
}

impl PerformanceRecord {
    /// Create a record
    #[must_use]
    pub fn new(activity: impl Into<String>, family: Family, ordering: f64, magnitude: f64) -> Self {
        Self {
            activity: activity.into(),
            family,
            ordering,
            magnitude,
        }
    }

    /// Strength record: `load` lifted for `reps` repetitions
    #[must_use]
    pub fn strength(activity: impl Into<String>, reps: f64, load: f64) -> Self {
        Self::new(activity, Family::Strength, reps, load)
    }

    /// Cardio record: `pace` seconds per unit held over `distance`
    #[must_use]
    pub fn cardio(activity: impl Into<String>, distance: f64, pace: f64) -> Self {
        Self::new(activity, Family::Cardio, distance, pace)
    }

    /// Grouping key
    #[must_use]
    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// Magnitude on the higher-is-better scale
    #[must_use]
    pub fn normalized_betterness(&self) -> f64 {
        self.family.normalize(self.magnitude)
    }

    /// Copy of this record moved to another point of the same activity
    #[must_use]
    pub fn at(&self, ordering: f64, magnitude: f64) -> Self {
        Self {
            activity: self.activity.clone(),
            family: self.family,
            ordering,
            magnitude,
        }
    }
}

/// How a target record was synthesized
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Low-end extension: beat the easiest frontier point by one increment
    SingleRepExtension,
    /// One step above the lower point of a gap between frontier points
    GapFill,
    /// High-end extension: one step beyond the hardest frontier point
    RangeExtension,
}

impl TargetKind {
    /// Human-readable provenance label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SingleRepExtension => "single-rep extension",
            Self::GapFill => "gap-fill",
            Self::RangeExtension => "range extension",
        }
    }
}

/// Synthetic "next personal best" record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    /// The target performance
    #[serde(flatten)]
    pub record: PerformanceRecord,
    /// Provenance of the target
    pub kind: TargetKind,
    /// Equivalence score computed for the target
    pub equivalence_score: f64,
}

impl TargetRecord {
    /// Target magnitude on the higher-is-better scale
    #[must_use]
    pub fn normalized_score(&self) -> f64 {
        self.record.family.normalize(self.equivalence_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_betterness() {
        let lift = PerformanceRecord::strength("Bench Press", 5.0, 100.0);
        let run = PerformanceRecord::cardio("Running", 5.0, 570.0);

        assert!((lift.normalized_betterness() - 100.0).abs() < f64::EPSILON);
        assert!((run.normalized_betterness() + 570.0).abs() < f64::EPSILON);
        assert_eq!(run.activity(), "Running");
    }

    #[test]
    fn test_target_record_serializes_flat() {
        let target = TargetRecord {
            record: PerformanceRecord::strength("Bench Press", 1.0, 105.0),
            kind: TargetKind::SingleRepExtension,
            equivalence_score: 105.0,
        };

        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["activity"], "Bench Press");
        assert_eq!(json["family"], "strength");
        assert_eq!(json["kind"], "single_rep_extension");
        assert_eq!(json["ordering"], 1.0);
    }

    #[test]
    fn test_target_kind_labels() {
        assert_eq!(TargetKind::SingleRepExtension.label(), "single-rep extension");
        assert_eq!(TargetKind::GapFill.label(), "gap-fill");
        assert_eq!(TargetKind::RangeExtension.label(), "range extension");
    }
}
