// ABOUTME: Target synthesizer producing minimal next-personal-best records from a frontier
// ABOUTME: Low-end extension, one gap fill per frontier gap, and a high-end extension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! Target Synthesizer
//!
//! Every target is the smallest step that would add a new point to the
//! frontier. Targets are emitted low-end first, then gap fills in ascending
//! ordering, then the high-end extension, each annotated with its
//! equivalence score.

use crate::config::SynthesisConfig;
use crate::equivalence::score_equivalence;
use kaiserlift_core::constants::frontier::ORDERING_EPSILON;
use kaiserlift_core::constants::strength::SINGLE_REP;
use kaiserlift_core::errors::AppResult;
use kaiserlift_core::models::{Family, PerformanceRecord, TargetKind, TargetRecord};
use tracing::debug;

/// Synthesize targets with the default increments
///
/// # Errors
///
/// Returns `AppError::InvalidRecord` if a target cannot be scored.
pub fn synthesize_targets(
    frontier: &[PerformanceRecord],
    family: Family,
) -> AppResult<Vec<TargetRecord>> {
    TargetSynthesizer::default().synthesize(frontier, family)
}

/// Target synthesizer with configurable increments
#[derive(Debug, Clone, Default)]
pub struct TargetSynthesizer {
    config: SynthesisConfig,
}

impl TargetSynthesizer {
    /// Create a synthesizer using `config` increments
    #[must_use]
    pub const fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Increment tables in use
    #[must_use]
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Synthesize targets for one activity's frontier
    ///
    /// An empty frontier yields no targets; a single point yields only the
    /// low-end and high-end extensions.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidRecord` if a target cannot be scored.
    pub fn synthesize(
        &self,
        frontier: &[PerformanceRecord],
        family: Family,
    ) -> AppResult<Vec<TargetRecord>> {
        let mut sorted: Vec<&PerformanceRecord> = frontier.iter().collect();
        sorted.sort_by(|a, b| a.ordering.total_cmp(&b.ordering));

        let (Some(lowest), Some(highest)) = (sorted.first(), sorted.last()) else {
            return Ok(Vec::new());
        };

        let step = self.config.ordering_step(family);
        let mut targets = Vec::with_capacity(sorted.len() + 1);

        targets.push(scored(
            self.low_end(lowest, family),
            TargetKind::SingleRepExtension,
            family,
        )?);

        for pair in sorted.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if exceeds_step(hi.ordering - lo.ordering, step) {
                let magnitude = family
                    .more_conservative(lo.magnitude, self.config.improve(family, hi.magnitude));
                debug!(
                    kind = TargetKind::GapFill.label(),
                    lo = lo.ordering,
                    hi = hi.ordering,
                    "Filling frontier gap"
                );
                targets.push(scored(
                    lo.at(lo.ordering + step, magnitude),
                    TargetKind::GapFill,
                    family,
                )?);
            }
        }

        targets.push(scored(
            highest.at(highest.ordering + step, highest.magnitude),
            TargetKind::RangeExtension,
            family,
        )?);

        debug!(
            activity = %lowest.activity,
            family = %family,
            frontier = sorted.len(),
            targets = targets.len(),
            "Synthesized targets"
        );

        Ok(targets)
    }

    fn low_end(&self, lowest: &PerformanceRecord, family: Family) -> PerformanceRecord {
        let improved = self.config.improve(family, lowest.magnitude);
        match family {
            Family::Strength => lowest.at(SINGLE_REP, improved),
            Family::Cardio => lowest.at(lowest.ordering, improved),
        }
    }
}

/// Whether an ordering difference is more than one step, ignoring rounding
/// noise from decimal distances
fn exceeds_step(difference: f64, step: f64) -> bool {
    difference - step > ORDERING_EPSILON * step.max(1.0)
}

fn scored(record: PerformanceRecord, kind: TargetKind, family: Family) -> AppResult<TargetRecord> {
    let equivalence_score = score_equivalence(&record, family)?;
    Ok(TargetRecord {
        record,
        kind,
        equivalence_score,
    })
}
