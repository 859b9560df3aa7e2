// ABOUTME: Integration tests for next-target synthesis over computed frontiers
// ABOUTME: Covers reference frontiers, gap fills, configured increments, and scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, lifts, runs, synthetic_cardio_history};
use kaiserlift::errors::ErrorCode;
use kaiserlift::intelligence::{
    compute_frontier, score_equivalence, synthesize_targets, SynthesisConfig, TargetSynthesizer,
};
use kaiserlift::models::{Family, TargetKind, TargetRecord};

fn summary(targets: &[TargetRecord]) -> Vec<(f64, f64)> {
    targets
        .iter()
        .map(|t| (t.record.ordering, t.record.magnitude))
        .collect()
}

#[test]
fn test_reference_frontier_targets() {
    init_test_logging();
    let frontier = lifts(
        "Bench Press",
        &[(2.0, 100.0), (5.0, 80.0), (6.0, 75.0), (10.0, 50.0)],
    );
    let targets = synthesize_targets(&frontier, Family::Strength).unwrap();

    assert_eq!(
        summary(&targets),
        vec![(1.0, 105.0), (3.0, 85.0), (7.0, 55.0), (11.0, 50.0)]
    );
    let kinds: Vec<TargetKind> = targets.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TargetKind::SingleRepExtension,
            TargetKind::GapFill,
            TargetKind::GapFill,
            TargetKind::RangeExtension,
        ]
    );
}

#[test]
fn test_single_gap_fill() {
    let frontier = lifts("Squat", &[(5.0, 100.0), (10.0, 90.0)]);
    let targets = synthesize_targets(&frontier, Family::Strength).unwrap();
    assert_eq!(
        summary(&targets),
        vec![(1.0, 105.0), (6.0, 95.0), (11.0, 90.0)]
    );
}

#[test]
fn test_adjacent_reps_have_no_gap() {
    let frontier = lifts("Squat", &[(5.0, 100.0), (6.0, 95.0)]);
    let targets = synthesize_targets(&frontier, Family::Strength).unwrap();
    assert!(targets.iter().all(|t| t.kind != TargetKind::GapFill));
}

#[test]
fn test_targets_carry_their_scores() {
    let frontier = compute_frontier(&lifts(
        "Bench Press",
        &[(10.0, 100.0), (15.0, 90.0), (1.0, 110.0)],
    ));
    let targets = synthesize_targets(&frontier, Family::Strength).unwrap();

    for target in &targets {
        let expected = score_equivalence(&target.record, Family::Strength).unwrap();
        assert!((target.equivalence_score - expected).abs() < 1e-9);
    }
}

#[test]
fn test_targets_would_join_the_frontier() {
    let frontier = compute_frontier(&lifts(
        "Bench Press",
        &[(2.0, 100.0), (5.0, 80.0), (10.0, 50.0)],
    ));
    let targets = synthesize_targets(&frontier, Family::Strength).unwrap();

    for target in targets {
        let mut extended = frontier.clone();
        extended.push(target.record.clone());
        let next = compute_frontier(&extended);
        assert!(
            next.contains(&target.record),
            "{:?} target {:?} would not be a PR",
            target.kind,
            target.record
        );
    }
}

#[test]
fn test_cardio_targets() {
    init_test_logging();
    let frontier = runs("Running", &[(1.0, 420.0), (3.0, 480.0)]);
    let targets = synthesize_targets(&frontier, Family::Cardio).unwrap();

    assert_eq!(targets.len(), 3);
    assert!((targets[0].record.ordering - 1.0).abs() < f64::EPSILON);
    assert!((targets[0].record.magnitude - 399.0).abs() < 1e-9);
    assert!((targets[1].record.ordering - 1.5).abs() < f64::EPSILON);
    // Slower of 420 and 480 * 0.95 = 456
    assert!((targets[1].record.magnitude - 456.0).abs() < 1e-9);
    assert!((targets[2].record.ordering - 3.5).abs() < f64::EPSILON);
    assert!((targets[2].record.magnitude - 480.0).abs() < f64::EPSILON);
}

#[test]
fn test_decimal_distances_one_step_apart() {
    init_test_logging();
    let frontier = runs("Running", &[(3.9, 480.0), (4.4, 500.0)]);
    let targets = synthesize_targets(&frontier, Family::Cardio).unwrap();

    let kinds: Vec<TargetKind> = targets.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TargetKind::SingleRepExtension, TargetKind::RangeExtension]
    );
    assert!((targets[1].record.ordering - 4.9).abs() < 1e-9);
}

#[test]
fn test_cardio_history_targets() {
    init_test_logging();
    let frontier = compute_frontier(&synthetic_cardio_history("Running", 300));
    let targets = synthesize_targets(&frontier, Family::Cardio).unwrap();
    let step = SynthesisConfig::default().cardio.distance_step;

    let expected_gaps = frontier
        .windows(2)
        .filter(|w| w[1].ordering - w[0].ordering > step + 1e-6)
        .count();
    let gap_fills: Vec<&TargetRecord> = targets
        .iter()
        .filter(|t| t.kind == TargetKind::GapFill)
        .collect();
    assert_eq!(gap_fills.len(), expected_gaps);

    // A gap fill never lands on an existing frontier distance
    for target in &gap_fills {
        assert!(frontier
            .iter()
            .all(|f| (f.ordering - target.record.ordering).abs() > 1e-6));
    }

    for target in &targets {
        let mut extended = frontier.clone();
        extended.push(target.record.clone());
        assert!(
            compute_frontier(&extended).contains(&target.record),
            "{:?} target {:?} would not be a PR",
            target.kind,
            target.record
        );
    }
}

#[test]
fn test_configured_increments() {
    let mut config = SynthesisConfig::default();
    config.strength.load_increment = 10.0;
    config.strength.rep_step = 2.0;
    let synthesizer = TargetSynthesizer::new(config);

    let frontier = lifts("Squat", &[(5.0, 100.0), (10.0, 70.0)]);
    let targets = synthesizer.synthesize(&frontier, Family::Strength).unwrap();
    assert_eq!(
        summary(&targets),
        vec![(1.0, 110.0), (7.0, 80.0), (12.0, 70.0)]
    );
}

#[test]
fn test_invalid_frontier_fails() {
    let frontier = runs("Running", &[(0.0, 420.0)]);
    let error = synthesize_targets(&frontier, Family::Cardio).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidRecord);
    assert_eq!(error.context.resource_id.as_deref(), Some("Running"));
}
