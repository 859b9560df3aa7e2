// ABOUTME: Shared test utilities and record builders for integration tests
// ABOUTME: Provides quiet tracing setup and strength/cardio history fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `kaiserlift`

use kaiserlift::models::PerformanceRecord;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Strength records for one exercise from `(reps, load)` pairs
pub fn lifts(activity: &str, sets: &[(f64, f64)]) -> Vec<PerformanceRecord> {
    sets.iter()
        .map(|&(reps, load)| PerformanceRecord::strength(activity, reps, load))
        .collect()
}

/// Cardio records for one activity from `(distance, pace)` pairs
pub fn runs(activity: &str, efforts: &[(f64, f64)]) -> Vec<PerformanceRecord> {
    efforts
        .iter()
        .map(|&(distance, pace)| PerformanceRecord::cardio(activity, distance, pace))
        .collect()
}

/// `(ordering, magnitude)` pairs for compact assertions
pub fn points(records: &[PerformanceRecord]) -> Vec<(f64, f64)> {
    records.iter().map(|r| (r.ordering, r.magnitude)).collect()
}

/// Deterministic pseudo-random strength history
///
/// Loads wander around a rep-dependent curve so that most sets end up
/// dominated and a handful form the frontier.
pub fn synthetic_history(activity: &str, count: usize) -> Vec<PerformanceRecord> {
    (0..count)
        .map(|index| {
            let reps = 1.0 + (index * 7 % 15) as f64;
            let noise = (index * 37 % 23) as f64;
            let load = 120.0 - reps * 4.0 + noise;
            PerformanceRecord::strength(activity, reps, load)
        })
        .collect()
}

/// Deterministic pseudo-random cardio history on tenth-of-a-unit distances
///
/// Paces slow with distance plus noise, so lower pace wins and most efforts
/// are dominated by a faster effort over a longer distance.
pub fn synthetic_cardio_history(activity: &str, count: usize) -> Vec<PerformanceRecord> {
    (0..count)
        .map(|index| {
            let tenths = 1 + index * 7 % 120;
            let distance = tenths as f64 / 10.0;
            let noise = (index * 37 % 29) as f64;
            let pace = distance.mul_add(6.0, 400.0) + noise;
            PerformanceRecord::cardio(activity, distance, pace)
        })
        .collect()
}
