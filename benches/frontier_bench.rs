// ABOUTME: Criterion benchmarks for frontier computation, target synthesis, and analysis
// ABOUTME: Measures scaling with history size and the multi-activity analyzer pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! Criterion benchmarks for the frontier engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kaiserlift::intelligence::{
    compute_frontier, predict_standard_orderings, synthesize_targets, FrontierAnalyzer,
};
use kaiserlift::models::{Family, PerformanceRecord};

const HISTORY_SIZES: [usize; 3] = [100, 1_000, 10_000];

const EXERCISES: [&str; 8] = [
    "Bench Press",
    "Squat",
    "Deadlift",
    "Overhead Press",
    "Row",
    "Curl",
    "Dip",
    "Pull Up",
];

fn strength_history(activity: &str, count: usize) -> Vec<PerformanceRecord> {
    (0..count)
        .map(|index| {
            let reps = 1.0 + (index * 7 % 20) as f64;
            let noise = (index * 37 % 29) as f64;
            PerformanceRecord::strength(activity, reps, 150.0 - reps * 4.0 + noise)
        })
        .collect()
}

fn bench_compute_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_frontier");
    for size in HISTORY_SIZES {
        let history = strength_history("Bench Press", size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| compute_frontier(black_box(history)));
        });
    }
    group.finish();
}

fn bench_synthesize_targets(c: &mut Criterion) {
    let frontier = compute_frontier(&strength_history("Squat", 1_000));
    c.bench_function("synthesize_targets", |b| {
        b.iter(|| synthesize_targets(black_box(&frontier), Family::Strength));
    });
    c.bench_function("predict_standard_orderings", |b| {
        b.iter(|| predict_standard_orderings(black_box(&frontier), Family::Strength));
    });
}

fn bench_analyzer(c: &mut Criterion) {
    let history: Vec<PerformanceRecord> = EXERCISES
        .iter()
        .flat_map(|name| strength_history(name, 2_000))
        .collect();

    let mut group = c.benchmark_group("analyzer");
    group.throughput(Throughput::Elements(history.len() as u64));
    for parallel in [false, true] {
        let analyzer = FrontierAnalyzer::default().with_parallel_groups(parallel);
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| analyzer.analyze(black_box(&history)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_frontier,
    bench_synthesize_targets,
    bench_analyzer
);
criterion_main!(benches);
