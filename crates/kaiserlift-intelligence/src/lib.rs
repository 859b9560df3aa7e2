// ABOUTME: Frontier intelligence crate: equivalence scoring, Pareto fronts, and next-target synthesis
// ABOUTME: Pure functions over borrowed record slices, shared by the root crate's analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

#![deny(unsafe_code)]

//! # KaiserLift Intelligence
//!
//! Turns a history of performance observations into personal-record
//! frontiers and minimal "next PR" targets. Everything here is synchronous and
//! stateless; callers own the records and receive fresh vectors back.
//!
//! ## Modules
//!
//! - **equivalence**: load-equivalence and pace-degradation scoring
//! - **pareto**: per-activity dominance filter
//! - **targets**: low-end, gap-fill and high-end target synthesis
//! - **`weak_point`**: lowest-scoring frontier point
//! - **prediction**: optimistic/conservative magnitude estimates
//! - **config**: increment tables for synthesis

/// Synthesis increment tables and their validation
pub mod config;

/// Family-specific equivalence formulas
pub mod equivalence;

/// Pareto front calculation
pub mod pareto;

/// Magnitude prediction at arbitrary ordering values
pub mod prediction;

/// Next-target synthesis
pub mod targets;

/// Weak-point selection
pub mod weak_point;

pub use config::{ConfigError, SynthesisConfig};
pub use equivalence::{
    estimate_magnitude_at_ordering, score_equivalence, EquivalenceExt, FamilyEquivalence,
};
pub use pareto::{compute_frontier, compute_group_frontier, group_by_activity, is_dominated_by};
pub use prediction::{
    predict_at_ordering, predict_standard_orderings, MagnitudePrediction, NamedPrediction,
};
pub use targets::{synthesize_targets, TargetSynthesizer};
pub use weak_point::{select_easiest_targets, select_weak_point, WeakPoint};
