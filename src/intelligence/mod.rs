// ABOUTME: Intelligence module re-exports from the kaiserlift-intelligence crate
// ABOUTME: Adds the per-activity frontier analyzer that runs the whole pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! # Intelligence Module
//!
//! Re-exports the frontier algorithms from `kaiserlift-intelligence` and adds
//! the [`FrontierAnalyzer`], which groups raw observations by activity and
//! produces one report per group.

// Re-export all public items from kaiserlift-intelligence
pub use kaiserlift_intelligence::*;

// Re-export submodules for path-based access (e.g., kaiserlift::intelligence::pareto)
pub use kaiserlift_intelligence::{equivalence, pareto, prediction, targets, weak_point};

/// Per-activity pipeline over raw observations
pub mod analyzer;

pub use analyzer::{ActivityReport, FrontierAnalyzer, GroupAnalysis};
