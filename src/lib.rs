// ABOUTME: Main library entry point for the KaiserLift personal-record frontier engine
// ABOUTME: Re-exports core types and algorithms and adds configuration, logging, and the analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

#![deny(unsafe_code)]

//! # KaiserLift
//!
//! Derives personal-record frontiers and minimal "next PR" targets from a
//! history of strength sets or cardio efforts.
//!
//! ## Architecture
//!
//! - **`kaiserlift-core`**: records, families, errors, constants, formatters
//! - **`kaiserlift-intelligence`**: equivalence scoring, Pareto fronts,
//!   target synthesis, weak points, predictions
//! - **this crate**: runtime configuration, logging setup, and the
//!   [`intelligence::FrontierAnalyzer`] that runs the pipeline per activity
//!
//! ## Example Usage
//!
//! ```rust
//! use kaiserlift::intelligence::FrontierAnalyzer;
//! use kaiserlift::models::PerformanceRecord;
//!
//! let history = vec![
//!     PerformanceRecord::strength("Bench Press", 10.0, 100.0),
//!     PerformanceRecord::strength("Bench Press", 5.0, 90.0),
//!     PerformanceRecord::strength("Bench Press", 1.0, 110.0),
//! ];
//!
//! for group in FrontierAnalyzer::default().analyze(&history) {
//!     if let Ok(report) = group.result {
//!         println!("{}: {} frontier points", report.activity, report.frontier.len());
//!     }
//! }
//! ```

/// Runtime configuration loaded from the environment
pub mod config;

/// Unified error handling
pub mod errors;

/// Frontier algorithms and the per-activity analyzer
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Performance records, families, and targets
pub mod models;

/// Formula coefficients, default increments, and standard distances
pub use kaiserlift_core::constants;

/// Pace and duration formatting
pub use kaiserlift_core::formatters;
