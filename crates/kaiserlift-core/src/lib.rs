// ABOUTME: Core types and constants for the KaiserLift frontier engine
// ABOUTME: Foundation crate with error handling, performance records, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

#![deny(unsafe_code)]

//! # KaiserLift Core
//!
//! Foundation crate providing the shared types used by the frontier
//! intelligence crate and the root `kaiserlift` crate. It holds no algorithms
//! of its own and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: `PerformanceRecord`, `Family`, and synthesized `TargetRecord`s
//! - **constants**: Formula coefficients, default increments, and standard distances
//! - **formatters**: Human-readable pace and duration strings

/// Unified error handling system with standard error codes
pub mod errors;

/// Formula coefficients, default increments, and reference distances
pub mod constants;

/// Pace and duration formatting for report output
pub mod formatters;

/// Performance records, activity families, and target records
pub mod models;
