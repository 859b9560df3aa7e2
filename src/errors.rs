// ABOUTME: Error handling re-exports from kaiserlift-core
// ABOUTME: Keeps crate::errors paths stable for the analyzer, config, and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! # Unified Error Handling System
//!
//! All error types live in `kaiserlift_core::errors`. Configuration errors
//! convert into [`AppError`] with [`ErrorCode::ConfigInvalid`].

pub use kaiserlift_core::errors::*;
