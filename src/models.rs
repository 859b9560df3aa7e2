// ABOUTME: Data model re-exports for performance records, families, and targets
// ABOUTME: Delegates to kaiserlift-core so every crate shares one record type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

pub use kaiserlift_core::models::*;
