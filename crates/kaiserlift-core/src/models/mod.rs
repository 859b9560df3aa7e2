// ABOUTME: Core data models for performance records and synthesized targets
// ABOUTME: Re-exports Family, PerformanceRecord, TargetKind, and TargetRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

mod family;
mod record;

pub use family::Family;
pub use record::{PerformanceRecord, TargetKind, TargetRecord};
