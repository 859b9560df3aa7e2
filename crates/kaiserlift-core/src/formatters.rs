// ABOUTME: Human-readable formatting for paces and durations in report output
// ABOUTME: Converts seconds-per-unit paces to M:SS and minute durations to H:MM:SS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

use crate::constants::cardio::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::{AppError, AppResult};

/// Placeholder for values that cannot be formatted
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a pace in seconds per distance unit as `M:SS`
///
/// Non-finite or non-positive paces render as `N/A`.
#[must_use]
pub fn format_pace(seconds_per_unit: f64) -> String {
    if !seconds_per_unit.is_finite() || seconds_per_unit <= 0.0 {
        return NOT_AVAILABLE.to_owned();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_seconds = seconds_per_unit.round() as u64;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    format!("{minutes}:{seconds:02}")
}

/// Format a duration in minutes as `H:MM:SS`, or `M:SS` under an hour
#[must_use]
pub fn format_duration_minutes(minutes: f64) -> String {
    if !minutes.is_finite() || minutes <= 0.0 {
        return NOT_AVAILABLE.to_owned();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_seconds = (minutes * SECONDS_PER_MINUTE).round() as u64;
    let hours = total_seconds / SECONDS_PER_HOUR;
    let mins = (total_seconds % SECONDS_PER_HOUR) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

/// Parse an `M:SS` pace string back to seconds per distance unit
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the string is not `minutes:seconds`
/// with seconds below 60.
pub fn parse_pace(pace: &str) -> AppResult<f64> {
    let (minutes, seconds) = pace
        .trim()
        .split_once(':')
        .ok_or_else(|| AppError::invalid_input(format!("Pace '{pace}' is not in M:SS form")))?;

    let minutes: u32 = minutes
        .parse()
        .map_err(|_| AppError::invalid_input(format!("Invalid minutes in pace '{pace}'")))?;
    let seconds: u32 = seconds
        .parse()
        .map_err(|_| AppError::invalid_input(format!("Invalid seconds in pace '{pace}'")))?;

    if seconds >= 60 {
        return Err(AppError::invalid_input(format!(
            "Seconds must be below 60 in pace '{pace}'"
        )));
    }

    Ok(f64::from(minutes).mul_add(SECONDS_PER_MINUTE, f64::from(seconds)))
}
