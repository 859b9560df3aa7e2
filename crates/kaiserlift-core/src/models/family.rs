// ABOUTME: Activity family enumeration selecting formulas and increment tables
// ABOUTME: Normalizes magnitudes so every comparison uses a higher-is-better convention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Activity family of a performance record
///
/// - `Strength`: ordering axis is repetitions, magnitude is load (higher is better)
/// - `Cardio`: ordering axis is distance, magnitude is pace in seconds per
///   distance unit (lower is better)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Load lifted for a number of repetitions
    Strength,
    /// Pace held over a distance
    Cardio,
}

impl Family {
    /// Family name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
        }
    }

    /// Label of the ordering axis
    #[must_use]
    pub const fn ordering_label(&self) -> &'static str {
        match self {
            Self::Strength => "reps",
            Self::Cardio => "distance",
        }
    }

    /// Label of the magnitude axis
    #[must_use]
    pub const fn magnitude_label(&self) -> &'static str {
        match self {
            Self::Strength => "weight",
            Self::Cardio => "pace",
        }
    }

    /// Map a magnitude (or a magnitude-denominated score) onto the
    /// higher-is-better scale
    #[must_use]
    pub fn normalize(&self, magnitude: f64) -> f64 {
        match self {
            Self::Strength => magnitude,
            Self::Cardio => -magnitude,
        }
    }

    /// Compare two magnitudes so that `Ordering::Greater` means `a` is better
    #[must_use]
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        self.normalize(a).total_cmp(&self.normalize(b))
    }

    /// Whether magnitude `a` is strictly better than `b`
    #[must_use]
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// The better of two magnitudes (first wins ties)
    #[must_use]
    pub fn better(&self, a: f64, b: f64) -> f64 {
        if self.is_better(b, a) {
            b
        } else {
            a
        }
    }

    /// The more conservative (worse) of two magnitudes (first wins ties)
    #[must_use]
    pub fn more_conservative(&self, a: f64, b: f64) -> f64 {
        if self.is_better(a, b) {
            b
        } else {
            a
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "lifting" => Ok(Self::Strength),
            "cardio" | "running" => Ok(Self::Cardio),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity family: '{other}'. Valid options: strength, cardio"
            ))),
        }
    }
}
