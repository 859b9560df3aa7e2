// ABOUTME: Target synthesis configuration with per-family increment tables
// ABOUTME: Provides defaults matching the minimal next-PR policy and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! Synthesis Configuration
//!
//! Increment tables used by the target synthesizer. Each family defines its
//! minimal ordering-axis step and its minimal magnitude improvement.

pub mod error;

pub use error::ConfigError;

use kaiserlift_core::constants::{cardio, strength};
use kaiserlift_core::models::Family;
use serde::{Deserialize, Serialize};

/// Increment tables for both families
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Strength increments
    pub strength: StrengthIncrements,
    /// Cardio increments
    pub cardio: CardioIncrements,
}

/// Minimal steps for strength targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthIncrements {
    /// Load added to a frontier point to beat it
    pub load_increment: f64,
    /// Repetitions between adjacent frontier points before a gap exists
    pub rep_step: f64,
}

/// Minimal steps for cardio targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioIncrements {
    /// Fractional pace reduction that beats a frontier point (0.05 = 5% faster)
    pub pace_improvement: f64,
    /// Distance between adjacent frontier points before a gap exists
    pub distance_step: f64,
}

impl Default for StrengthIncrements {
    fn default() -> Self {
        Self {
            load_increment: strength::DEFAULT_LOAD_INCREMENT,
            rep_step: strength::DEFAULT_REP_STEP,
        }
    }
}

impl Default for CardioIncrements {
    fn default() -> Self {
        Self {
            pace_improvement: cardio::DEFAULT_PACE_IMPROVEMENT,
            distance_step: cardio::DEFAULT_DISTANCE_STEP,
        }
    }
}

impl SynthesisConfig {
    /// Minimal ordering-axis step for a family
    #[must_use]
    pub fn ordering_step(&self, family: Family) -> f64 {
        match family {
            Family::Strength => self.strength.rep_step,
            Family::Cardio => self.cardio.distance_step,
        }
    }

    /// Magnitude improved by one minimal increment
    #[must_use]
    pub fn improve(&self, family: Family, magnitude: f64) -> f64 {
        match family {
            Family::Strength => magnitude + self.strength.load_increment,
            Family::Cardio => magnitude * (1.0 - self.cardio.pace_improvement),
        }
    }

    /// Validate the increment tables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any increment is non-positive
    /// or the pace improvement is not a fraction below 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.strength.load_increment.is_finite() && self.strength.load_increment > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "strength load_increment must be positive",
            ));
        }
        if !(self.strength.rep_step.is_finite() && self.strength.rep_step >= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "strength rep_step must be at least 1",
            ));
        }
        if !(self.cardio.pace_improvement > 0.0 && self.cardio.pace_improvement < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "cardio pace_improvement must be between 0 and 1 (exclusive)",
            ));
        }
        if !(self.cardio.distance_step.is_finite() && self.cardio.distance_step > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "cardio distance_step must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = SynthesisConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.ordering_step(Family::Strength) - 1.0).abs() < f64::EPSILON);
        assert!((config.ordering_step(Family::Cardio) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_improve() {
        let config = SynthesisConfig::default();
        assert!((config.improve(Family::Strength, 90.0) - 95.0).abs() < f64::EPSILON);
        assert!((config.improve(Family::Cardio, 600.0) - 570.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut config = SynthesisConfig::default();
        config.cardio.pace_improvement = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = SynthesisConfig::default();
        config.strength.load_increment = 0.0;
        assert!(config.validate().is_err());
    }
}
