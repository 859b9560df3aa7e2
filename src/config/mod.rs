// ABOUTME: Runtime configuration for the frontier engine loaded from environment overrides
// ABOUTME: Wraps synthesis increments and analyzer options behind a validated global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! Runtime configuration
//!
//! Configuration is environment-only: defaults come from
//! `kaiserlift_core::constants`, then `KAISERLIFT_*` variables override them,
//! then the result is validated.
//!
//! | Variable | Field |
//! |---|---|
//! | `KAISERLIFT_STRENGTH_LOAD_INCREMENT` | `synthesis.strength.load_increment` |
//! | `KAISERLIFT_STRENGTH_REP_STEP` | `synthesis.strength.rep_step` |
//! | `KAISERLIFT_CARDIO_PACE_IMPROVEMENT` | `synthesis.cardio.pace_improvement` |
//! | `KAISERLIFT_CARDIO_DISTANCE_STEP` | `synthesis.cardio.distance_step` |
//! | `KAISERLIFT_PARALLEL_GROUPS` | `parallel_groups` |

pub use kaiserlift_intelligence::config::{
    CardioIncrements, ConfigError, StrengthIncrements, SynthesisConfig,
};

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Environment variable names
pub mod env_vars {
    /// Strength load increment
    pub const STRENGTH_LOAD_INCREMENT: &str = "KAISERLIFT_STRENGTH_LOAD_INCREMENT";
    /// Strength repetition step
    pub const STRENGTH_REP_STEP: &str = "KAISERLIFT_STRENGTH_REP_STEP";
    /// Cardio fractional pace improvement
    pub const CARDIO_PACE_IMPROVEMENT: &str = "KAISERLIFT_CARDIO_PACE_IMPROVEMENT";
    /// Cardio distance step
    pub const CARDIO_DISTANCE_STEP: &str = "KAISERLIFT_CARDIO_DISTANCE_STEP";
    /// Analyze activity groups on the rayon pool
    pub const PARALLEL_GROUPS: &str = "KAISERLIFT_PARALLEL_GROUPS";

    /// Every variable read by `KaiserliftConfig::load`
    pub const ALL: [&str; 5] = [
        STRENGTH_LOAD_INCREMENT,
        STRENGTH_REP_STEP,
        CARDIO_PACE_IMPROVEMENT,
        CARDIO_DISTANCE_STEP,
        PARALLEL_GROUPS,
    ];
}

static KAISERLIFT_CONFIG: OnceLock<KaiserliftConfig> = OnceLock::new();

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KaiserliftConfig {
    /// Target synthesis increments
    pub synthesis: SynthesisConfig,
    /// Analyze independent activity groups in parallel
    pub parallel_groups: bool,
}

impl Default for KaiserliftConfig {
    fn default() -> Self {
        Self {
            synthesis: SynthesisConfig::default(),
            parallel_groups: true,
        }
    }
}

impl KaiserliftConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once from the environment; invalid settings fall back to the
    /// defaults with a warning.
    #[must_use]
    pub fn global() -> &'static Self {
        KAISERLIFT_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load KaiserLift config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvVar` for a non-unicode value,
    /// `ConfigError::Parse` for a value that does not parse, and
    /// `ConfigError::ValueOutOfRange` if the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for an invalid increment
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.synthesis.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_vars::STRENGTH_LOAD_INCREMENT,
            &mut self.synthesis.strength.load_increment,
        )?;
        Self::apply_env_var(
            env_vars::STRENGTH_REP_STEP,
            &mut self.synthesis.strength.rep_step,
        )?;
        Self::apply_env_var(
            env_vars::CARDIO_PACE_IMPROVEMENT,
            &mut self.synthesis.cardio.pace_improvement,
        )?;
        Self::apply_env_var(
            env_vars::CARDIO_DISTANCE_STEP,
            &mut self.synthesis.cardio.distance_step,
        )?;
        Self::apply_env_var(env_vars::PARALLEL_GROUPS, &mut self.parallel_groups)?;
        Ok(self)
    }
}
