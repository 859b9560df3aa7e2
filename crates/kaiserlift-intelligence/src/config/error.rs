// ABOUTME: Configuration error types for synthesis and runtime configuration validation
// ABOUTME: Defines error variants for out-of-range values, parse failures, and environment access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! Configuration error types for synthesis configuration validation.

use kaiserlift_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let app_error = match &error {
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => Self::config(error.to_string()),
            ConfigError::ValueOutOfRange(_) => {
                Self::new(ErrorCode::ConfigInvalid, error.to_string())
            }
        };
        app_error.with_source(error)
    }
}
