// ABOUTME: Configuration error types for display preferences and analysis thresholds
// ABOUTME: Defines error variants for invalid ranges, parse failures and environment access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! Configuration error types.

use std::env;
use thiserror::Error;

use crate::errors::{AppError, ErrorCode};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bounds are inverted or otherwise inconsistent
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
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
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
