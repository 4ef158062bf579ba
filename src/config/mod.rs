// ABOUTME: Engine configuration assembled from display preferences, growth thresholds and logging
// ABOUTME: Loads defaults, applies environment overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! Configuration management
//!
//! | Variable                     | Field                                   |
//! |------------------------------|-----------------------------------------|
//! | `GEARFIT_SHOE_SIZE_SYSTEM`   | `display.shoe_size_system`              |
//! | `GEARFIT_LENGTH_UNIT`        | `display.length_unit`                   |
//! | `GEARFIT_SIZING_MODEL`       | `display.sizing_model`                  |
//! | `GEARFIT_ADULT_AGE`          | `growth.adult_age_years`                |
//! | `GEARFIT_STALE_AFTER_MONTHS` | `growth.stale_after_months`             |
//! | `GEARFIT_GROWING_THRESHOLD`  | `growth.growing_threshold_cm_per_month` |
//! | `RUST_LOG`, `LOG_FORMAT`     | `logging`                               |

pub use gearfit_core::config::{ConfigError, DisplayPreferences, GrowthConfig};
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Complete configuration for the gearfit tools
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// How results are displayed
    pub display: DisplayPreferences,
    /// Growth and staleness thresholds
    pub growth: GrowthConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            display: DisplayPreferences::from_env()?,
            growth: GrowthConfig::default().apply_env_overrides()?,
            logging: LoggingConfig::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the growth thresholds are out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.growth.validate()
    }
}
