// ABOUTME: Growth and staleness analysis thresholds with validation and env overrides
// ABOUTME: Defaults reproduce the average-month staleness rule and 0.3 cm/month growth threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ConfigError;
use crate::constants::growth;

/// Environment variable overriding the adult age
pub const ADULT_AGE_ENV: &str = "GEARFIT_ADULT_AGE";
/// Environment variable overriding the staleness window in months
pub const STALE_AFTER_MONTHS_ENV: &str = "GEARFIT_STALE_AFTER_MONTHS";
/// Environment variable overriding the growing threshold in cm/month
pub const GROWING_THRESHOLD_ENV: &str = "GEARFIT_GROWING_THRESHOLD";

/// Thresholds for growth and staleness analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthConfig {
    /// Members at or above this age are never stale
    pub adult_age_years: u32,
    /// Staleness window in average months
    pub stale_after_months: f64,
    /// Regression slope at or above which a member is growing (cm/month)
    pub growing_threshold_cm_per_month: f64,
    /// Length of an average month in days
    pub days_per_month: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            adult_age_years: growth::ADULT_AGE_YEARS,
            stale_after_months: growth::STALE_AFTER_MONTHS,
            growing_threshold_cm_per_month: growth::GROWING_THRESHOLD_CM_PER_MONTH,
            days_per_month: growth::DAYS_PER_MONTH,
        }
    }
}

impl GrowthConfig {
    /// Staleness window expressed in days
    #[must_use]
    pub fn stale_after_days(&self) -> f64 {
        self.stale_after_months * self.days_per_month
    }

    /// Validate the thresholds
    ///
    /// # Errors
    ///
    /// Returns an error when a threshold is non-positive or out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adult_age_years == 0 || self.adult_age_years > 30 {
            return Err(ConfigError::ValueOutOfRange(
                "adult_age_years must be between 1 and 30",
            ));
        }
        if !(self.stale_after_months.is_finite() && self.stale_after_months > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "stale_after_months must be positive",
            ));
        }
        if !(self.growing_threshold_cm_per_month.is_finite()
            && self.growing_threshold_cm_per_month > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "growing_threshold_cm_per_month must be positive",
            ));
        }
        if !(28.0..=31.0).contains(&self.days_per_month) {
            return Err(ConfigError::InvalidRange(
                "days_per_month must be between 28 and 31",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when a variable is not a valid number
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        apply_env_var(ADULT_AGE_ENV, &mut self.adult_age_years)?;
        apply_env_var(STALE_AFTER_MONTHS_ENV, &mut self.stale_after_months)?;
        apply_env_var(GROWING_THRESHOLD_ENV, &mut self.growing_threshold_cm_per_month)?;
        Ok(self)
    }
}

fn apply_env_var<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
        debug!(variable = name, value = %val.trim(), "Applied growth config override");
    }
    Ok(())
}
