// ABOUTME: Display preferences passed explicitly into formatting calls
// ABOUTME: Shoe size system, length unit and nordic sizing model with environment loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::errors::AppError;
use crate::models::{LengthUnit, ShoeSizeSystem, SizingModel};

/// Environment variable selecting the shoe size system
pub const SHOE_SIZE_SYSTEM_ENV: &str = "GEARFIT_SHOE_SIZE_SYSTEM";
/// Environment variable selecting the length unit
pub const LENGTH_UNIT_ENV: &str = "GEARFIT_LENGTH_UNIT";
/// Environment variable selecting the nordic sizing model
pub const SIZING_MODEL_ENV: &str = "GEARFIT_SIZING_MODEL";

/// How engine output is presented to a user
///
/// The engine never reads preferences implicitly; callers pass this value to
/// every formatting call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreferences {
    /// Shoe size system used to present boot and skate sizes
    #[serde(default)]
    pub shoe_size_system: ShoeSizeSystem,
    /// Unit used to present lengths
    #[serde(default)]
    pub length_unit: LengthUnit,
    /// Vendor chart used for nordic skis
    #[serde(default)]
    pub sizing_model: SizingModel,
}

impl DisplayPreferences {
    /// Load preferences from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when a variable holds an unknown value
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut prefs = Self::default();
        if let Some(system) = read_env(SHOE_SIZE_SYSTEM_ENV)? {
            prefs.shoe_size_system = system;
        }
        if let Some(unit) = read_env(LENGTH_UNIT_ENV)? {
            prefs.length_unit = unit;
        }
        if let Some(model) = read_env(SIZING_MODEL_ENV)? {
            prefs.sizing_model = model;
        }
        Ok(prefs)
    }
}

fn read_env<T: FromStr<Err = AppError>>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|e: AppError| ConfigError::Parse(format!("{name}: {}", e.message))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
