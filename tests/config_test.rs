// ABOUTME: Integration tests for environment-driven engine configuration
// ABOUTME: Serialized because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use gearfit::config::{ConfigError, DisplayPreferences, EngineConfig, GrowthConfig};
use gearfit::errors::{AppError, ErrorCode};
use gearfit::logging::{LogFormat, LoggingConfig};
use gearfit::models::{LengthUnit, ShoeSizeSystem, SizingModel};
use serial_test::serial;

const GEARFIT_VARS: [&str; 6] = [
    "GEARFIT_SHOE_SIZE_SYSTEM",
    "GEARFIT_LENGTH_UNIT",
    "GEARFIT_SIZING_MODEL",
    "GEARFIT_ADULT_AGE",
    "GEARFIT_STALE_AFTER_MONTHS",
    "GEARFIT_GROWING_THRESHOLD",
];

fn clear_env() {
    for name in GEARFIT_VARS {
        env::remove_var(name);
    }
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = EngineConfig::from_env().unwrap();

    assert_eq!(config.display, DisplayPreferences::default());
    assert_eq!(config.display.shoe_size_system, ShoeSizeSystem::Eu);
    assert_eq!(config.display.length_unit, LengthUnit::Cm);
    assert_eq!(config.display.sizing_model, SizingModel::Generic);
    assert_eq!(config.growth, GrowthConfig::default());
    assert_eq!(config.growth.adult_age_years, 18);
}

#[test]
#[serial]
fn test_display_preferences_from_environment() {
    clear_env();
    env::set_var("GEARFIT_SHOE_SIZE_SYSTEM", "us-women");
    env::set_var("GEARFIT_LENGTH_UNIT", "in");
    env::set_var("GEARFIT_SIZING_MODEL", "fischer");

    let config = EngineConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.display.shoe_size_system, ShoeSizeSystem::UsWomen);
    assert_eq!(config.display.length_unit, LengthUnit::In);
    assert_eq!(config.display.sizing_model, SizingModel::Fischer);
}

#[test]
#[serial]
fn test_unknown_display_value_is_a_parse_error() {
    clear_env();
    env::set_var("GEARFIT_SHOE_SIZE_SYSTEM", "jp");

    let result = DisplayPreferences::from_env();
    clear_env();

    match result {
        Err(ConfigError::Parse(message)) => assert!(message.contains("GEARFIT_SHOE_SIZE_SYSTEM")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_growth_overrides_from_environment() {
    clear_env();
    env::set_var("GEARFIT_ADULT_AGE", "16");
    env::set_var("GEARFIT_STALE_AFTER_MONTHS", "3");
    env::set_var("GEARFIT_GROWING_THRESHOLD", "0.5");

    let config = EngineConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.growth.adult_age_years, 16);
    assert!((config.growth.stale_after_months - 3.0).abs() < f64::EPSILON);
    assert!((config.growth.growing_threshold_cm_per_month - 0.5).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_invalid_growth_values_are_rejected() {
    clear_env();
    env::set_var("GEARFIT_ADULT_AGE", "eighteen");
    assert!(matches!(EngineConfig::from_env(), Err(ConfigError::Parse(_))));

    env::set_var("GEARFIT_ADULT_AGE", "0");
    assert!(matches!(
        EngineConfig::from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_environment() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let logging = LoggingConfig::from_env();
    clear_env();

    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
    assert_eq!(logging.with_level("debug").level, "debug");
}

#[test]
fn test_log_format_names() {
    assert_eq!(LogFormat::from_name("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_name("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_name("anything"), LogFormat::Compact);
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError =
        ConfigError::ValueOutOfRange("adult_age_years must be between 1 and 30").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
