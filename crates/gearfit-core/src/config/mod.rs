// ABOUTME: Configuration module for gearfit-core
// ABOUTME: Re-exports display preferences, growth thresholds and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

/// Display preferences (shoe size system, length unit, sizing model)
pub mod display;
/// Configuration error types
pub mod error;
/// Growth and staleness thresholds
pub mod growth;

pub use display::DisplayPreferences;
pub use error::ConfigError;
pub use growth::GrowthConfig;
