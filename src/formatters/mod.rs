// ABOUTME: Display formatting for engine output driven by explicit DisplayPreferences
// ABOUTME: Renders shoe sizes in the chosen system and lengths in centimeters or inches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! # Output Formatters
//!
//! The engine always computes in centimeters and every shoe size system at
//! once. These helpers pick what to show from a [`DisplayPreferences`] value
//! handed in by the caller; nothing here reads global state.
//!
//! ```rust
//! use gearfit::config::DisplayPreferences;
//! use gearfit::formatters::format_length;
//! use gearfit::models::LengthUnit;
//!
//! let prefs = DisplayPreferences { length_unit: LengthUnit::In, ..Default::default() };
//! assert_eq!(format_length(254.0, &prefs), "100 in");
//! ```

use gearfit_core::config::DisplayPreferences;
use gearfit_core::models::LengthUnit;
use gearfit_intelligence::algorithms::shoe_size::AllShoeSizes;
use gearfit_intelligence::sizing::SizeRange;
use gearfit_intelligence::utils::{format_size_range, round_to_tenth};

/// Convert centimeters into the preferred unit, one decimal for inches
#[must_use]
pub fn length_in_unit(cm: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Cm => cm,
        LengthUnit::In => round_to_tenth(cm / LengthUnit::CM_PER_INCH),
    }
}

/// Render a shoe size in the preferred system, e.g. `"42.5 EU"` or `"9.5 US M"`
#[must_use]
pub fn format_shoe_size(sizes: &AllShoeSizes, prefs: &DisplayPreferences) -> String {
    let system = prefs.shoe_size_system;
    format!("{} {}", sizes.get(system), system.label())
}

/// Render a length in the preferred unit, e.g. `"170 cm"` or `"66.9 in"`
#[must_use]
pub fn format_length(cm: f64, prefs: &DisplayPreferences) -> String {
    let unit = prefs.length_unit;
    format!("{} {}", length_in_unit(cm, unit), unit.suffix())
}

/// Render a ski or board range with its recommendation, e.g. `"190-200 cm (193 cm)"`
#[must_use]
pub fn format_ski_range(range: &SizeRange, prefs: &DisplayPreferences) -> String {
    let unit = prefs.length_unit;
    let bounds = format_size_range(
        length_in_unit(f64::from(range.min), unit),
        length_in_unit(f64::from(range.max), unit),
        unit.suffix(),
    );
    format!("{bounds} ({})", format_length(f64::from(range.recommended), prefs))
}
