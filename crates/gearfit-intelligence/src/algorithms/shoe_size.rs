// ABOUTME: Shoe and foot size conversion between six size systems
// ABOUTME: Every conversion routes through centimeters and rounds to the target's display increment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! # Shoe Size Conversion
//!
//! | System       | From centimeters              | To centimeters          |
//! |--------------|-------------------------------|-------------------------|
//! | `cm`         | `cm`                          | `value`                 |
//! | `mondopoint` | `cm x 10`                     | `value / 10`            |
//! | `eu`         | `(cm + 1.5) x 1.5`            | `value / 1.5 - 1.5`     |
//! | `uk`         | `(cm - 22) x 3`               | `value / 3 + 22`        |
//! | `us-men`     | `(cm - 22) x 3 + 1`           | `(value - 1) / 3 + 22`  |
//! | `us-women`   | `(cm - 22) x 3 + 2.5`         | `(value - 2.5) / 3 + 22`|
//!
//! Outputs are rounded to one decimal for centimeters, whole millimeters for
//! mondopoint and half sizes for everything else. No input is rejected; callers
//! validate ranges.

use gearfit_core::constants::shoe_size::{
    ANGLO_SIZES_PER_CM, ANGLO_ZERO_CM, EU_CM_OFFSET, EU_SCALE, MONDOPOINT_PER_CM, US_MEN_OFFSET,
    US_WOMEN_OFFSET,
};
use gearfit_core::models::ShoeSizeSystem;
use serde::{Deserialize, Serialize};

use crate::utils::{round_to_half, round_to_tenth};

/// A shoe or foot size expressed in one system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeSizeMeasurement {
    /// Numeric size
    pub value: f64,
    /// System the value is expressed in
    pub system: ShoeSizeSystem,
}

/// The same size expressed in every supported system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllShoeSizes {
    /// Centimeters, one decimal place
    pub cm: f64,
    /// Mondopoint (mm), whole number
    pub mondopoint: f64,
    /// EU size, half sizes
    pub eu: f64,
    /// UK size, half sizes
    pub uk: f64,
    /// US men's size, half sizes
    pub us_men: f64,
    /// US women's size, half sizes
    pub us_women: f64,
}

impl AllShoeSizes {
    /// Value for one system
    #[must_use]
    pub const fn get(&self, system: ShoeSizeSystem) -> f64 {
        match system {
            ShoeSizeSystem::Cm => self.cm,
            ShoeSizeSystem::Mondopoint => self.mondopoint,
            ShoeSizeSystem::Eu => self.eu,
            ShoeSizeSystem::Uk => self.uk,
            ShoeSizeSystem::UsMen => self.us_men,
            ShoeSizeSystem::UsWomen => self.us_women,
        }
    }
}

/// Convert a size in any system to unrounded centimeters
#[must_use]
pub fn to_centimeters(value: f64, from: ShoeSizeSystem) -> f64 {
    match from {
        ShoeSizeSystem::Cm => value,
        ShoeSizeSystem::Mondopoint => value / MONDOPOINT_PER_CM,
        ShoeSizeSystem::Eu => value / EU_SCALE - EU_CM_OFFSET,
        ShoeSizeSystem::Uk => value / ANGLO_SIZES_PER_CM + ANGLO_ZERO_CM,
        ShoeSizeSystem::UsMen => (value - US_MEN_OFFSET) / ANGLO_SIZES_PER_CM + ANGLO_ZERO_CM,
        ShoeSizeSystem::UsWomen => (value - US_WOMEN_OFFSET) / ANGLO_SIZES_PER_CM + ANGLO_ZERO_CM,
    }
}

/// Convert centimeters to a size system, rounded to that system's display increment
#[must_use]
pub fn from_centimeters(cm: f64, to: ShoeSizeSystem) -> f64 {
    let uk = (cm - ANGLO_ZERO_CM) * ANGLO_SIZES_PER_CM;
    match to {
        ShoeSizeSystem::Cm => round_to_tenth(cm),
        ShoeSizeSystem::Mondopoint => (cm * MONDOPOINT_PER_CM).round(),
        ShoeSizeSystem::Eu => round_to_half((cm + EU_CM_OFFSET) * EU_SCALE),
        ShoeSizeSystem::Uk => round_to_half(uk),
        ShoeSizeSystem::UsMen => round_to_half(uk + US_MEN_OFFSET),
        ShoeSizeSystem::UsWomen => round_to_half(uk + US_WOMEN_OFFSET),
    }
}

/// Convert a size between two systems through centimeters
///
/// # Example
///
/// ```rust
/// use gearfit_core::models::ShoeSizeSystem;
/// use gearfit_intelligence::convert_shoe_size;
///
/// let mondopoint = convert_shoe_size(27.0, ShoeSizeSystem::Cm, ShoeSizeSystem::Mondopoint);
/// assert!((mondopoint - 270.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn convert_shoe_size(value: f64, from: ShoeSizeSystem, to: ShoeSizeSystem) -> f64 {
    from_centimeters(to_centimeters(value, from), to)
}

/// Express one measurement in all six systems
#[must_use]
pub fn get_all_shoe_sizes(measurement: &ShoeSizeMeasurement) -> AllShoeSizes {
    let cm = to_centimeters(measurement.value, measurement.system);
    AllShoeSizes {
        cm: from_centimeters(cm, ShoeSizeSystem::Cm),
        mondopoint: from_centimeters(cm, ShoeSizeSystem::Mondopoint),
        eu: from_centimeters(cm, ShoeSizeSystem::Eu),
        uk: from_centimeters(cm, ShoeSizeSystem::Uk),
        us_men: from_centimeters(cm, ShoeSizeSystem::UsMen),
        us_women: from_centimeters(cm, ShoeSizeSystem::UsWomen),
    }
}

/// All shoe sizes for a foot length in centimeters
#[must_use]
pub fn get_shoe_sizes_from_foot_length(foot_length_cm: f64) -> AllShoeSizes {
    get_all_shoe_sizes(&ShoeSizeMeasurement {
        value: foot_length_cm,
        system: ShoeSizeSystem::Cm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eu_inverse_formula() {
        let cm = to_centimeters(42.0, ShoeSizeSystem::Eu);
        assert!((cm - 26.5).abs() < 1e-9);
        assert!((from_centimeters(26.5, ShoeSizeSystem::Eu) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_us_sizes_offset_from_uk() {
        let sizes = get_shoe_sizes_from_foot_length(26.0);
        assert!((sizes.uk - 12.0).abs() < f64::EPSILON);
        assert!((sizes.us_men - 13.0).abs() < f64::EPSILON);
        assert!((sizes.us_women - 14.5).abs() < f64::EPSILON);
    }
}
