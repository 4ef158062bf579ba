// ABOUTME: Equipment sizing calculations for nordic, alpine, snowboard, hockey and helmets
// ABOUTME: Shared range and boot size result types used by every sport module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! # Equipment Sizing
//!
//! All functions are pure: `(Measurements, skill, context) -> *Sizing`. Every
//! range produced here satisfies `min <= recommended <= max`.

use gearfit_core::models::{Measurements, ShoeSizeSystem};
use serde::{Deserialize, Serialize};

use crate::algorithms::shoe_size::from_centimeters;
use crate::utils::round_whole;

/// Alpine skis, boots, DIN and waist width
pub mod alpine;
/// Helmet size lookup
pub mod helmet;
/// Hockey skates
pub mod hockey;
/// Cross-country skis, poles and boots with vendor strategies
pub mod nordic;
/// Snowboards, stance and boots
pub mod snowboard;

pub use alpine::{
    calculate_alpine_boot_sizing, calculate_alpine_ski_sizing, calculate_alpine_waist_width,
    calculate_din, check_din_safety, classify_last_width, AlpineBootSizing, AlpineSkiSizing,
    DinRange, DinSafety, LastWidth, WaistWidthRange,
};
pub use helmet::{calculate_helmet_sizing, HelmetSizing};
pub use hockey::{calculate_hockey_skate_size, HockeySkateSizing};
pub use nordic::{
    calculate_nordic_boot_sizing, calculate_nordic_ski_sizing, calculate_nordic_ski_sizing_by_model,
    FaValueRange, NordicSkiSizing,
};
pub use snowboard::{calculate_snowboard_sizing, SnowboardSizing};

/// A whole-number range with a recommendation inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
    /// Recommended value
    pub recommended: u32,
}

impl SizeRange {
    /// Build a range, ordering the bounds and clamping the recommendation into them
    #[must_use]
    pub fn new(min: u32, max: u32, recommended: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            recommended: recommended.clamp(min, max),
        }
    }

    /// Build a range from unrounded bounds, rounding each value to a whole number
    #[must_use]
    pub fn from_bounds(min: f64, max: f64, recommended: f64) -> Self {
        Self::new(round_whole(min), round_whole(max), round_whole(recommended))
    }

    /// Whether `value` lies inside the range, bounds included
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Boot size expressed in mondopoint and the common shoe size systems
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootSizes {
    /// Mondopoint (mm) of the longer foot
    pub mondopoint: u32,
    /// EU size
    pub eu: f64,
    /// UK size
    pub uk: f64,
    /// US men's size
    pub us_men: f64,
    /// US women's size
    pub us_women: f64,
}

impl BootSizes {
    /// Boot sizes for the longer of the two feet
    #[must_use]
    pub fn from_measurements(measurements: &Measurements) -> Self {
        let foot_cm = measurements.max_foot_length();
        Self {
            mondopoint: round_whole(foot_cm * 10.0),
            eu: from_centimeters(foot_cm, ShoeSizeSystem::Eu),
            uk: from_centimeters(foot_cm, ShoeSizeSystem::Uk),
            us_men: from_centimeters(foot_cm, ShoeSizeSystem::UsMen),
            us_women: from_centimeters(foot_cm, ShoeSizeSystem::UsWomen),
        }
    }
}
