// ABOUTME: Snowboard length, minimum waist width, stance width and boot sizing
// ABOUTME: Bucketed weight adjustments and a mondopoint step table for toe-drag clearance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use gearfit_core::constants::snowboard::{
    HEAVY_ADJUSTMENT_CM, LENGTH_OFFSET_CM, LENGTH_SPAN_CM, NEUTRAL_WEIGHT_MAX_KG, SKILL_BONUS_CM,
    STANCE_HEIGHT_RATIO, STANCE_SPREAD_CM, WAIST_BY_MONDOPOINT, WAIST_LARGEST_MM, WEIGHT_BUCKETS,
};
use gearfit_core::models::{Measurements, SkillLevel};
use serde::{Deserialize, Serialize};

use super::{BootSizes, SizeRange};

/// Snowboard recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowboardSizing {
    /// Skill level used for the recommendation
    pub skill_level: SkillLevel,
    /// Board length (cm)
    pub board_length: SizeRange,
    /// Minimum waist width for the rider's boots (mm)
    pub min_waist_width: u32,
    /// Stance width (cm)
    pub stance_width: SizeRange,
    /// Boot sizes for the longer foot
    pub boot: BootSizes,
}

/// Board length adjustment for rider weight
fn weight_adjustment(weight_kg: f64) -> f64 {
    if let Some((_, adjustment)) = WEIGHT_BUCKETS.iter().find(|(upper, _)| weight_kg < *upper) {
        *adjustment
    } else if weight_kg <= NEUTRAL_WEIGHT_MAX_KG {
        0.0
    } else {
        HEAVY_ADJUSTMENT_CM
    }
}

/// Minimum waist width so boots of this mondopoint do not drag
#[must_use]
pub fn min_waist_width(mondopoint: u32) -> u32 {
    WAIST_BY_MONDOPOINT
        .iter()
        .find(|(upper, _)| mondopoint < *upper)
        .map_or(WAIST_LARGEST_MM, |(_, waist)| *waist)
}

/// Snowboard length, waist width, stance and boot recommendation
#[must_use]
pub fn calculate_snowboard_sizing(
    measurements: &Measurements,
    skill: SkillLevel,
) -> SnowboardSizing {
    let base = measurements.height + LENGTH_OFFSET_CM + weight_adjustment(measurements.weight);
    let board_length = SizeRange::from_bounds(
        base,
        base + LENGTH_SPAN_CM,
        base + SKILL_BONUS_CM[skill.tier()],
    );

    let stance = measurements.height * STANCE_HEIGHT_RATIO;
    let stance_width =
        SizeRange::from_bounds(stance - STANCE_SPREAD_CM, stance + STANCE_SPREAD_CM, stance);

    let boot = BootSizes::from_measurements(measurements);

    SnowboardSizing {
        skill_level: skill,
        board_length,
        min_waist_width: min_waist_width(boot.mondopoint),
        stance_width,
        boot,
    }
}
