// ABOUTME: Alpine ski length, DIN release setting, waist width and boot sizing
// ABOUTME: Empirical skill, gender and weight offsets with DIN clamped to the 1-12 scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! # Alpine Sizing
//!
//! Ski length is a band below body height chosen by skill tier, shifted down
//! for female skiers and stretched or shortened at the top by weight. The DIN
//! setting starts from a weight table, then adds height and skill adjustments.

use gearfit_core::constants::alpine::{
    DIN_HEAVIEST, DIN_HEIGHT_ADJUSTMENT, DIN_MAX, DIN_MIN, DIN_RANGE_SPREAD, DIN_SHORT_HEIGHT_CM,
    DIN_SKILL_ADJUSTMENT, DIN_TALL_HEIGHT_CM, DIN_WEIGHT_TABLE, FEMALE_OFFSET_CM, FLEX_ADJUSTMENT,
    FLEX_BY_SKILL, FLEX_HEAVY_WEIGHT_KG, FLEX_LIGHT_WEIGHT_KG, HEAVY_WEIGHT_KG,
    LAST_MEDIUM_MAX_MM, LAST_NARROW_BELOW_MM, LAST_WIDE_MAX_MM, LAST_WIDTH_OFFSET_MM,
    LIGHT_WEIGHT_KG, SKILL_OFFSETS_CM, WAIST_ALL_MOUNTAIN_MM, WAIST_GROOMED_MM, WAIST_POWDER_MM,
    WEIGHT_ADJUSTMENT_CM,
};
use gearfit_core::models::{Gender, Measurements, SkillLevel, Terrain};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BootSizes, SizeRange};
use crate::utils::{round_to_half, round_whole};

/// Binding release setting range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DinRange {
    /// Lowest acceptable setting
    pub min: f64,
    /// Highest acceptable setting
    pub max: f64,
}

/// Outcome of comparing a binding setting against a recommended range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DinSafety {
    /// Inside the range
    Safe,
    /// Releases too easily
    TooLow,
    /// Releases too late
    TooHigh,
}

/// Alpine ski recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlpineSkiSizing {
    /// Skill level used for the recommendation
    pub skill_level: SkillLevel,
    /// Ski length (cm)
    pub ski_length: SizeRange,
    /// Acceptable DIN range
    pub din: DinRange,
    /// Recommended DIN setting
    pub din_recommended: f64,
}

/// Ski waist width band (mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaistWidthRange {
    /// Terrain the band is for
    pub terrain: Terrain,
    /// Narrowest waist (mm)
    pub min: u32,
    /// Widest waist (mm)
    pub max: u32,
}

/// Boot last width class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LastWidth {
    /// Below 98 mm
    Narrow,
    /// 98 to 101 mm
    #[default]
    Medium,
    /// 102 to 104 mm
    Wide,
    /// Above 104 mm
    ExtraWide,
}

/// Alpine boot recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlpineBootSizing {
    /// Mondopoint and shoe sizes
    #[serde(flatten)]
    pub sizes: BootSizes,
    /// Shell size in whole centimeters
    pub shell_size: u32,
    /// Last width class
    pub last_width: LastWidth,
    /// Estimated last width (mm), absent when no foot width was measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_width_mm: Option<u32>,
    /// Flex index range
    pub flex: SizeRange,
}

/// Alpine ski length and DIN recommendation
#[must_use]
pub fn calculate_alpine_ski_sizing(
    measurements: &Measurements,
    skill: SkillLevel,
    gender: Gender,
) -> AlpineSkiSizing {
    let (offset_min, offset_max) = SKILL_OFFSETS_CM[skill.tier()];
    let gender_offset = if gender == Gender::Female {
        FEMALE_OFFSET_CM
    } else {
        0.0
    };
    let weight_offset = if measurements.weight > HEAVY_WEIGHT_KG {
        WEIGHT_ADJUSTMENT_CM
    } else if measurements.weight < LIGHT_WEIGHT_KG {
        -WEIGHT_ADJUSTMENT_CM
    } else {
        0.0
    };

    let min = measurements.height + offset_min + gender_offset;
    let max = measurements.height + offset_max + gender_offset + weight_offset;
    let (din, din_recommended) = calculate_din(measurements.weight, measurements.height, skill);

    AlpineSkiSizing {
        skill_level: skill,
        ski_length: SizeRange::from_bounds(min, max, (min + max) / 2.0),
        din,
        din_recommended,
    }
}

/// DIN range and recommended setting from weight, height and skill
///
/// Returns `(range, recommended)`; both are rounded to half steps and clamped
/// to `[1, 12]`.
#[must_use]
pub fn calculate_din(weight_kg: f64, height_cm: f64, skill: SkillLevel) -> (DinRange, f64) {
    let base = DIN_WEIGHT_TABLE
        .iter()
        .find(|(upper, _)| weight_kg < *upper)
        .map_or(DIN_HEAVIEST, |(_, din)| *din);

    let height_adjustment = if height_cm >= DIN_TALL_HEIGHT_CM {
        DIN_HEIGHT_ADJUSTMENT
    } else if height_cm < DIN_SHORT_HEIGHT_CM {
        -DIN_HEIGHT_ADJUSTMENT
    } else {
        0.0
    };

    let raw = base + height_adjustment + DIN_SKILL_ADJUSTMENT[skill.tier()];
    let rounded = round_to_half(raw);
    let recommended = rounded.clamp(DIN_MIN, DIN_MAX);
    if (recommended - rounded).abs() > f64::EPSILON {
        debug!(raw, recommended, "DIN setting clamped to scale");
    }

    let range = DinRange {
        min: (recommended - DIN_RANGE_SPREAD).clamp(DIN_MIN, DIN_MAX),
        max: (recommended + DIN_RANGE_SPREAD).clamp(DIN_MIN, DIN_MAX),
    };
    (range, recommended)
}

/// Compare a binding setting with a recommended range, bounds inclusive
#[must_use]
pub fn check_din_safety(setting: f64, range: &DinRange) -> DinSafety {
    if setting < range.min {
        DinSafety::TooLow
    } else if setting > range.max {
        DinSafety::TooHigh
    } else {
        DinSafety::Safe
    }
}

/// Waist width band for a terrain preference
#[must_use]
pub const fn calculate_alpine_waist_width(terrain: Terrain) -> WaistWidthRange {
    let (min, max) = match terrain {
        Terrain::Groomed => WAIST_GROOMED_MM,
        Terrain::AllMountain => WAIST_ALL_MOUNTAIN_MM,
        Terrain::Powder => WAIST_POWDER_MM,
    };
    WaistWidthRange { terrain, min, max }
}

/// Classify an estimated last width in millimeters
#[must_use]
pub const fn classify_last_width(width_mm: u32) -> LastWidth {
    if width_mm < LAST_NARROW_BELOW_MM {
        LastWidth::Narrow
    } else if width_mm <= LAST_MEDIUM_MAX_MM {
        LastWidth::Medium
    } else if width_mm <= LAST_WIDE_MAX_MM {
        LastWidth::Wide
    } else {
        LastWidth::ExtraWide
    }
}

/// Estimated last width (mm) from the wider measured foot, if any
pub(crate) fn estimate_last_width_mm(measurements: &Measurements) -> Option<u32> {
    measurements
        .max_foot_width()
        .map(|width_cm| round_whole(width_cm.mul_add(10.0, LAST_WIDTH_OFFSET_MM)))
}

fn flex_range(measurements: &Measurements, skill: SkillLevel, gender: Gender) -> SizeRange {
    let (base_min, base_max) = FLEX_BY_SKILL[skill.tier()];
    let mut adjustment = 0_i32;
    if measurements.weight < FLEX_LIGHT_WEIGHT_KG {
        adjustment -= FLEX_ADJUSTMENT;
    } else if measurements.weight > FLEX_HEAVY_WEIGHT_KG {
        adjustment += FLEX_ADJUSTMENT;
    }
    if gender == Gender::Female {
        adjustment -= FLEX_ADJUSTMENT;
    }

    let min = base_min.saturating_add_signed(adjustment);
    let max = base_max.saturating_add_signed(adjustment);
    SizeRange::new(min, max, (min + max) / 2)
}

/// Alpine boot shell, last width and flex recommendation
#[must_use]
pub fn calculate_alpine_boot_sizing(
    measurements: &Measurements,
    skill: SkillLevel,
    gender: Gender,
) -> AlpineBootSizing {
    let sizes = BootSizes::from_measurements(measurements);
    let last_width_mm = estimate_last_width_mm(measurements);

    AlpineBootSizing {
        sizes,
        shell_size: round_whole(f64::from(sizes.mondopoint) / 10.0),
        last_width: last_width_mm.map_or(LastWidth::Medium, classify_last_width),
        last_width_mm,
        flex: flex_range(measurements, skill, gender),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_width_boundaries() {
        assert_eq!(classify_last_width(97), LastWidth::Narrow);
        assert_eq!(classify_last_width(98), LastWidth::Medium);
        assert_eq!(classify_last_width(101), LastWidth::Medium);
        assert_eq!(classify_last_width(102), LastWidth::Wide);
        assert_eq!(classify_last_width(104), LastWidth::Wide);
        assert_eq!(classify_last_width(105), LastWidth::ExtraWide);
    }

    #[test]
    fn test_din_is_clamped() {
        let (range, recommended) = calculate_din(20.0, 120.0, SkillLevel::Beginner);
        assert!((recommended - 1.0).abs() < f64::EPSILON);
        assert!((range.min - 1.0).abs() < f64::EPSILON);

        let (range, recommended) = calculate_din(120.0, 195.0, SkillLevel::Expert);
        assert!((recommended - 11.0).abs() < f64::EPSILON);
        assert!((range.max - 12.0).abs() < f64::EPSILON);
    }
}
