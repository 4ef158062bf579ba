// ABOUTME: Cross-country ski, pole and boot sizing with vendor-specific chart strategies
// ABOUTME: Generic, Fischer and Evosports rules are looked up by SizingModel, not branched inline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! # Nordic Sizing
//!
//! Ski length band: `height + offset_min ..= height + offset_max` where the
//! offsets depend on discipline. The recommendation sits at a skill-dependent
//! position inside the band (beginners short, experts long) and is then shifted
//! by the vendor's weight adjustment and clamped back into the band.

use gearfit_core::constants::nordic::{
    CLASSIC_OFFSET_CM, CLASSIC_POLE_MULTIPLIER, COMBI_OFFSET_CM, COMBI_POLE_MULTIPLIER,
    FISCHER_FA_CLASSIC, FISCHER_FA_COMBI, FISCHER_FA_SKATE, HEAVY_WEIGHT_KG, LIGHT_WEIGHT_KG,
    POLE_NARROWING_PER_TIER, SKATE_OFFSET_CM, SKATE_POLE_MULTIPLIER, SKILL_BAND_POSITION,
};
use gearfit_core::models::{Measurements, NordicDiscipline, SizingModel, SkillLevel};
use serde::{Deserialize, Serialize};

use super::{BootSizes, SizeRange};
use crate::utils::{round_to_tenth, round_whole};

const KICK_ZONE_NOTE: &str = "Classic skis: have the kick zone (wax pocket) marked for your weight by a dealer before waxing";
const SHORTER_END_NOTE: &str = "Evosports recommends the shorter end of the range for easier control";

/// Fischer FA (flex/camber) value range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaValueRange {
    /// Softest suitable FA value
    pub min: f64,
    /// Stiffest suitable FA value
    pub max: f64,
}

/// Cross-country ski and pole recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NordicSkiSizing {
    /// Discipline the skis are sized for
    pub discipline: NordicDiscipline,
    /// Skill level used for the recommendation
    pub skill_level: SkillLevel,
    /// Ski length (cm)
    pub ski_length: SizeRange,
    /// Pole length (cm)
    pub pole_length: SizeRange,
    /// Vendor FA value range, Fischer only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fa_value: Option<FaValueRange>,
    /// Vendor name, absent for the generic chart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Vendor advice
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Formula set for one vendor chart
#[derive(Debug, Clone, Copy)]
struct NordicModelRules {
    heavy_adjustment_cm: f64,
    light_adjustment_cm: f64,
    computes_fa_value: bool,
    note: Option<&'static str>,
    classic_note: Option<&'static str>,
}

const GENERIC_RULES: NordicModelRules = NordicModelRules {
    heavy_adjustment_cm: 2.0,
    light_adjustment_cm: -2.0,
    computes_fa_value: false,
    note: None,
    classic_note: None,
};

const FISCHER_RULES: NordicModelRules = NordicModelRules {
    heavy_adjustment_cm: 3.0,
    light_adjustment_cm: -2.0,
    computes_fa_value: true,
    note: None,
    classic_note: Some(KICK_ZONE_NOTE),
};

const EVOSPORTS_RULES: NordicModelRules = NordicModelRules {
    heavy_adjustment_cm: 2.0,
    light_adjustment_cm: -2.0,
    computes_fa_value: false,
    note: Some(SHORTER_END_NOTE),
    classic_note: None,
};

const fn rules_for(model: SizingModel) -> &'static NordicModelRules {
    match model {
        SizingModel::Generic => &GENERIC_RULES,
        SizingModel::Fischer => &FISCHER_RULES,
        SizingModel::Evosports => &EVOSPORTS_RULES,
    }
}

impl NordicModelRules {
    fn weight_adjustment(&self, weight_kg: f64) -> f64 {
        if weight_kg > HEAVY_WEIGHT_KG {
            self.heavy_adjustment_cm
        } else if weight_kg < LIGHT_WEIGHT_KG {
            self.light_adjustment_cm
        } else {
            0.0
        }
    }
}

const fn length_offsets(discipline: NordicDiscipline) -> (f64, f64) {
    match discipline {
        NordicDiscipline::Classic => CLASSIC_OFFSET_CM,
        NordicDiscipline::Skate => SKATE_OFFSET_CM,
        NordicDiscipline::Combi => COMBI_OFFSET_CM,
    }
}

const fn pole_multipliers(discipline: NordicDiscipline) -> (f64, f64) {
    match discipline {
        NordicDiscipline::Classic => CLASSIC_POLE_MULTIPLIER,
        NordicDiscipline::Skate => SKATE_POLE_MULTIPLIER,
        NordicDiscipline::Combi => COMBI_POLE_MULTIPLIER,
    }
}

const fn fa_multipliers(discipline: NordicDiscipline) -> (f64, f64) {
    match discipline {
        NordicDiscipline::Classic => FISCHER_FA_CLASSIC,
        NordicDiscipline::Skate => FISCHER_FA_SKATE,
        NordicDiscipline::Combi => FISCHER_FA_COMBI,
    }
}

/// Pole length band; higher skill raises the lower multiplier
fn pole_length(height: f64, discipline: NordicDiscipline, skill: SkillLevel) -> SizeRange {
    let (low, high) = pole_multipliers(discipline);
    let low = POLE_NARROWING_PER_TIER.mul_add(skill.tier() as f64, low).min(high);
    let min = height * low;
    let max = height * high;
    SizeRange::from_bounds(min, max, (min + max) / 2.0)
}

/// Generic nordic ski and pole sizing
///
/// Identical to [`calculate_nordic_ski_sizing_by_model`] with
/// [`SizingModel::Generic`].
#[must_use]
pub fn calculate_nordic_ski_sizing(
    measurements: &Measurements,
    discipline: NordicDiscipline,
    skill: SkillLevel,
) -> NordicSkiSizing {
    calculate_nordic_ski_sizing_by_model(measurements, discipline, skill, SizingModel::Generic)
}

/// Nordic ski and pole sizing using a vendor chart
#[must_use]
pub fn calculate_nordic_ski_sizing_by_model(
    measurements: &Measurements,
    discipline: NordicDiscipline,
    skill: SkillLevel,
    model: SizingModel,
) -> NordicSkiSizing {
    let rules = rules_for(model);
    let height = measurements.height;
    let (offset_min, offset_max) = length_offsets(discipline);

    let min = height + offset_min;
    let max = height + offset_max;
    let position = SKILL_BAND_POSITION[skill.tier()];
    let recommended =
        (max - min).mul_add(position, min) + rules.weight_adjustment(measurements.weight);

    let fa_value = rules.computes_fa_value.then(|| {
        let (low, high) = fa_multipliers(discipline);
        FaValueRange {
            min: round_to_tenth(measurements.weight * low),
            max: round_to_tenth(measurements.weight * high),
        }
    });

    let mut notes = Vec::new();
    if let Some(note) = rules.note {
        notes.push(note.to_owned());
    }
    if discipline == NordicDiscipline::Classic {
        if let Some(note) = rules.classic_note {
            notes.push(note.to_owned());
        }
    }

    NordicSkiSizing {
        discipline,
        skill_level: skill,
        ski_length: SizeRange::new(round_whole(min), round_whole(max), round_whole(recommended)),
        pole_length: pole_length(height, discipline, skill),
        fa_value,
        model_name: model.vendor_name().map(str::to_owned),
        notes,
    }
}

/// Nordic boot size from the longer foot
#[must_use]
pub fn calculate_nordic_boot_sizing(measurements: &Measurements) -> BootSizes {
    BootSizes::from_measurements(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_table_weight_bands() {
        let fischer = rules_for(SizingModel::Fischer);
        let generic = rules_for(SizingModel::Generic);
        let evosports = rules_for(SizingModel::Evosports);
        assert!((fischer.weight_adjustment(81.0) - 3.0).abs() < f64::EPSILON);
        assert!((generic.weight_adjustment(81.0) - 2.0).abs() < f64::EPSILON);
        assert!(evosports.weight_adjustment(80.0).abs() < f64::EPSILON);
        assert!((evosports.weight_adjustment(59.9) + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pole_band_narrows_with_skill() {
        let beginner = pole_length(180.0, NordicDiscipline::Skate, SkillLevel::Beginner);
        let expert = pole_length(180.0, NordicDiscipline::Skate, SkillLevel::Expert);
        assert!(expert.max - expert.min <= beginner.max - beginner.min);
        assert_eq!(beginner.max, expert.max);
    }
}
