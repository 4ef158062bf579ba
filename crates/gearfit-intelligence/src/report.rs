// ABOUTME: Per-member sizing report combining every recommendation that applies to them
// ABOUTME: Sports come from the member's skill map; helmet sizing needs a head circumference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use chrono::{DateTime, Utc};
use gearfit_core::config::GrowthConfig;
use gearfit_core::models::{FamilyMember, SizingModel, SkateBrand, Sport, Terrain};
use serde::{Deserialize, Serialize};

use crate::algorithms::shoe_size::{get_shoe_sizes_from_foot_length, AllShoeSizes};
use crate::growth_analysis::{growth_warning_reason_with_config, GrowthWarningReason};
use crate::sizing::{
    calculate_alpine_boot_sizing, calculate_alpine_ski_sizing, calculate_alpine_waist_width,
    calculate_helmet_sizing, calculate_hockey_skate_size, calculate_nordic_boot_sizing,
    calculate_nordic_ski_sizing_by_model, calculate_snowboard_sizing, AlpineBootSizing,
    AlpineSkiSizing, BootSizes, HelmetSizing, HockeySkateSizing, NordicSkiSizing, SnowboardSizing,
    WaistWidthRange,
};
use crate::utils::calculate_age_on;

/// Every recommendation for one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingReport {
    /// Member id
    pub member_id: String,
    /// Member name
    pub member_name: String,
    /// Age in whole years
    pub age: u32,
    /// Why sizes should be re-checked, if they should
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_warning: Option<GrowthWarningReason>,
    /// Street shoe sizes for the longer foot
    pub shoe_sizes: AllShoeSizes,
    /// One entry per practiced nordic discipline
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nordic_skis: Vec<NordicSkiSizing>,
    /// Nordic boots, when any nordic discipline is practiced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nordic_boot: Option<BootSizes>,
    /// Alpine skis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpine_ski: Option<AlpineSkiSizing>,
    /// Alpine waist width for all-mountain terrain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpine_waist_width: Option<WaistWidthRange>,
    /// Alpine boots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpine_boot: Option<AlpineBootSizing>,
    /// Snowboard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snowboard: Option<SnowboardSizing>,
    /// Hockey skates (Bauer chart)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hockey_skate: Option<HockeySkateSizing>,
    /// Helmet, when head circumference is recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helmet: Option<HelmetSizing>,
}

/// Build the sizing report for a member as of `now` with default growth thresholds
#[must_use]
pub fn build_sizing_report(
    member: &FamilyMember,
    model: SizingModel,
    now: DateTime<Utc>,
) -> SizingReport {
    build_sizing_report_with_config(member, model, now, &GrowthConfig::default())
}

/// Build the sizing report for a member as of `now`
///
/// The growth warning uses `growth`, so it agrees with the staleness and trend
/// checks run under the same configuration.
#[must_use]
pub fn build_sizing_report_with_config(
    member: &FamilyMember,
    model: SizingModel,
    now: DateTime<Utc>,
    growth: &GrowthConfig,
) -> SizingReport {
    let measurements = &member.measurements;

    let nordic_skis: Vec<NordicSkiSizing> = member
        .skill_levels
        .iter()
        .filter_map(|(sport, skill)| {
            sport.nordic_discipline().map(|discipline| {
                calculate_nordic_ski_sizing_by_model(measurements, discipline, *skill, model)
            })
        })
        .collect();
    let nordic_boot = (!nordic_skis.is_empty()).then(|| calculate_nordic_boot_sizing(measurements));

    let alpine_skill = member.skill_for(Sport::Alpine);

    SizingReport {
        member_id: member.id.clone(),
        member_name: member.name.clone(),
        age: calculate_age_on(member.date_of_birth, now.date_naive()),
        growth_warning: growth_warning_reason_with_config(member, now, growth),
        shoe_sizes: get_shoe_sizes_from_foot_length(measurements.max_foot_length()),
        nordic_skis,
        nordic_boot,
        alpine_ski: alpine_skill
            .map(|skill| calculate_alpine_ski_sizing(measurements, skill, member.gender)),
        alpine_waist_width: alpine_skill
            .map(|_| calculate_alpine_waist_width(Terrain::AllMountain)),
        alpine_boot: alpine_skill
            .map(|skill| calculate_alpine_boot_sizing(measurements, skill, member.gender)),
        snowboard: member
            .skill_for(Sport::Snowboard)
            .map(|skill| calculate_snowboard_sizing(measurements, skill)),
        hockey_skate: member
            .skill_for(Sport::Hockey)
            .map(|_| calculate_hockey_skate_size(measurements, SkateBrand::default())),
        helmet: measurements
            .head_circumference
            .map(calculate_helmet_sizing),
    }
}
