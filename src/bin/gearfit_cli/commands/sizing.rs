// ABOUTME: Single-person sizing commands for gearfit-cli
// ABOUTME: Shoe size conversion plus nordic, alpine, snowboard, hockey and helmet recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use anyhow::Result;
use gearfit::config::EngineConfig;
use gearfit::formatters::{format_length, format_shoe_size, format_ski_range};
use gearfit::intelligence::sizing::{
    calculate_alpine_boot_sizing, calculate_alpine_ski_sizing, calculate_alpine_waist_width,
    calculate_helmet_sizing, calculate_hockey_skate_size, calculate_nordic_boot_sizing,
    calculate_nordic_ski_sizing_by_model, calculate_snowboard_sizing, check_din_safety,
    AlpineBootSizing, AlpineSkiSizing, BootSizes, DinSafety, NordicSkiSizing, WaistWidthRange,
};
use gearfit::intelligence::{
    convert_shoe_size, get_shoe_sizes_from_foot_length, ShoeSizeMeasurement,
};
use gearfit::models::{
    Gender, NordicDiscipline, ShoeSizeSystem, SizingModel, SkateBrand, SkillLevel, Terrain,
};
use serde::Serialize;
use tracing::info;

use crate::helpers::args::{BodyArgs, FootArgs};
use crate::helpers::display::{print_json, print_summary};

/// Convert a size between two systems
pub fn convert(value: f64, from: ShoeSizeSystem, to: ShoeSizeSystem) -> Result<()> {
    let converted = ShoeSizeMeasurement {
        value: convert_shoe_size(value, from, to),
        system: to,
    };
    print_json(&converted)
}

/// Show a foot length in every system
pub fn shoe_sizes(foot_length: f64, config: &EngineConfig, summary: bool) -> Result<()> {
    let sizes = get_shoe_sizes_from_foot_length(foot_length);
    if summary {
        print_summary(&[
            ("Foot", format_length(foot_length, &config.display)),
            ("Shoe", format_shoe_size(&sizes, &config.display)),
        ]);
        return Ok(());
    }
    print_json(&sizes)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NordicOutput {
    skis: NordicSkiSizing,
    boot: BootSizes,
}

/// Nordic skis, poles and boots
pub fn nordic(
    body: &BodyArgs,
    discipline: NordicDiscipline,
    skill: SkillLevel,
    model: SizingModel,
    config: &EngineConfig,
    summary: bool,
) -> Result<()> {
    let measurements = body.to_measurements();
    let output = NordicOutput {
        skis: calculate_nordic_ski_sizing_by_model(&measurements, discipline, skill, model),
        boot: calculate_nordic_boot_sizing(&measurements),
    };
    info!(%discipline, %skill, %model, "Sized nordic skis");

    if summary {
        let prefs = &config.display;
        let mut lines = vec![
            ("Skis", format_ski_range(&output.skis.ski_length, prefs)),
            ("Poles", format_ski_range(&output.skis.pole_length, prefs)),
            (
                "Boots",
                format_shoe_size(&get_shoe_sizes_from_foot_length(body.feet.foot_length), prefs),
            ),
        ];
        if let Some(fa) = output.skis.fa_value {
            lines.push(("FA", format!("{}-{}", fa.min, fa.max)));
        }
        lines.extend(output.skis.notes.iter().map(|note| ("Note", note.clone())));
        print_summary(&lines);
        return Ok(());
    }
    print_json(&output)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AlpineOutput {
    skis: AlpineSkiSizing,
    waist_width: WaistWidthRange,
    boot: AlpineBootSizing,
    #[serde(skip_serializing_if = "Option::is_none")]
    din_check: Option<DinSafety>,
}

/// Alpine skis, DIN, waist width and boots
pub fn alpine(
    body: &BodyArgs,
    skill: SkillLevel,
    gender: Gender,
    terrain: Terrain,
    din_setting: Option<f64>,
    config: &EngineConfig,
    summary: bool,
) -> Result<()> {
    let measurements = body.to_measurements();
    let skis = calculate_alpine_ski_sizing(&measurements, skill, gender);
    let output = AlpineOutput {
        din_check: din_setting.map(|setting| check_din_safety(setting, &skis.din)),
        skis,
        waist_width: calculate_alpine_waist_width(terrain),
        boot: calculate_alpine_boot_sizing(&measurements, skill, gender),
    };

    if summary {
        let prefs = &config.display;
        let mut lines = vec![
            ("Skis", format_ski_range(&output.skis.ski_length, prefs)),
            (
                "DIN",
                format!(
                    "{}-{} ({})",
                    output.skis.din.min, output.skis.din.max, output.skis.din_recommended
                ),
            ),
            (
                "Waist",
                format!("{}-{} mm", output.waist_width.min, output.waist_width.max),
            ),
            ("Boot", format!("{} MP", output.boot.sizes.mondopoint)),
        ];
        if let Some(check) = output.din_check {
            lines.push(("DIN check", format!("{check:?}")));
        }
        print_summary(&lines);
        return Ok(());
    }
    print_json(&output)
}

/// Snowboard length, waist, stance and boots
pub fn snowboard(
    body: &BodyArgs,
    skill: SkillLevel,
    config: &EngineConfig,
    summary: bool,
) -> Result<()> {
    let sizing = calculate_snowboard_sizing(&body.to_measurements(), skill);
    if summary {
        let prefs = &config.display;
        print_summary(&[
            ("Board", format_ski_range(&sizing.board_length, prefs)),
            ("Waist", format!("{} mm minimum", sizing.min_waist_width)),
            ("Stance", format_ski_range(&sizing.stance_width, prefs)),
        ]);
        return Ok(());
    }
    print_json(&sizing)
}

/// Hockey skates
pub fn hockey(feet: &FootArgs, brand: SkateBrand) -> Result<()> {
    print_json(&calculate_hockey_skate_size(&feet.to_measurements(), brand))
}

/// Helmet size
pub fn helmet(head_circumference: f64) -> Result<()> {
    print_json(&calculate_helmet_sizing(head_circumference))
}
