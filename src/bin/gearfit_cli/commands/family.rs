// ABOUTME: Family-document commands for gearfit-cli
// ABOUTME: Gear notifications, growth checks and per-member sizing reports from a JSON file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::path::Path;

use anyhow::{anyhow, Result};
use chrono::Utc;
use gearfit::config::EngineConfig;
use gearfit::input::load_family_data;
use gearfit::intelligence::growth_analysis::{
    analyze_growth_trend_with_config, growth_warning_reason_with_config,
    is_measurement_stale_with_config,
};
use gearfit::intelligence::{
    build_sizing_report_with_config, generate_notifications, generate_notifications_for_year,
    GrowthTrend, GrowthWarningReason, SizingReport,
};
use gearfit::models::SizingModel;
use serde::Serialize;
use tracing::info;

use crate::helpers::display::print_json;

/// Gear alerts for every item in the document
pub fn notifications(input: &Path, year: Option<i32>) -> Result<()> {
    let family = load_family_data(input)?;
    let alerts = match year {
        Some(year) => generate_notifications_for_year(&family.members, &family.gear, year),
        None => generate_notifications(&family.members, &family.gear),
    };
    info!(count = alerts.len(), "Generated notifications");
    print_json(&alerts)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GrowthSummary {
    member_id: String,
    name: String,
    stale: bool,
    trend: GrowthTrend,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<GrowthWarningReason>,
}

/// Staleness, trend and warning per member
pub fn growth(input: &Path, config: &EngineConfig) -> Result<()> {
    let family = load_family_data(input)?;
    let now = Utc::now();
    let growth = &config.growth;

    let summaries: Vec<GrowthSummary> = family
        .members
        .iter()
        .map(|member| GrowthSummary {
            member_id: member.id.clone(),
            name: member.name.clone(),
            stale: is_measurement_stale_with_config(member, now, growth),
            trend: analyze_growth_trend_with_config(&member.measurement_history, growth),
            warning: growth_warning_reason_with_config(member, now, growth),
        })
        .collect();
    print_json(&summaries)
}

/// Sizing reports for every member, or a single one
pub fn report(
    input: &Path,
    member_id: Option<&str>,
    model: SizingModel,
    config: &EngineConfig,
) -> Result<()> {
    let family = load_family_data(input)?;
    let now = Utc::now();
    let growth = &config.growth;

    let reports: Vec<SizingReport> = match member_id {
        Some(id) => {
            let member = family
                .member(id)
                .ok_or_else(|| anyhow!("No member with id '{id}' in {}", input.display()))?;
            vec![build_sizing_report_with_config(member, model, now, growth)]
        }
        None => family
            .members
            .iter()
            .map(|member| build_sizing_report_with_config(member, model, now, growth))
            .collect(),
    };
    print_json(&reports)
}
