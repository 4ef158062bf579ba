// ABOUTME: Measurement staleness and growth trend detection for children and teenagers
// ABOUTME: Regresses height over time in average months and flags members who need re-measuring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! # Growth Analysis
//!
//! A member under the adult age whose current measurements are older than six
//! average months (30.4375 days each) is *stale*. A member whose height grows at
//! 0.3 cm/month or more across the recorded history is *growing*. Either
//! condition triggers a growth warning.

use chrono::{DateTime, Utc};
use gearfit_core::config::GrowthConfig;
use gearfit_core::constants::growth::SECONDS_PER_DAY;
use gearfit_core::models::{FamilyMember, MeasurementEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::statistical_analysis::{DataPoint, StatisticalAnalyzer};
use crate::utils::calculate_age_on;

/// Height trend across a measurement history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthTrend {
    /// Whether the slope meets the growing threshold
    pub is_growing: bool,
    /// Regression slope of height over time (cm/month)
    pub growth_rate_cm_per_month: f64,
}

impl GrowthTrend {
    /// No detectable growth
    pub const FLAT: Self = Self {
        is_growing: false,
        growth_rate_cm_per_month: 0.0,
    };
}

/// Why a growth warning badge is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthWarningReason {
    /// Measurements are out of date
    Stale,
    /// Recent history shows active growth
    Growing,
    /// Both of the above
    Both,
}

/// Average months elapsed between two instants
fn months_between(earlier: DateTime<Utc>, later: DateTime<Utc>, days_per_month: f64) -> f64 {
    let days = (later - earlier).num_seconds() as f64 / SECONDS_PER_DAY;
    days / days_per_month
}

/// Whether a minor's current measurements are older than the staleness window
#[must_use]
pub fn is_measurement_stale_with_config(
    member: &FamilyMember,
    now: DateTime<Utc>,
    config: &GrowthConfig,
) -> bool {
    let age = calculate_age_on(member.date_of_birth, now.date_naive());
    if age >= config.adult_age_years {
        return false;
    }
    let months = months_between(member.measurements.measured_at, now, config.days_per_month);
    months > config.stale_after_months
}

/// Staleness check at an explicit instant with default thresholds
#[must_use]
pub fn is_measurement_stale_at(member: &FamilyMember, now: DateTime<Utc>) -> bool {
    is_measurement_stale_with_config(member, now, &GrowthConfig::default())
}

/// Staleness check against the current UTC time
#[must_use]
pub fn is_measurement_stale(member: &FamilyMember) -> bool {
    is_measurement_stale_at(member, Utc::now())
}

/// Height growth trend over a measurement history
#[must_use]
pub fn analyze_growth_trend_with_config(
    history: &[MeasurementEntry],
    config: &GrowthConfig,
) -> GrowthTrend {
    if history.len() < 2 {
        return GrowthTrend::FLAT;
    }

    let mut entries: Vec<&MeasurementEntry> = history.iter().collect();
    entries.sort_by_key(|entry| entry.recorded_at);
    let first = entries[0].recorded_at;

    let points: Vec<DataPoint> = entries
        .iter()
        .map(|entry| {
            DataPoint::new(
                months_between(first, entry.recorded_at, config.days_per_month),
                entry.height,
            )
        })
        .collect();

    let Some(regression) = StatisticalAnalyzer::linear_regression(&points) else {
        debug!(entries = history.len(), "Degenerate growth history, reporting flat trend");
        return GrowthTrend::FLAT;
    };

    GrowthTrend {
        is_growing: regression.slope >= config.growing_threshold_cm_per_month,
        growth_rate_cm_per_month: regression.slope,
    }
}

/// Height growth trend with default thresholds
#[must_use]
pub fn analyze_growth_trend(history: &[MeasurementEntry]) -> GrowthTrend {
    analyze_growth_trend_with_config(history, &GrowthConfig::default())
}

/// Warning reason at an explicit instant, `None` when no warning applies
#[must_use]
pub fn growth_warning_reason_with_config(
    member: &FamilyMember,
    now: DateTime<Utc>,
    config: &GrowthConfig,
) -> Option<GrowthWarningReason> {
    let stale = is_measurement_stale_with_config(member, now, config);
    let growing = member.measurement_history.len() >= 2
        && analyze_growth_trend_with_config(&member.measurement_history, config).is_growing;

    match (stale, growing) {
        (true, true) => Some(GrowthWarningReason::Both),
        (true, false) => Some(GrowthWarningReason::Stale),
        (false, true) => Some(GrowthWarningReason::Growing),
        (false, false) => None,
    }
}

/// Warning reason at an explicit instant with default thresholds
#[must_use]
pub fn growth_warning_reason(
    member: &FamilyMember,
    now: DateTime<Utc>,
) -> Option<GrowthWarningReason> {
    growth_warning_reason_with_config(member, now, &GrowthConfig::default())
}

/// Whether a member's sizes should be re-checked: stale OR growing
#[must_use]
pub fn should_warn_growth_at(member: &FamilyMember, now: DateTime<Utc>) -> bool {
    growth_warning_reason(member, now).is_some()
}

/// Growth warning check against the current UTC time
#[must_use]
pub fn should_warn_growth(member: &FamilyMember) -> bool {
    should_warn_growth_at(member, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_months_between_uses_average_month() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = start + chrono::Duration::days(365);
        let months = months_between(start, end, 30.4375);
        assert!((months - 365.0 / 30.4375).abs() < 1e-9);
    }
}
