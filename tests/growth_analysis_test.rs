// ABOUTME: Integration tests for measurement staleness, growth trends and warning reasons
// ABOUTME: Uses a fixed clock so staleness windows and ages are exact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use gearfit::config::GrowthConfig;
use gearfit::intelligence::growth_analysis::{
    analyze_growth_trend_with_config, growth_warning_reason_with_config,
    is_measurement_stale_with_config,
};
use gearfit::intelligence::statistical_analysis::{DataPoint, StatisticalAnalyzer};
use gearfit::intelligence::{
    analyze_growth_trend, growth_warning_reason, is_measurement_stale_at, should_warn_growth_at,
    GrowthTrend, GrowthWarningReason,
};

use common::{child_measured_days_ago, fixed_now, history_entry};

#[test]
fn test_child_measured_180_days_ago_is_fresh() {
    let child = child_measured_days_ago("kid", 10, 180);
    assert!(!is_measurement_stale_at(&child, fixed_now()));
}

#[test]
fn test_child_measured_183_days_ago_is_stale() {
    let child = child_measured_days_ago("kid", 10, 183);
    assert!(is_measurement_stale_at(&child, fixed_now()));
}

#[test]
fn test_adults_are_never_stale() {
    let adult = child_measured_days_ago("parent", 40, 1_000);
    assert!(!is_measurement_stale_at(&adult, fixed_now()));

    let just_adult = child_measured_days_ago("teen", 18, 1_000);
    assert!(!is_measurement_stale_at(&just_adult, fixed_now()));
}

#[test]
fn test_custom_config_moves_the_adult_age() {
    let teen = child_measured_days_ago("teen", 17, 400);
    let config = GrowthConfig {
        adult_age_years: 16,
        ..GrowthConfig::default()
    };
    assert!(is_measurement_stale_at(&teen, fixed_now()));
    assert!(!is_measurement_stale_with_config(&teen, fixed_now(), &config));
}

#[test]
fn test_regression_on_exact_line() {
    let points = [
        DataPoint::new(0.0, 140.0),
        DataPoint::new(2.0, 141.0),
        DataPoint::new(4.0, 142.0),
        DataPoint::new(6.0, 143.0),
    ];
    let result = StatisticalAnalyzer::linear_regression(&points).unwrap();

    assert!((result.slope - 0.5).abs() < 1e-9);
    assert!((result.intercept - 140.0).abs() < 1e-9);
    assert!((result.r_squared - 1.0).abs() < 1e-9);
    assert_eq!(result.sample_size, 4);
    assert!((result.predict(8.0) - 144.0).abs() < 1e-9);
}

#[test]
fn test_regression_rejects_degenerate_input() {
    assert!(StatisticalAnalyzer::linear_regression(&[DataPoint::new(1.0, 2.0)]).is_none());
    assert!(StatisticalAnalyzer::linear_regression(&[
        DataPoint::new(3.0, 120.0),
        DataPoint::new(3.0, 121.0),
    ])
    .is_none());
}

#[test]
fn test_three_cm_in_six_months_is_growing() {
    let history = [history_entry("a", 140.0, 6.0), history_entry("b", 143.0, 0.0)];
    let trend = analyze_growth_trend(&history);

    assert!(trend.is_growing);
    assert!((trend.growth_rate_cm_per_month - 0.5).abs() < 1e-6);
}

#[test]
fn test_history_order_does_not_matter() {
    let ordered = [
        history_entry("a", 130.0, 12.0),
        history_entry("b", 131.0, 6.0),
        history_entry("c", 132.0, 0.0),
    ];
    let shuffled = [ordered[2].clone(), ordered[0].clone(), ordered[1].clone()];

    let a = analyze_growth_trend(&ordered);
    let b = analyze_growth_trend(&shuffled);
    assert!((a.growth_rate_cm_per_month - b.growth_rate_cm_per_month).abs() < 1e-9);
    assert!(!a.is_growing);
}

#[test]
fn test_short_or_flat_history_is_flat() {
    assert_eq!(analyze_growth_trend(&[]), GrowthTrend::FLAT);
    assert_eq!(
        analyze_growth_trend(&[history_entry("a", 140.0, 1.0)]),
        GrowthTrend::FLAT
    );
    assert_eq!(
        analyze_growth_trend(&[history_entry("a", 140.0, 1.0), history_entry("b", 142.0, 1.0)]),
        GrowthTrend::FLAT
    );
}

#[test]
fn test_custom_growing_threshold() {
    let history = [history_entry("a", 140.0, 12.0), history_entry("b", 143.0, 0.0)];
    let config = GrowthConfig {
        growing_threshold_cm_per_month: 0.2,
        ..GrowthConfig::default()
    };

    assert!(!analyze_growth_trend(&history).is_growing);
    assert!(analyze_growth_trend_with_config(&history, &config).is_growing);
}

#[test]
fn test_warning_reasons() {
    let growing_history = vec![history_entry("a", 140.0, 6.0), history_entry("b", 143.0, 0.0)];

    let fresh = child_measured_days_ago("fresh", 10, 30);
    assert_eq!(growth_warning_reason(&fresh, fixed_now()), None);
    assert!(!should_warn_growth_at(&fresh, fixed_now()));

    let stale = child_measured_days_ago("stale", 10, 200);
    assert_eq!(
        growth_warning_reason(&stale, fixed_now()),
        Some(GrowthWarningReason::Stale)
    );

    let mut growing = child_measured_days_ago("growing", 10, 30);
    growing.measurement_history.clone_from(&growing_history);
    assert_eq!(
        growth_warning_reason(&growing, fixed_now()),
        Some(GrowthWarningReason::Growing)
    );
    assert!(should_warn_growth_at(&growing, fixed_now()));

    let mut both = child_measured_days_ago("both", 10, 200);
    both.measurement_history = growing_history;
    assert_eq!(
        growth_warning_reason_with_config(&both, fixed_now(), &GrowthConfig::default()),
        Some(GrowthWarningReason::Both)
    );
}

#[test]
fn test_warning_reason_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&GrowthWarningReason::Both).unwrap(),
        "\"both\""
    );
}
