// ABOUTME: Integration tests for shoe size conversion across the six size systems
// ABOUTME: Covers reference foot lengths, display rounding and conversion consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gearfit::intelligence::{
    convert_shoe_size, from_centimeters, get_all_shoe_sizes, get_shoe_sizes_from_foot_length,
    to_centimeters, ShoeSizeMeasurement,
};
use gearfit::models::ShoeSizeSystem;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_27cm_foot_in_every_system() {
    let sizes = get_shoe_sizes_from_foot_length(27.0);

    assert_close(sizes.cm, 27.0);
    assert_close(sizes.mondopoint, 270.0);
    assert_close(sizes.eu, 43.0);
    assert_close(sizes.uk, 15.0);
    assert_close(sizes.us_men, 16.0);
    assert_close(sizes.us_women, 17.5);
}

#[test]
fn test_get_reads_each_system() {
    let sizes = get_shoe_sizes_from_foot_length(27.0);
    for system in ShoeSizeSystem::ALL {
        assert_close(sizes.get(system), from_centimeters(27.0, system));
    }
}

#[test]
fn test_outputs_follow_display_increments() {
    for tenth in 150..320 {
        let cm = f64::from(tenth) / 10.0;
        for system in ShoeSizeSystem::ALL {
            let value = from_centimeters(cm, system);
            let steps = value / system.display_increment();
            assert!(
                (steps - steps.round()).abs() < 1e-6,
                "{system} value {value} for {cm} cm is not a multiple of its increment"
            );
        }
    }
}

#[test]
fn test_mondopoint_to_centimeters() {
    assert_close(
        convert_shoe_size(270.0, ShoeSizeSystem::Mondopoint, ShoeSizeSystem::Cm),
        27.0,
    );
    assert_close(
        convert_shoe_size(27.0, ShoeSizeSystem::Cm, ShoeSizeSystem::Mondopoint),
        270.0,
    );
    assert_close(to_centimeters(265.0, ShoeSizeSystem::Mondopoint), 26.5);
}

#[test]
fn test_eu_round_trip_is_stable() {
    let cm = to_centimeters(42.0, ShoeSizeSystem::Eu);
    assert_close(cm, 26.5);
    assert_close(from_centimeters(cm, ShoeSizeSystem::Eu), 42.0);
}

#[test]
fn test_round_trip_recovers_length_within_one_unit() {
    for tenth in 150..330 {
        let cm = f64::from(tenth) / 10.0;
        for system in ShoeSizeSystem::ALL {
            // Scales are linear, so one unit of a system is a fixed length in cm
            let unit_cm = (to_centimeters(1.0, system) - to_centimeters(0.0, system)).abs();
            let recovered = to_centimeters(from_centimeters(cm, system), system);
            assert!(
                (recovered - cm).abs() <= unit_cm + 1e-9,
                "{cm} cm through {system} came back as {recovered} cm"
            );
        }
    }
}

#[test]
fn test_uk_to_us_men_is_one_size_up() {
    assert_close(convert_shoe_size(8.0, ShoeSizeSystem::Uk, ShoeSizeSystem::UsMen), 9.0);
    assert_close(convert_shoe_size(8.0, ShoeSizeSystem::Uk, ShoeSizeSystem::UsWomen), 10.5);
}

#[test]
fn test_same_system_conversion_only_rounds() {
    assert_close(convert_shoe_size(42.3, ShoeSizeSystem::Eu, ShoeSizeSystem::Eu), 42.5);
    assert_close(convert_shoe_size(27.04, ShoeSizeSystem::Cm, ShoeSizeSystem::Cm), 27.0);
}

#[test]
fn test_all_sizes_from_any_system_agree() {
    let from_eu = get_all_shoe_sizes(&ShoeSizeMeasurement {
        value: 42.0,
        system: ShoeSizeSystem::Eu,
    });
    let from_cm = get_shoe_sizes_from_foot_length(26.5);
    assert_eq!(from_eu, from_cm);
}

#[test]
fn test_no_input_is_rejected() {
    let sizes = get_shoe_sizes_from_foot_length(0.0);
    assert_close(sizes.mondopoint, 0.0);
    assert!(sizes.uk < 0.0);
}

#[test]
fn test_system_names_parse() {
    assert_eq!("us-men".parse::<ShoeSizeSystem>().unwrap(), ShoeSizeSystem::UsMen);
    assert_eq!("MP".parse::<ShoeSizeSystem>().unwrap(), ShoeSizeSystem::Mondopoint);
    let error = "jp".parse::<ShoeSizeSystem>().unwrap_err();
    assert!(error.message.contains("Valid options"));
}
