// ABOUTME: Integration tests for preference-driven display formatting
// ABOUTME: Covers shoe size systems, centimeter and inch lengths and ski range rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gearfit::config::DisplayPreferences;
use gearfit::formatters::{format_length, format_shoe_size, format_ski_range, length_in_unit};
use gearfit::intelligence::get_shoe_sizes_from_foot_length;
use gearfit::intelligence::sizing::SizeRange;
use gearfit::intelligence::utils::format_size_range;
use gearfit::models::{LengthUnit, ShoeSizeSystem};

fn prefs(shoe_size_system: ShoeSizeSystem, length_unit: LengthUnit) -> DisplayPreferences {
    DisplayPreferences {
        shoe_size_system,
        length_unit,
        ..DisplayPreferences::default()
    }
}

#[test]
fn test_shoe_size_in_each_system() {
    let sizes = get_shoe_sizes_from_foot_length(27.0);

    assert_eq!(format_shoe_size(&sizes, &DisplayPreferences::default()), "43 EU");
    assert_eq!(
        format_shoe_size(&sizes, &prefs(ShoeSizeSystem::UsMen, LengthUnit::Cm)),
        "16 US M"
    );
    assert_eq!(
        format_shoe_size(&sizes, &prefs(ShoeSizeSystem::Mondopoint, LengthUnit::Cm)),
        "270 MP"
    );
    assert_eq!(
        format_shoe_size(&sizes, &prefs(ShoeSizeSystem::Cm, LengthUnit::Cm)),
        "27 cm"
    );
}

#[test]
fn test_lengths_in_centimeters_and_inches() {
    let cm = DisplayPreferences::default();
    let inches = prefs(ShoeSizeSystem::Eu, LengthUnit::In);

    assert_eq!(format_length(170.0, &cm), "170 cm");
    assert_eq!(format_length(170.0, &inches), "66.9 in");
    assert_eq!(format_length(254.0, &inches), "100 in");
    assert!((length_in_unit(2.54, LengthUnit::In) - 1.0).abs() < 1e-9);
}

#[test]
fn test_ski_range_rendering() {
    let range = SizeRange::new(190, 200, 193);

    assert_eq!(
        format_ski_range(&range, &DisplayPreferences::default()),
        "190-200 cm (193 cm)"
    );
    assert_eq!(
        format_ski_range(&range, &prefs(ShoeSizeSystem::Eu, LengthUnit::In)),
        "74.8-78.7 in (76 in)"
    );
}

#[test]
fn test_single_value_range_collapses() {
    assert_eq!(format_size_range(150, 150, "cm"), "150 cm");
    assert_eq!(format_size_range(150, 160, "cm"), "150-160 cm");
    assert_eq!(
        format_ski_range(&SizeRange::new(150, 150, 150), &DisplayPreferences::default()),
        "150 cm (150 cm)"
    );
}
