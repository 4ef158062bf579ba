// ABOUTME: Integration tests for heuristic gear photo analysis and ski spec string parsing
// ABOUTME: Covers confidence scoring, hint-driven templates and canonical spec formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gearfit::intelligence::gear_analysis::score_confidence;
use gearfit::intelligence::parsers::{
    format_alpine_ski_details, format_profile, format_ski_details, parse_profile, parse_radius,
    parse_ski_size,
};
use gearfit::intelligence::{
    analyze_gear_photos, AnalysisHints, GearPhotoAnalyzer, HeuristicGearAnalyzer,
};
use gearfit::models::{
    AlpineSkiDetails, ExtendedGearDetails, GearCondition, GearType, SkiProfile, Sport,
};

fn photos(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("photo-{i}.jpg")).collect()
}

fn hints(sport: Option<Sport>, gear_type: Option<GearType>, brand: Option<&str>) -> AnalysisHints {
    AnalysisHints {
        sport,
        gear_type,
        brand: brand.map(str::to_owned),
    }
}

#[test]
fn test_full_hints_with_many_photos_hit_the_cap() {
    let all = hints(Some(Sport::Alpine), Some(GearType::Ski), Some("Atomic"));
    let result = analyze_gear_photos(&photos(3), Some(&all));

    assert!((result.confidence - 0.95).abs() < 1e-9);
    assert_eq!(result.sport, Some(Sport::Alpine));
    assert_eq!(result.gear_type, Some(GearType::Ski));
    assert_eq!(result.brand.as_deref(), Some("Atomic"));
    assert_eq!(result.model.as_deref(), Some("Redster"));
    assert_eq!(result.condition, Some(GearCondition::Good));
    assert!(result.notes.is_empty());
    assert!(matches!(
        result.extended_details,
        Some(ExtendedGearDetails::AlpineSki(_))
    ));
}

#[test]
fn test_confidence_always_in_unit_interval() {
    let hint_sets = [
        AnalysisHints::default(),
        hints(Some(Sport::Hockey), None, None),
        hints(None, Some(GearType::Boot), Some("Lange")),
        hints(Some(Sport::Snowboard), Some(GearType::Snowboard), Some("Burton")),
    ];
    for count in 0..6 {
        for hint in &hint_sets {
            let confidence = score_confidence(count, hint);
            assert!(confidence > 0.0 && confidence <= 0.95, "{count} photos: {confidence}");
            if count == 0 {
                assert!(confidence <= 0.45);
            }
            if hint.is_empty() {
                assert!(confidence <= 0.5);
            }
        }
    }
}

#[test]
fn test_no_photos_adds_note_and_no_condition() {
    let result = analyze_gear_photos(&[], Some(&hints(Some(Sport::Hockey), None, None)));

    assert!(result.confidence <= 0.45);
    assert_eq!(result.notes.len(), 1);
    assert!(result.condition.is_none());
    assert_eq!(result.gear_type, Some(GearType::Skate));
    assert_eq!(result.brand.as_deref(), Some("Bauer"));
}

#[test]
fn test_no_hints_gives_generic_guess() {
    let result = HeuristicGearAnalyzer.analyze(&photos(1), None);

    assert!((result.confidence - 0.5).abs() < 1e-9);
    assert!(result.sport.is_none());
    assert!(result.gear_type.is_none());
    assert!(result.model.is_none());
    assert!(result.extended_details.is_none());
}

#[test]
fn test_foreign_brand_hint_drops_template_model() {
    let result = analyze_gear_photos(
        &photos(2),
        Some(&hints(Some(Sport::Alpine), Some(GearType::Ski), Some("Rossignol"))),
    );

    assert_eq!(result.brand.as_deref(), Some("Rossignol"));
    assert!(result.model.is_none());
    assert!(result.size.is_some());
}

#[test]
fn test_gear_type_hint_infers_sport() {
    let result = analyze_gear_photos(
        &photos(1),
        Some(&hints(None, Some(GearType::Snowboard), None)),
    );
    assert_eq!(result.sport, Some(Sport::Snowboard));
    assert!(matches!(
        result.extended_details,
        Some(ExtendedGearDetails::Snowboard(_))
    ));
}

#[test]
fn test_parse_ski_size() {
    assert_eq!(parse_ski_size("170"), Some(170));
    assert_eq!(parse_ski_size("170cm"), Some(170));
    assert_eq!(parse_ski_size("  165 CM"), Some(165));
    assert_eq!(parse_ski_size("165.5cm"), Some(166));
    assert_eq!(parse_ski_size("length 170"), None);
    assert_eq!(parse_ski_size(""), None);
}

#[test]
fn test_parse_profile() {
    let expected = SkiProfile {
        tip: 121,
        waist: 68,
        tail: 103,
    };
    assert_eq!(parse_profile("121/68/103"), Some(expected));
    assert_eq!(parse_profile("121-68-103"), Some(expected));
    assert_eq!(parse_profile(" 121 / 68 / 103 "), Some(expected));
    assert_eq!(parse_profile("121/68"), None);
}

#[test]
fn test_parse_radius() {
    assert_eq!(parse_radius("R15.5"), Some(15.5));
    assert_eq!(parse_radius("14m"), Some(14.0));
    assert_eq!(parse_radius("radius"), None);
}

#[test]
fn test_format_ski_details() {
    let profile = SkiProfile {
        tip: 121,
        waist: 68,
        tail: 103,
    };
    assert_eq!(format_profile(&profile), "121/68/103");
    assert_eq!(
        format_ski_details(Some(170), Some(&profile), Some(15.5)),
        "170cm | 121/68/103 | R15.5m"
    );
    assert_eq!(format_ski_details(Some(170), None, Some(14.0)), "170cm | R14m");
    assert_eq!(format_ski_details(None, None, None), "");
}

#[test]
fn test_parsed_spec_formats_back() {
    let details = AlpineSkiDetails {
        length: parse_ski_size("170 cm"),
        profile: parse_profile("121-68-103"),
        radius: parse_radius("r15.5"),
        ..AlpineSkiDetails::default()
    };
    assert_eq!(format_alpine_ski_details(&details), "170cm | 121/68/103 | R15.5m");
}
