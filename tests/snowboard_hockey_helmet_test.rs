// ABOUTME: Integration tests for snowboard, hockey skate and helmet sizing
// ABOUTME: Covers weight buckets, waist width steps, brand offsets, width codes and helmet buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use gearfit::intelligence::sizing::{
    calculate_helmet_sizing, calculate_hockey_skate_size, calculate_snowboard_sizing, LastWidth,
    SizeRange,
};
use gearfit::models::{SkateBrand, SkillLevel};

use common::{adult_measurements, measurements};

#[test]
fn test_snowboard_reference_rider() {
    let sizing = calculate_snowboard_sizing(&adult_measurements(), SkillLevel::Intermediate);

    assert_eq!(
        (
            sizing.board_length.min,
            sizing.board_length.max,
            sizing.board_length.recommended
        ),
        (155, 165, 159)
    );
    assert_eq!(sizing.min_waist_width, 250);
    assert_eq!(
        (
            sizing.stance_width.min,
            sizing.stance_width.max,
            sizing.stance_width.recommended
        ),
        (50, 58, 54)
    );
    assert_eq!(sizing.boot.mondopoint, 270);
}

#[test]
fn test_snowboard_weight_buckets_shift_the_whole_range() {
    let light = calculate_snowboard_sizing(&measurements(180.0, 50.0, 27.0), SkillLevel::Beginner);
    assert_eq!((light.board_length.min, light.board_length.max), (150, 160));
    assert_eq!(light.board_length.recommended, 152);

    let heavy = calculate_snowboard_sizing(&measurements(180.0, 90.0, 27.0), SkillLevel::Expert);
    assert_eq!((heavy.board_length.min, heavy.board_length.max), (158, 168));
    assert_eq!(heavy.board_length.recommended, 166);
}

#[test]
fn test_snowboard_big_boots_need_wider_board() {
    let small = calculate_snowboard_sizing(&measurements(160.0, 55.0, 24.0), SkillLevel::Beginner);
    let large = calculate_snowboard_sizing(&measurements(195.0, 90.0, 30.0), SkillLevel::Beginner);
    assert_eq!(small.min_waist_width, 245);
    assert_eq!(large.min_waist_width, 260);
}

#[test]
fn test_snowboard_skill_orders_recommendation() {
    let m = adult_measurements();
    let lengths: Vec<u32> = SkillLevel::ALL
        .iter()
        .map(|skill| calculate_snowboard_sizing(&m, *skill).board_length.recommended)
        .collect();
    assert_eq!(lengths, vec![157, 159, 161, 163]);
}

#[test]
fn test_snowboard_ranges_hold_recommendation() {
    let holds = |range: &SizeRange| {
        range.min <= range.recommended && range.recommended <= range.max
    };
    for skill in SkillLevel::ALL {
        for weight in [20.0, 54.9, 55.0, 64.9, 65.0, 80.0, 80.5, 110.0] {
            for height in (90..=220).step_by(5) {
                let m = measurements(f64::from(height), weight, 25.0);
                let sizing = calculate_snowboard_sizing(&m, skill);
                assert!(holds(&sizing.board_length), "{skill} {weight} kg {height} cm");
                assert!(holds(&sizing.stance_width), "{skill} {weight} kg {height} cm");
            }
        }
    }
}

#[test]
fn test_hockey_brand_offsets() {
    let mut m = adult_measurements();
    m.shoe_size_us = Some(10.0);

    let bauer = calculate_hockey_skate_size(&m, SkateBrand::Bauer);
    assert!((bauer.skate_size_us - 9.0).abs() < 1e-9);
    assert_eq!(bauer.width, LastWidth::Medium);
    assert_eq!(bauer.width_code, "D");

    let ccm = calculate_hockey_skate_size(&m, SkateBrand::Ccm);
    assert!((ccm.skate_size_us - 8.5).abs() < 1e-9);
    assert_eq!(ccm.width_code, "R");
}

#[test]
fn test_hockey_derives_shoe_size_from_foot() {
    let skate = calculate_hockey_skate_size(&measurements(175.0, 70.0, 26.0), SkateBrand::Bauer);
    assert!((skate.shoe_size_us - 13.0).abs() < 1e-9);
    assert!((skate.skate_size_us - 12.0).abs() < 1e-9);
    assert!(skate.skate_size_eu > 40.0);
}

#[test]
fn test_hockey_extra_wide_feet_get_widest_code() {
    let mut m = adult_measurements();
    m.foot_width_right = Some(11.0);

    assert_eq!(calculate_hockey_skate_size(&m, SkateBrand::Bauer).width_code, "EE");
    let ccm = calculate_hockey_skate_size(&m, SkateBrand::Ccm);
    assert_eq!(ccm.width, LastWidth::ExtraWide);
    assert_eq!(ccm.width_code, "W");
}

#[test]
fn test_helmet_buckets() {
    let medium = calculate_helmet_sizing(57.0);
    assert_eq!(medium.size, "M");
    assert_eq!((medium.range_min, medium.range_max), (57, 58));

    assert_eq!(calculate_helmet_sizing(54.9).size, "XS");
    assert_eq!(calculate_helmet_sizing(55.0).size, "S");
    assert_eq!(calculate_helmet_sizing(60.5).size, "L");
    assert_eq!(calculate_helmet_sizing(62.0).size, "XL");

    let largest = calculate_helmet_sizing(63.0);
    assert_eq!(largest.size, "XXL");
    assert_eq!((largest.range_min, largest.range_max), (63, 65));
}
