// ABOUTME: Shared fixtures for gearfit integration tests
// ABOUTME: Builders for measurements, family members, history entries and gear items at a fixed clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `gearfit`
//!
//! Every builder works against [`fixed_now`] so date-dependent results do not
//! drift with the wall clock.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use gearfit::models::{
    FamilyMember, Gender, GearCondition, GearItem, GearType, MeasurementEntry, Measurements,
    SkillLevel, Sport,
};

/// The instant every test treats as "now": 2025-01-15 12:00 UTC
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

/// Date of birth for someone who is `years` old at [`fixed_now`]
pub fn born_years_ago(years: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025 - years, 1, 1).unwrap()
}

/// Measurements taken at [`fixed_now`]
pub fn measurements(height: f64, weight: f64, foot_length: f64) -> Measurements {
    Measurements::new(height, weight, foot_length, fixed_now())
}

/// An adult reference skier: 180 cm, 70 kg, 27 cm feet
pub fn adult_measurements() -> Measurements {
    measurements(180.0, 70.0, 27.0)
}

/// Family member with no skills or history
pub fn member(id: &str, name: &str, age_years: i32, measurements: Measurements) -> FamilyMember {
    FamilyMember {
        id: id.to_owned(),
        name: name.to_owned(),
        date_of_birth: born_years_ago(age_years),
        gender: Gender::Other,
        measurements,
        measurement_history: Vec::new(),
        skill_levels: BTreeMap::new(),
    }
}

/// A child measured `days_ago` days before [`fixed_now`]
pub fn child_measured_days_ago(id: &str, age_years: i32, days_ago: i64) -> FamilyMember {
    let mut m = measurements(140.0, 35.0, 22.0);
    m.measured_at = fixed_now() - Duration::days(days_ago);
    member(id, "Kid", age_years, m)
}

/// Member with the given skill map
pub fn skier(id: &str, name: &str, skills: &[(Sport, SkillLevel)]) -> FamilyMember {
    let mut member = member(id, name, 35, adult_measurements());
    member.skill_levels = skills.iter().copied().collect();
    member
}

/// History entry with height `height` recorded `months_ago` average months before [`fixed_now`]
pub fn history_entry(id: &str, height: f64, months_ago: f64) -> MeasurementEntry {
    let seconds = (months_ago * 30.4375 * 86_400.0).round() as i64;
    let mut m = measurements(height, 30.0, 20.0);
    m.measured_at = fixed_now() - Duration::seconds(seconds);
    MeasurementEntry::from_measurements(id, &m)
}

/// Gear item owned by `owner_id`
pub fn gear(
    id: &str,
    owner_id: &str,
    gear_type: GearType,
    condition: GearCondition,
    year: Option<i32>,
) -> GearItem {
    GearItem {
        id: id.to_owned(),
        owner_id: owner_id.to_owned(),
        sports: vec![Sport::Alpine],
        gear_type,
        brand: "Atomic".to_owned(),
        model: "Redster".to_owned(),
        size: "170".to_owned(),
        year,
        condition,
        status: None,
        extended_details: None,
        notes: None,
    }
}
