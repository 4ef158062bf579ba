// ABOUTME: Rounding, age and range formatting helpers shared by the sizing modules
// ABOUTME: Rounding follows the display granularity of each unit system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::fmt::Display;

use chrono::{Datelike, NaiveDate, Utc};

/// Round to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to the nearest half
#[must_use]
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Round to a whole number of centimeters or millimeters
///
/// Negative inputs saturate to zero.
#[must_use]
pub fn round_whole(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Whole years between `date_of_birth` and `today`
///
/// Decrements when this year's birthday has not happened yet. Dates of birth
/// in the future yield zero.
#[must_use]
pub fn calculate_age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Age in whole years as of the current UTC date
#[must_use]
pub fn calculate_age(date_of_birth: NaiveDate) -> u32 {
    calculate_age_on(date_of_birth, Utc::now().date_naive())
}

/// Render a range as `"{min}-{max} {unit}"`, or `"{min} {unit}"` when both ends match
#[must_use]
pub fn format_size_range<T: PartialEq + Display>(min: T, max: T, unit: &str) -> String {
    if min == max {
        format!("{min} {unit}")
    } else {
        format!("{min}-{max} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_half() {
        assert!((round_to_half(8.26) - 8.5).abs() < f64::EPSILON);
        assert!((round_to_half(8.24) - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let dob = NaiveDate::from_ymd_opt(2015, 6, 15).unwrap();
        let before = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let on = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(calculate_age_on(dob, before), 9);
        assert_eq!(calculate_age_on(dob, on), 10);
    }

    #[test]
    fn test_future_birth_date_is_zero() {
        let dob = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(calculate_age_on(dob, today), 0);
    }

    #[test]
    fn test_format_size_range() {
        assert_eq!(format_size_range(190, 200, "cm"), "190-200 cm");
        assert_eq!(format_size_range(57, 57, "cm"), "57 cm");
        assert_eq!(format_size_range(3.5, 5.5, "DIN"), "3.5-5.5 DIN");
    }
}
