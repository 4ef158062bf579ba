// ABOUTME: Parsers and formatters for free-text ski specification strings
// ABOUTME: Extracts length, tip/waist/tail profile and turn radius from label-style text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::sync::LazyLock;

use gearfit_core::models::{AlpineSkiDetails, SkiProfile};
use regex::Regex;

/// Compiled patterns, stored as `Option` so a bad pattern degrades to "no match"
static SKI_SIZE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 170, 170cm, 170 cm, 165.5cm
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(?:cm)?").ok()
});

static PROFILE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 121/68/103, 121-68-103, 121 / 68 / 103
    Regex::new(r"^\s*(\d+)\s*[/-]\s*(\d+)\s*[/-]\s*(\d+)\s*$").ok()
});

static RADIUS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: R15.5, r15.5, 15.5m, 15.5, R 14
    Regex::new(r"(?i)^\s*r?\s*(\d+(?:\.\d+)?)\s*m?\s*$").ok()
});

/// Leading ski length in whole centimeters, `None` when the text has no leading number
#[must_use]
pub fn parse_ski_size(text: &str) -> Option<u32> {
    let captures = SKI_SIZE_PATTERN.as_ref()?.captures(text)?;
    let value: f64 = captures.get(1)?.as_str().parse().ok()?;
    Some(value.round() as u32)
}

/// Tip/waist/tail profile from `"a/b/c"` or `"a-b-c"`
#[must_use]
pub fn parse_profile(text: &str) -> Option<SkiProfile> {
    let captures = PROFILE_PATTERN.as_ref()?.captures(text)?;
    let width = |index: usize| -> Option<u32> { captures.get(index)?.as_str().parse().ok() };
    Some(SkiProfile {
        tip: width(1)?,
        waist: width(2)?,
        tail: width(3)?,
    })
}

/// Turn radius in meters from `"R15.5"`, `"15.5m"` or a bare number
#[must_use]
pub fn parse_radius(text: &str) -> Option<f64> {
    let captures = RADIUS_PATTERN.as_ref()?.captures(text)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Canonical `"tip/waist/tail"` rendering
#[must_use]
pub fn format_profile(profile: &SkiProfile) -> String {
    format!("{}/{}/{}", profile.tip, profile.waist, profile.tail)
}

/// Canonical `"170cm | 121/68/103 | R15.5m"` rendering, omitting absent segments
#[must_use]
pub fn format_ski_details(
    length: Option<u32>,
    profile: Option<&SkiProfile>,
    radius: Option<f64>,
) -> String {
    let mut segments = Vec::with_capacity(3);
    if let Some(length) = length {
        segments.push(format!("{length}cm"));
    }
    if let Some(profile) = profile {
        segments.push(format_profile(profile));
    }
    if let Some(radius) = radius {
        segments.push(format!("R{radius}m"));
    }
    segments.join(" | ")
}

/// Render stored alpine ski details in the canonical display form
#[must_use]
pub fn format_alpine_ski_details(details: &AlpineSkiDetails) -> String {
    format_ski_details(details.length, details.profile.as_ref(), details.radius)
}
