// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for sizing charts, growth analysis, gear age and photo hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! Constants module
//!
//! Sizing tables live in [`sizing`]; the smaller groups are declared inline.

/// Per-sport sizing charts
pub mod sizing;

pub use sizing::{alpine, helmet, hockey, nordic, shoe_size, snowboard};

/// Growth and staleness analysis defaults
pub mod growth {
    /// Average Gregorian month length in days
    pub const DAYS_PER_MONTH: f64 = 30.4375;
    /// Measurements older than this many months are stale for minors
    pub const STALE_AFTER_MONTHS: f64 = 6.0;
    /// Members at or above this age are never flagged stale
    pub const ADULT_AGE_YEARS: u32 = 18;
    /// Height gain rate at or above which a member counts as growing (cm/month)
    pub const GROWING_THRESHOLD_CM_PER_MONTH: f64 = 0.3;
    /// Seconds per day
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Gear lifetime thresholds used for old-gear alerts
pub mod gear_age {
    /// Skis and snowboards
    pub const BOARD_AND_SKI_YEARS: i32 = 7;
    /// Boots, skates and helmets
    pub const BOOT_SKATE_HELMET_YEARS: i32 = 5;
    /// Everything else
    pub const DEFAULT_YEARS: i32 = 10;
}

/// Confidence scoring for heuristic photo analysis
pub mod photo_analysis {
    /// Confidence with nothing to go on
    pub const BASE_CONFIDENCE: f64 = 0.2;
    /// Bonus when at least one photo is supplied
    pub const PHOTO_BONUS: f64 = 0.3;
    /// Extra bonus for several angles
    pub const MULTI_PHOTO_BONUS: f64 = 0.05;
    /// Photo count that earns the multi-photo bonus
    pub const MULTI_PHOTO_COUNT: usize = 3;
    /// Bonus for a sport hint
    pub const SPORT_HINT_BONUS: f64 = 0.15;
    /// Bonus for a gear type hint
    pub const TYPE_HINT_BONUS: f64 = 0.15;
    /// Bonus for a brand hint
    pub const BRAND_HINT_BONUS: f64 = 0.1;
    /// Confidence ceiling
    pub const MAX_CONFIDENCE: f64 = 0.95;
    /// Confidence ceiling without photos
    pub const MAX_CONFIDENCE_WITHOUT_PHOTOS: f64 = 0.45;
    /// Confidence ceiling without any hints
    pub const MAX_CONFIDENCE_WITHOUT_HINTS: f64 = 0.5;
    /// Note attached when no photos are supplied
    pub const NO_PHOTOS_NOTE: &str = "No photos provided - results may be inaccurate";
}
