// ABOUTME: Equipment sizing and gear intelligence engine for the Gearfit platform
// ABOUTME: Pure, synchronous calculations over gearfit-core measurement and gear records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

#![deny(unsafe_code)]

//! # Gearfit Intelligence
//!
//! Every function in this crate is a pure transformation of its arguments: body
//! measurements in, size recommendations out. Nothing reads the clock except
//! the explicitly named convenience wrappers, and nothing performs I/O.
//!
//! ## Modules
//!
//! - **algorithms**: Shoe size conversion between six size systems
//! - **sizing**: Nordic, alpine, snowboard, hockey and helmet recommendations
//! - **`statistical_analysis`**: Ordinary least squares regression
//! - **`growth_analysis`**: Measurement staleness and growth trend detection
//! - **notifications**: Gear maintenance and replacement alerts
//! - **`gear_analysis`**: Heuristic gear specification guesses from photo hints
//! - **parsers**: Free-text ski specification parsing and formatting
//! - **report**: Per-member sizing report combining every applicable recommendation

/// Unit conversion algorithms
pub mod algorithms;

/// Shared rounding, age and range formatting helpers
pub mod utils;

/// Equipment sizing per sport
pub mod sizing;

/// Linear regression used for growth trends
pub mod statistical_analysis;

/// Staleness and growth trend analysis
pub mod growth_analysis;

/// Gear condition notifications
pub mod notifications;

/// Heuristic photo-hint gear analysis
pub mod gear_analysis;

/// Ski specification string parsers and formatters
pub mod parsers;

/// Per-member sizing report
pub mod report;

pub use algorithms::shoe_size::{
    convert_shoe_size, from_centimeters, get_all_shoe_sizes, get_shoe_sizes_from_foot_length,
    to_centimeters, AllShoeSizes, ShoeSizeMeasurement,
};
pub use gear_analysis::{
    analyze_gear_photos, AnalysisHints, GearAnalysisResult, GearPhotoAnalyzer,
    HeuristicGearAnalyzer,
};
pub use growth_analysis::{
    analyze_growth_trend, growth_warning_reason, is_measurement_stale, is_measurement_stale_at,
    should_warn_growth, should_warn_growth_at, GrowthTrend, GrowthWarningReason,
};
pub use notifications::{generate_notifications, generate_notifications_for_year};
pub use report::{build_sizing_report, build_sizing_report_with_config, SizingReport};
