// ABOUTME: Helmet size lookup from head circumference
// ABOUTME: Fixed-width buckets from XS to XXL with no interpolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use gearfit_core::constants::helmet::{LARGEST, SIZE_TABLE};
use serde::{Deserialize, Serialize};

/// Helmet size and the head circumference range it fits (cm)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelmetSizing {
    /// Size label, e.g. "M"
    pub size: String,
    /// Smallest fitting circumference (cm)
    pub range_min: u32,
    /// Largest fitting circumference (cm)
    pub range_max: u32,
}

/// Helmet size for a head circumference in centimeters
#[must_use]
pub fn calculate_helmet_sizing(head_circumference_cm: f64) -> HelmetSizing {
    let (size, range_min, range_max) = SIZE_TABLE
        .iter()
        .find(|(upper, ..)| head_circumference_cm < *upper)
        .map_or(LARGEST, |(_, size, min, max)| (*size, *min, *max));

    HelmetSizing {
        size: size.to_owned(),
        range_min,
        range_max,
    }
}
