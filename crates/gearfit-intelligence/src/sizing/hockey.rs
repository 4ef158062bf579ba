// ABOUTME: Hockey skate sizing from street shoe size with brand-specific width codes
// ABOUTME: Bauer and CCM run one and one-and-a-half sizes below US shoe size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use gearfit_core::constants::hockey::{
    BAUER_SIZE_OFFSET, BAUER_WIDTH_CODES, CCM_SIZE_OFFSET, CCM_WIDTH_CODES,
};
use gearfit_core::models::{Measurements, ShoeSizeSystem, SkateBrand};
use serde::{Deserialize, Serialize};

use super::alpine::{classify_last_width, estimate_last_width_mm, LastWidth};
use crate::algorithms::shoe_size::{convert_shoe_size, from_centimeters};
use crate::utils::round_to_half;

/// Hockey skate recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HockeySkateSizing {
    /// Skate brand
    pub brand: SkateBrand,
    /// US shoe size the skate size was derived from
    pub shoe_size_us: f64,
    /// Skate size (US scale)
    pub skate_size_us: f64,
    /// Skate size (EU scale)
    pub skate_size_eu: f64,
    /// Foot width class
    pub width: LastWidth,
    /// Brand width code
    pub width_code: String,
}

const fn size_offset(brand: SkateBrand) -> f64 {
    match brand {
        SkateBrand::Bauer => BAUER_SIZE_OFFSET,
        SkateBrand::Ccm => CCM_SIZE_OFFSET,
    }
}

/// Brand width code for a width class; extra wide maps to the widest code
#[must_use]
pub const fn width_code(brand: SkateBrand, width: LastWidth) -> &'static str {
    let codes = match brand {
        SkateBrand::Bauer => BAUER_WIDTH_CODES,
        SkateBrand::Ccm => CCM_WIDTH_CODES,
    };
    match width {
        LastWidth::Narrow => codes[0],
        LastWidth::Medium => codes[1],
        LastWidth::Wide | LastWidth::ExtraWide => codes[2],
    }
}

/// Hockey skate size and width
///
/// Uses the recorded US shoe size when present, otherwise derives it from the
/// longer foot. Missing foot widths default to the brand's medium width.
#[must_use]
pub fn calculate_hockey_skate_size(
    measurements: &Measurements,
    brand: SkateBrand,
) -> HockeySkateSizing {
    let shoe_size_us = measurements
        .shoe_size_us
        .unwrap_or_else(|| from_centimeters(measurements.max_foot_length(), ShoeSizeSystem::UsMen));
    let skate_size_us = round_to_half(shoe_size_us - size_offset(brand));
    let width = estimate_last_width_mm(measurements).map_or(LastWidth::Medium, classify_last_width);

    HockeySkateSizing {
        brand,
        shoe_size_us,
        skate_size_us,
        skate_size_eu: convert_shoe_size(skate_size_us, ShoeSizeSystem::UsMen, ShoeSizeSystem::Eu),
        width,
        width_code: width_code(brand, width).to_owned(),
    }
}
