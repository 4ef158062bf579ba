// ABOUTME: Heuristic gear specification guesses from photo references and user hints
// ABOUTME: Isolated behind the GearPhotoAnalyzer trait so a vision backend can replace it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! # Gear Photo Analysis
//!
//! [`HeuristicGearAnalyzer`] does not look at image content. It maps the sport,
//! gear type and brand hints to a typical specification of that kind of item
//! and scores its confidence from how much it was told:
//!
//! | Signal                 | Confidence |
//! |------------------------|------------|
//! | base                   | 0.20       |
//! | at least one photo     | +0.30      |
//! | three or more photos   | +0.05      |
//! | sport hint             | +0.15      |
//! | gear type hint         | +0.15      |
//! | brand hint             | +0.10      |
//!
//! The total is capped at 0.95, at 0.5 without hints and at 0.45 without photos.

use gearfit_core::constants::photo_analysis::{
    BASE_CONFIDENCE, BRAND_HINT_BONUS, MAX_CONFIDENCE, MAX_CONFIDENCE_WITHOUT_HINTS,
    MAX_CONFIDENCE_WITHOUT_PHOTOS, MULTI_PHOTO_BONUS, MULTI_PHOTO_COUNT, NO_PHOTOS_NOTE,
    PHOTO_BONUS, SPORT_HINT_BONUS, TYPE_HINT_BONUS,
};
use gearfit_core::models::{
    AlpineSkiDetails, BootDetails, ExtendedGearDetails, GearCondition, GearType, NordicDiscipline,
    NordicSkiDetails, SkateDetails, SkiProfile, SnowboardDetails, Sport,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Caller-supplied hints about the photographed item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisHints {
    /// Sport the item is used for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<Sport>,
    /// Kind of item
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub gear_type: Option<GearType>,
    /// Manufacturer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl AnalysisHints {
    /// Whether any hint is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sport.is_none() && self.gear_type.is_none() && self.brand.is_none()
    }
}

/// Best-effort guess of a gear item's specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearAnalysisResult {
    /// Guessed sport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<Sport>,
    /// Guessed kind of item
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub gear_type: Option<GearType>,
    /// Guessed manufacturer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Guessed model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Guessed size label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Guessed condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<GearCondition>,
    /// Guessed sport-specific details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_details: Option<ExtendedGearDetails>,
    /// Confidence in (0, 1]
    pub confidence: f64,
    /// Caveats about the guess
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Produces gear specifications from photos
pub trait GearPhotoAnalyzer {
    /// Analyze opaque photo references with optional hints
    fn analyze(&self, photos: &[String], hints: Option<&AnalysisHints>) -> GearAnalysisResult;
}

/// Deterministic hint-to-shape mapping with rule-based confidence
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicGearAnalyzer;

/// A typical item used as the guess for a sport and gear type
struct Template {
    brand: &'static str,
    model: &'static str,
    size: &'static str,
    details: fn() -> ExtendedGearDetails,
}

fn alpine_ski() -> ExtendedGearDetails {
    ExtendedGearDetails::AlpineSki(AlpineSkiDetails {
        length: Some(170),
        profile: Some(SkiProfile {
            tip: 121,
            waist: 68,
            tail: 103,
        }),
        radius: Some(15.5),
        bindings: Some("Marker Squire 11".to_owned()),
        din_min: Some(3.0),
        din_max: Some(11.0),
    })
}

fn nordic_ski(
    discipline: NordicDiscipline,
    length: u32,
    grip: Option<&str>,
) -> ExtendedGearDetails {
    ExtendedGearDetails::NordicSki(NordicSkiDetails {
        length: Some(length),
        discipline: Some(discipline),
        grip_type: grip.map(str::to_owned),
        fa_value: None,
    })
}

fn snowboard() -> ExtendedGearDetails {
    ExtendedGearDetails::Snowboard(SnowboardDetails {
        length: Some(156),
        waist_width: Some(250),
        camber_profile: Some("hybrid".to_owned()),
        flex: Some(5),
    })
}

fn boot(flex: Option<u32>) -> ExtendedGearDetails {
    ExtendedGearDetails::Boot(BootDetails {
        mondopoint: Some(265),
        flex,
        last_width: flex.map(|_| 100),
    })
}

fn skate() -> ExtendedGearDetails {
    ExtendedGearDetails::Skate(SkateDetails {
        size: Some("8.5".to_owned()),
        width: Some("D".to_owned()),
        blade: Some("LS4".to_owned()),
    })
}

fn template(sport: Sport, gear_type: GearType) -> Option<Template> {
    let template = match (sport, gear_type) {
        (Sport::Alpine, GearType::Ski) => Template {
            brand: "Atomic",
            model: "Redster",
            size: "170cm",
            details: alpine_ski,
        },
        (Sport::NordicClassic, GearType::Ski) => Template {
            brand: "Fischer",
            model: "Twin Skin",
            size: "196cm",
            details: || nordic_ski(NordicDiscipline::Classic, 196, Some("skin")),
        },
        (Sport::NordicSkate, GearType::Ski) => Template {
            brand: "Fischer",
            model: "Speedmax Skate",
            size: "186cm",
            details: || nordic_ski(NordicDiscipline::Skate, 186, None),
        },
        (Sport::NordicCombi, GearType::Ski) => Template {
            brand: "Madshus",
            model: "Active Combi",
            size: "182cm",
            details: || nordic_ski(NordicDiscipline::Combi, 182, Some("waxless")),
        },
        (Sport::Snowboard, GearType::Snowboard) => Template {
            brand: "Burton",
            model: "Custom",
            size: "156cm",
            details: snowboard,
        },
        (Sport::Alpine, GearType::Boot) => Template {
            brand: "Lange",
            model: "RX 100",
            size: "26.5",
            details: || boot(Some(100)),
        },
        (Sport::Snowboard, GearType::Boot) => Template {
            brand: "Burton",
            model: "Moto",
            size: "26.5",
            details: || boot(None),
        },
        (Sport::NordicClassic | Sport::NordicSkate | Sport::NordicCombi, GearType::Boot) => {
            Template {
                brand: "Salomon",
                model: "RC8",
                size: "26.5",
                details: || boot(None),
            }
        }
        (Sport::Hockey, GearType::Skate) => Template {
            brand: "Bauer",
            model: "Vapor",
            size: "8.5",
            details: skate,
        },
        _ => return None,
    };
    Some(template)
}

const fn default_gear_type(sport: Sport) -> GearType {
    match sport {
        Sport::Alpine | Sport::NordicClassic | Sport::NordicSkate | Sport::NordicCombi => {
            GearType::Ski
        }
        Sport::Snowboard => GearType::Snowboard,
        Sport::Hockey => GearType::Skate,
    }
}

const fn default_sport(gear_type: GearType) -> Option<Sport> {
    match gear_type {
        GearType::Ski | GearType::Boot | GearType::Pole | GearType::Binding => Some(Sport::Alpine),
        GearType::Snowboard => Some(Sport::Snowboard),
        GearType::Skate => Some(Sport::Hockey),
        GearType::Helmet | GearType::Other => None,
    }
}

/// Confidence score from the photo count and the hints supplied
#[must_use]
pub fn score_confidence(photo_count: usize, hints: &AnalysisHints) -> f64 {
    let mut confidence = BASE_CONFIDENCE;
    if photo_count > 0 {
        confidence += PHOTO_BONUS;
    }
    if photo_count >= MULTI_PHOTO_COUNT {
        confidence += MULTI_PHOTO_BONUS;
    }
    if hints.sport.is_some() {
        confidence += SPORT_HINT_BONUS;
    }
    if hints.gear_type.is_some() {
        confidence += TYPE_HINT_BONUS;
    }
    if hints.brand.is_some() {
        confidence += BRAND_HINT_BONUS;
    }

    let mut ceiling = MAX_CONFIDENCE;
    if photo_count == 0 {
        ceiling = ceiling.min(MAX_CONFIDENCE_WITHOUT_PHOTOS);
    }
    if hints.is_empty() {
        ceiling = ceiling.min(MAX_CONFIDENCE_WITHOUT_HINTS);
    }
    confidence.min(ceiling)
}

impl GearPhotoAnalyzer for HeuristicGearAnalyzer {
    fn analyze(&self, photos: &[String], hints: Option<&AnalysisHints>) -> GearAnalysisResult {
        let empty = AnalysisHints::default();
        let hints = hints.unwrap_or(&empty);

        let gear_type = hints.gear_type.or_else(|| hints.sport.map(default_gear_type));
        let sport = hints.sport.or_else(|| gear_type.and_then(default_sport));
        let template = sport.zip(gear_type).and_then(|(s, t)| template(s, t));

        let mut notes = Vec::new();
        if photos.is_empty() {
            debug!("Gear analysis requested without photos");
            notes.push(NO_PHOTOS_NOTE.to_owned());
        }

        let brand = hints
            .brand
            .clone()
            .or_else(|| template.as_ref().map(|t| t.brand.to_owned()));
        // A template model only makes sense for the template's own brand
        let brand_matches = template.as_ref().is_some_and(|t| {
            brand
                .as_deref()
                .is_some_and(|b| b.eq_ignore_ascii_case(t.brand))
        });

        GearAnalysisResult {
            sport,
            gear_type,
            brand,
            model: template
                .as_ref()
                .filter(|_| brand_matches)
                .map(|t| t.model.to_owned()),
            size: template.as_ref().map(|t| t.size.to_owned()),
            condition: (!photos.is_empty()).then_some(GearCondition::Good),
            extended_details: template.as_ref().map(|t| (t.details)()),
            confidence: score_confidence(photos.len(), hints),
            notes,
        }
    }
}

/// Analyze gear photos with the heuristic analyzer
#[must_use]
pub fn analyze_gear_photos(photos: &[String], hints: Option<&AnalysisHints>) -> GearAnalysisResult {
    HeuristicGearAnalyzer.analyze(photos, hints)
}
