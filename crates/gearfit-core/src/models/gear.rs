// ABOUTME: Gear inventory records with condition, status and sport-specific details
// ABOUTME: ExtendedGearDetails is a tagged union carrying each gear family's own field set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::sport::{NordicDiscipline, Sport};
use crate::constants::gear_age;
use crate::errors::AppError;

/// Kind of physical gear item
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GearType {
    /// Skis (alpine or nordic)
    Ski,
    /// Ski, snowboard or nordic boots
    Boot,
    /// Ski poles
    Pole,
    /// Ski bindings
    Binding,
    /// Snowboard deck
    Snowboard,
    /// Hockey skates
    Skate,
    /// Helmet
    Helmet,
    /// Anything else
    #[default]
    Other,
}

impl GearType {
    /// All gear types in display order
    pub const ALL: [Self; 8] = [
        Self::Ski,
        Self::Boot,
        Self::Pole,
        Self::Binding,
        Self::Snowboard,
        Self::Skate,
        Self::Helmet,
        Self::Other,
    ];

    /// Plural display label used in notification titles
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ski => "Skis",
            Self::Boot => "Boots",
            Self::Pole => "Poles",
            Self::Binding => "Bindings",
            Self::Snowboard => "Snowboard",
            Self::Skate => "Skates",
            Self::Helmet => "Helmet",
            Self::Other => "Gear",
        }
    }

    /// Age in years after which an item of this type is flagged as old
    #[must_use]
    pub const fn old_gear_threshold_years(&self) -> i32 {
        match self {
            Self::Ski | Self::Snowboard => gear_age::BOARD_AND_SKI_YEARS,
            Self::Boot | Self::Skate | Self::Helmet => gear_age::BOOT_SKATE_HELMET_YEARS,
            Self::Pole | Self::Binding | Self::Other => gear_age::DEFAULT_YEARS,
        }
    }
}

impl fmt::Display for GearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ski => "ski",
            Self::Boot => "boot",
            Self::Pole => "pole",
            Self::Binding => "binding",
            Self::Snowboard => "snowboard",
            Self::Skate => "skate",
            Self::Helmet => "helmet",
            Self::Other => "other",
        })
    }
}

impl FromStr for GearType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ski" | "skis" => Ok(Self::Ski),
            "boot" | "boots" => Ok(Self::Boot),
            "pole" | "poles" => Ok(Self::Pole),
            "binding" | "bindings" => Ok(Self::Binding),
            "snowboard" | "board" => Ok(Self::Snowboard),
            "skate" | "skates" => Ok(Self::Skate),
            "helmet" => Ok(Self::Helmet),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown gear type: '{other}'. Valid options: ski, boot, pole, binding, snowboard, skate, helmet, other"
            ))),
        }
    }
}

/// Physical condition of a gear item
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GearCondition {
    /// Unused
    New,
    /// Normal wear
    #[default]
    Good,
    /// Due for service
    Fair,
    /// Due for replacement
    Worn,
}

impl fmt::Display for GearCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::New => "new",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Worn => "worn",
        })
    }
}

impl FromStr for GearCondition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "worn" => Ok(Self::Worn),
            other => Err(AppError::invalid_input(format!(
                "Unknown gear condition: '{other}'. Valid options: new, good, fair, worn"
            ))),
        }
    }
}

/// Lending status of a gear item
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GearStatus {
    /// On the shelf
    #[default]
    Available,
    /// Lent out or in use away from home
    CheckedOut,
    /// At the shop
    Maintenance,
}

/// Tip, waist and tail widths of a ski in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkiProfile {
    /// Tip width (mm)
    pub tip: u32,
    /// Waist width (mm)
    pub waist: u32,
    /// Tail width (mm)
    pub tail: u32,
}

/// Alpine ski specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlpineSkiDetails {
    /// Ski length (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Sidecut profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<SkiProfile>,
    /// Turn radius (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Mounted binding model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<String>,
    /// Lowest DIN setting the binding supports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub din_min: Option<f64>,
    /// Highest DIN setting the binding supports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub din_max: Option<f64>,
}

/// Nordic ski specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NordicSkiDetails {
    /// Ski length (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Technique the ski is built for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<NordicDiscipline>,
    /// Grip system, e.g. "wax", "skin", "waxless"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grip_type: Option<String>,
    /// Fischer FA flex value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fa_value: Option<f64>,
}

/// Snowboard specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowboardDetails {
    /// Board length (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Waist width (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_width: Option<u32>,
    /// Camber profile, e.g. "camber", "rocker", "hybrid"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camber_profile: Option<String>,
    /// Flex rating on a 1-10 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<u8>,
}

/// Ski or snowboard boot specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootDetails {
    /// Mondopoint size (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mondopoint: Option<u32>,
    /// Flex index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<u32>,
    /// Last width (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_width: Option<u32>,
}

/// Hockey skate specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkateDetails {
    /// Skate size label, e.g. "8.5"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Brand width code, e.g. "D" or "EE"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Blade holder or runner model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blade: Option<String>,
}

/// Sport-specific structured details, discriminated by a `type` tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExtendedGearDetails {
    /// Alpine ski details
    AlpineSki(AlpineSkiDetails),
    /// Nordic ski details
    NordicSki(NordicSkiDetails),
    /// Snowboard details
    Snowboard(SnowboardDetails),
    /// Boot details
    Boot(BootDetails),
    /// Hockey skate details
    Skate(SkateDetails),
}

/// An owned physical gear item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearItem {
    /// Opaque identifier assigned by the persistence layer
    pub id: String,
    /// Identifier of the owning family member
    pub owner_id: String,
    /// Sports the item is used for
    #[serde(default)]
    pub sports: Vec<Sport>,
    /// Kind of item
    #[serde(rename = "type")]
    pub gear_type: GearType,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Free-text size label
    pub size: String,
    /// Model or purchase year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Physical condition
    pub condition: GearCondition,
    /// Lending status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GearStatus>,
    /// Sport-specific structured details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_details: Option<ExtendedGearDetails>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
