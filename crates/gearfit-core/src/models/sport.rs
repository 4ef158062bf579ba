// ABOUTME: Sport, skill, gender and vendor model enumerations used as sizing context
// ABOUTME: Defines parsing and display implementations for every context enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Sports supported by the sizing engine
///
/// Nordic skiing is split by discipline because each discipline has its own
/// ski length offsets and pole multipliers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Sport {
    /// Classic (diagonal stride) cross-country skiing
    NordicClassic,
    /// Skate cross-country skiing
    NordicSkate,
    /// Combined classic/skate cross-country skiing
    NordicCombi,
    /// Alpine/downhill skiing
    Alpine,
    /// Snowboarding
    Snowboard,
    /// Ice hockey
    Hockey,
}

impl Sport {
    /// All supported sports in display order
    pub const ALL: [Self; 6] = [
        Self::NordicClassic,
        Self::NordicSkate,
        Self::NordicCombi,
        Self::Alpine,
        Self::Snowboard,
        Self::Hockey,
    ];

    /// Wire name of the sport
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NordicClassic => "nordic-classic",
            Self::NordicSkate => "nordic-skate",
            Self::NordicCombi => "nordic-combi",
            Self::Alpine => "alpine",
            Self::Snowboard => "snowboard",
            Self::Hockey => "hockey",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NordicClassic => "Nordic Classic",
            Self::NordicSkate => "Nordic Skate",
            Self::NordicCombi => "Nordic Combi",
            Self::Alpine => "Alpine",
            Self::Snowboard => "Snowboard",
            Self::Hockey => "Hockey",
        }
    }

    /// Nordic discipline for nordic sports, `None` otherwise
    #[must_use]
    pub const fn nordic_discipline(&self) -> Option<NordicDiscipline> {
        match self {
            Self::NordicClassic => Some(NordicDiscipline::Classic),
            Self::NordicSkate => Some(NordicDiscipline::Skate),
            Self::NordicCombi => Some(NordicDiscipline::Combi),
            Self::Alpine | Self::Snowboard | Self::Hockey => None,
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nordic-classic" | "classic" => Ok(Self::NordicClassic),
            "nordic-skate" | "skate" => Ok(Self::NordicSkate),
            "nordic-combi" | "combi" => Ok(Self::NordicCombi),
            "alpine" => Ok(Self::Alpine),
            "snowboard" => Ok(Self::Snowboard),
            "hockey" => Ok(Self::Hockey),
            other => Err(AppError::invalid_input(format!(
                "Unknown sport: '{other}'. Valid options: nordic-classic, nordic-skate, nordic-combi, alpine, snowboard, hockey"
            ))),
        }
    }
}

/// Cross-country skiing discipline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NordicDiscipline {
    /// Classic technique
    #[serde(rename = "nordic-classic")]
    Classic,
    /// Skating technique
    #[serde(rename = "nordic-skate")]
    Skate,
    /// Combined technique
    #[serde(rename = "nordic-combi")]
    Combi,
}

impl NordicDiscipline {
    /// Sport corresponding to this discipline
    #[must_use]
    pub const fn sport(&self) -> Sport {
        match self {
            Self::Classic => Sport::NordicClassic,
            Self::Skate => Sport::NordicSkate,
            Self::Combi => Sport::NordicCombi,
        }
    }
}

impl fmt::Display for NordicDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sport().as_str())
    }
}

impl FromStr for NordicDiscipline {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Sport>()?.nordic_discipline().ok_or_else(|| {
            AppError::invalid_input(format!(
                "'{s}' is not a nordic discipline. Valid options: classic, skate, combi"
            ))
        })
    }
}

/// Ordered skill scale used to widen or shift recommended ranges
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLevel {
    /// First seasons on snow or ice
    Beginner,
    /// Comfortable on most terrain
    #[default]
    Intermediate,
    /// Confident at speed and in varied conditions
    Advanced,
    /// Racing or aggressive skiing/riding
    Expert,
}

impl SkillLevel {
    /// All skill tiers in ascending order
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// Zero-based tier index (beginner = 0, expert = 3)
    #[must_use]
    pub const fn tier(&self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
            Self::Expert => 3,
        }
    }

    /// Wire name of the skill level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            other => Err(AppError::invalid_input(format!(
                "Unknown skill level: '{other}'. Valid options: beginner, intermediate, advanced, expert"
            ))),
        }
    }
}

/// Gender of a family member
///
/// Only affects alpine ski length and alpine boot flex offsets.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or not specified; sized like the male baseline
    #[default]
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        })
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female, other"
            ))),
        }
    }
}

/// Vendor sizing chart applied to nordic ski recommendations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SizingModel {
    /// Vendor-neutral sizing
    #[default]
    Generic,
    /// Fischer sizing chart with FA value
    Fischer,
    /// Evosports sizing chart
    Evosports,
}

impl SizingModel {
    /// Vendor name shown in results, `None` for the generic chart
    #[must_use]
    pub const fn vendor_name(&self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::Fischer => Some("Fischer"),
            Self::Evosports => Some("Evosports"),
        }
    }
}

impl fmt::Display for SizingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "generic",
            Self::Fischer => "fischer",
            Self::Evosports => "evosports",
        })
    }
}

impl FromStr for SizingModel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "fischer" => Ok(Self::Fischer),
            "evosports" => Ok(Self::Evosports),
            other => Err(AppError::invalid_input(format!(
                "Unknown sizing model: '{other}'. Valid options: generic, fischer, evosports"
            ))),
        }
    }
}

/// Alpine terrain preference, selects the ski waist width band
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Terrain {
    /// Groomed pistes
    Groomed,
    /// Mixed on- and off-piste
    #[default]
    AllMountain,
    /// Deep snow
    Powder,
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Groomed => "groomed",
            Self::AllMountain => "all-mountain",
            Self::Powder => "powder",
        })
    }
}

impl FromStr for Terrain {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groomed" | "piste" => Ok(Self::Groomed),
            "all-mountain" | "allmountain" => Ok(Self::AllMountain),
            "powder" => Ok(Self::Powder),
            other => Err(AppError::invalid_input(format!(
                "Unknown terrain: '{other}'. Valid options: groomed, all-mountain, powder"
            ))),
        }
    }
}

/// Hockey skate manufacturer, selects size offset and width codes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkateBrand {
    /// Bauer (C / D / EE widths)
    #[default]
    Bauer,
    /// CCM (C / R / W widths)
    Ccm,
}

impl fmt::Display for SkateBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bauer => "Bauer",
            Self::Ccm => "CCM",
        })
    }
}

impl FromStr for SkateBrand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bauer" => Ok(Self::Bauer),
            "ccm" => Ok(Self::Ccm),
            other => Err(AppError::invalid_input(format!(
                "Unknown skate brand: '{other}'. Valid options: bauer, ccm"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_round_trips_through_wire_name() {
        for sport in Sport::ALL {
            assert_eq!(sport.as_str().parse::<Sport>().unwrap(), sport);
        }
    }

    #[test]
    fn test_skill_levels_are_ordered() {
        assert!(SkillLevel::Beginner < SkillLevel::Intermediate);
        assert!(SkillLevel::Advanced < SkillLevel::Expert);
        assert_eq!(SkillLevel::Expert.tier(), 3);
    }

    #[test]
    fn test_discipline_rejects_non_nordic_sport() {
        assert!("alpine".parse::<NordicDiscipline>().is_err());
        assert_eq!(
            "skate".parse::<NordicDiscipline>().unwrap(),
            NordicDiscipline::Skate
        );
    }

    #[test]
    fn test_sport_serializes_kebab_case() {
        let json = serde_json::to_string(&Sport::NordicClassic).unwrap();
        assert_eq!(json, "\"nordic-classic\"");
        let discipline: NordicDiscipline = serde_json::from_str("\"nordic-combi\"").unwrap();
        assert_eq!(discipline, NordicDiscipline::Combi);
    }
}
