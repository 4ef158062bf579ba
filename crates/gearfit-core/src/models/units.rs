// ABOUTME: Shoe size systems and length units understood by the conversion engine
// ABOUTME: Parsing, display labels, and display increments for each unit system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Shoe and foot size systems
///
/// Every conversion routes through centimeters as the canonical unit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ShoeSizeSystem {
    /// Foot length in centimeters (one decimal place)
    Cm,
    /// Foot length in millimeters (whole numbers)
    Mondopoint,
    /// Continental European sizes (half sizes)
    #[default]
    Eu,
    /// United Kingdom sizes (half sizes)
    Uk,
    /// United States men's sizes (half sizes)
    UsMen,
    /// United States women's sizes (half sizes)
    UsWomen,
}

impl ShoeSizeSystem {
    /// All size systems in display order
    pub const ALL: [Self; 6] = [
        Self::Cm,
        Self::Mondopoint,
        Self::Eu,
        Self::Uk,
        Self::UsMen,
        Self::UsWomen,
    ];

    /// Wire name of the system
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Mondopoint => "mondopoint",
            Self::Eu => "eu",
            Self::Uk => "uk",
            Self::UsMen => "us-men",
            Self::UsWomen => "us-women",
        }
    }

    /// Short label used when displaying a size
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Mondopoint => "MP",
            Self::Eu => "EU",
            Self::Uk => "UK",
            Self::UsMen => "US M",
            Self::UsWomen => "US W",
        }
    }

    /// Smallest displayed step for the system
    #[must_use]
    pub const fn display_increment(&self) -> f64 {
        match self {
            Self::Cm => 0.1,
            Self::Mondopoint => 1.0,
            Self::Eu | Self::Uk | Self::UsMen | Self::UsWomen => 0.5,
        }
    }
}

impl fmt::Display for ShoeSizeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShoeSizeSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" => Ok(Self::Cm),
            "mondopoint" | "mp" | "mm" => Ok(Self::Mondopoint),
            "eu" => Ok(Self::Eu),
            "uk" => Ok(Self::Uk),
            "us-men" | "us_men" | "us" => Ok(Self::UsMen),
            "us-women" | "us_women" => Ok(Self::UsWomen),
            other => Err(AppError::invalid_input(format!(
                "Unknown shoe size system: '{other}'. Valid options: cm, mondopoint, eu, uk, us-men, us-women"
            ))),
        }
    }
}

/// Unit used to display body and equipment lengths
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Centimeters
    #[default]
    Cm,
    /// Inches
    In,
}

impl LengthUnit {
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;

    /// Unit suffix used in formatted output
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::In => "in",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for LengthUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "metric" => Ok(Self::Cm),
            "in" | "inch" | "inches" | "imperial" => Ok(Self::In),
            other => Err(AppError::invalid_input(format!(
                "Unknown length unit: '{other}'. Valid options: cm, in"
            ))),
        }
    }
}
