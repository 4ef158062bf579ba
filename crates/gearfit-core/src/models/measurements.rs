// ABOUTME: Body measurement snapshots for a family member
// ABOUTME: Current measurements plus append-only history entries used for growth analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body metrics for one member at one point in time
///
/// Lengths are centimeters, weight is kilograms. Optional fields fall back to
/// documented defaults inside each sizing calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    /// Standing height (cm)
    pub height: f64,
    /// Body weight (kg)
    pub weight: f64,
    /// Left foot length, heel to longest toe (cm)
    pub foot_length_left: f64,
    /// Right foot length, heel to longest toe (cm)
    pub foot_length_right: f64,
    /// Left foot width at the widest point (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foot_width_left: Option<f64>,
    /// Right foot width at the widest point (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foot_width_right: Option<f64>,
    /// Everyday US shoe size
    #[serde(default, rename = "shoeSizeUS", skip_serializing_if = "Option::is_none")]
    pub shoe_size_us: Option<f64>,
    /// Everyday EU shoe size
    #[serde(default, rename = "shoeSizeEU", skip_serializing_if = "Option::is_none")]
    pub shoe_size_eu: Option<f64>,
    /// Arm length (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_length: Option<f64>,
    /// Inseam (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inseam: Option<f64>,
    /// Head circumference (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_circumference: Option<f64>,
    /// Hand size (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_size: Option<f64>,
    /// When the snapshot was taken
    pub measured_at: DateTime<Utc>,
}

impl Measurements {
    /// Create a snapshot with the required fields; optional fields start empty
    #[must_use]
    pub fn new(height: f64, weight: f64, foot_length: f64, measured_at: DateTime<Utc>) -> Self {
        Self {
            height,
            weight,
            foot_length_left: foot_length,
            foot_length_right: foot_length,
            foot_width_left: None,
            foot_width_right: None,
            shoe_size_us: None,
            shoe_size_eu: None,
            arm_length: None,
            inseam: None,
            head_circumference: None,
            hand_size: None,
            measured_at,
        }
    }

    /// Longer of the two feet; boots are always sized to the longer foot
    #[must_use]
    pub fn max_foot_length(&self) -> f64 {
        self.foot_length_left.max(self.foot_length_right)
    }

    /// Wider of the recorded foot widths, `None` when neither is recorded
    #[must_use]
    pub fn max_foot_width(&self) -> Option<f64> {
        match (self.foot_width_left, self.foot_width_right) {
            (Some(left), Some(right)) => Some(left.max(right)),
            (left, right) => left.or(right),
        }
    }
}

/// A historical measurement snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementEntry {
    /// Opaque entry identifier assigned by the persistence layer
    pub id: String,
    /// Standing height (cm)
    pub height: f64,
    /// Body weight (kg)
    pub weight: f64,
    /// Left foot length (cm)
    pub foot_length_left: f64,
    /// Right foot length (cm)
    pub foot_length_right: f64,
    /// Left foot width (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foot_width_left: Option<f64>,
    /// Right foot width (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foot_width_right: Option<f64>,
    /// Everyday US shoe size
    #[serde(default, rename = "shoeSizeUS", skip_serializing_if = "Option::is_none")]
    pub shoe_size_us: Option<f64>,
    /// Everyday EU shoe size
    #[serde(default, rename = "shoeSizeEU", skip_serializing_if = "Option::is_none")]
    pub shoe_size_eu: Option<f64>,
    /// Arm length (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_length: Option<f64>,
    /// Inseam (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inseam: Option<f64>,
    /// Head circumference (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_circumference: Option<f64>,
    /// Hand size (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_size: Option<f64>,
    /// When the snapshot was recorded
    pub recorded_at: DateTime<Utc>,
}

impl MeasurementEntry {
    /// Record a history entry from a measurement snapshot
    #[must_use]
    pub fn from_measurements(id: impl Into<String>, measurements: &Measurements) -> Self {
        Self {
            id: id.into(),
            height: measurements.height,
            weight: measurements.weight,
            foot_length_left: measurements.foot_length_left,
            foot_length_right: measurements.foot_length_right,
            foot_width_left: measurements.foot_width_left,
            foot_width_right: measurements.foot_width_right,
            shoe_size_us: measurements.shoe_size_us,
            shoe_size_eu: measurements.shoe_size_eu,
            arm_length: measurements.arm_length,
            inseam: measurements.inseam,
            head_circumference: measurements.head_circumference,
            hand_size: measurements.hand_size,
            recorded_at: measurements.measured_at,
        }
    }
}
