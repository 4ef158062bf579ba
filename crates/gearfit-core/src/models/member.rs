// ABOUTME: Family member model with identity, current measurements and skill map
// ABOUTME: Measurement history is read chronologically by the growth analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::measurements::{MeasurementEntry, Measurements};
use super::sport::{Gender, SkillLevel, Sport};

/// A family member whose gear is being sized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    /// Opaque identifier assigned by the persistence layer
    pub id: String,
    /// Display name
    pub name: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Gender, used for alpine length and boot flex offsets
    #[serde(default)]
    pub gender: Gender,
    /// Current measurement snapshot
    pub measurements: Measurements,
    /// Earlier snapshots, in any order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measurement_history: Vec<MeasurementEntry>,
    /// Skill level per practiced sport
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub skill_levels: BTreeMap<Sport, SkillLevel>,
}

impl FamilyMember {
    /// Skill level recorded for a sport
    #[must_use]
    pub fn skill_for(&self, sport: Sport) -> Option<SkillLevel> {
        self.skill_levels.get(&sport).copied()
    }
}
