// ABOUTME: Loads family member and gear inventory records from JSON documents
// ABOUTME: Shared by the command-line tool and by tests that feed records from disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use std::fs;
use std::path::Path;

use gearfit_core::errors::{AppError, AppResult};
use gearfit_core::models::{FamilyMember, GearItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A family's members and their gear, as exchanged with the persistence layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyData {
    /// Family members
    #[serde(default)]
    pub members: Vec<FamilyMember>,
    /// Gear inventory
    #[serde(default)]
    pub gear: Vec<GearItem>,
}

impl FamilyData {
    /// Parse a JSON document
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the document does not match the record shapes
    /// and `MissingRequiredField` if a member or gear item has an empty id
    pub fn from_json(json: &str) -> AppResult<Self> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Check that every record carries the ids notifications and reports key on
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first empty id
    pub fn validate(&self) -> AppResult<()> {
        if let Some(index) = self.members.iter().position(|m| m.id.trim().is_empty()) {
            return Err(AppError::missing_field(format!("members[{index}].id")));
        }
        for (index, item) in self.gear.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(AppError::missing_field(format!("gear[{index}].id")));
            }
            if item.owner_id.trim().is_empty() {
                return Err(AppError::missing_field(format!("gear[{index}].ownerId")));
            }
        }
        Ok(())
    }

    /// Look up a member by id
    #[must_use]
    pub fn member(&self, id: &str) -> Option<&FamilyMember> {
        self.members.iter().find(|member| member.id == id)
    }
}

/// Read a family document from disk
///
/// # Errors
///
/// Returns `InternalError` if the file cannot be read, `SerializationError`
/// if its content is not a valid family document and `MissingRequiredField`
/// if a record has an empty id
pub fn load_family_data(path: &Path) -> AppResult<FamilyData> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::internal(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    let data = FamilyData::from_json(&json)?;
    debug!(
        path = %path.display(),
        members = data.members.len(),
        gear = data.gear.len(),
        "Loaded family data"
    );
    Ok(data)
}
