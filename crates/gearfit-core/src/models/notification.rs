// ABOUTME: Derived maintenance and replacement alerts for gear items
// ABOUTME: Notifications are regenerated on demand and never stored by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use serde::{Deserialize, Serialize};

/// Kind of gear alert, in priority order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationType {
    /// Worn out, replace it
    Replace,
    /// Fair condition, take it in for service
    Service,
    /// Older than its type's lifetime threshold
    OldGear,
}

impl NotificationType {
    /// Prefix used to build deterministic notification ids
    #[must_use]
    pub const fn id_prefix(&self) -> &'static str {
        match self {
            Self::Replace => "worn",
            Self::Service => "fair",
            Self::OldGear => "old",
        }
    }

    /// Deterministic id for this kind of alert on a gear item
    #[must_use]
    pub fn notification_id(&self, gear_id: &str) -> String {
        format!("{}-{gear_id}", self.id_prefix())
    }
}

/// A maintenance or replacement alert for one gear item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppNotification {
    /// Deterministic id (`"{kind}-{gearId}"`), usable as a dismissal key
    pub id: String,
    /// Alert kind
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    /// Owning member, `None` when the owner could not be resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// Gear item the alert is about
    pub gear_id: String,
    /// Short headline
    pub title: String,
    /// Message body
    pub body: String,
}
