// ABOUTME: Derives prioritized maintenance and replacement alerts from the gear inventory
// ABOUTME: Deterministic ids and ordering so regenerated lists can be diffed and dismissed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! # Gear Notifications
//!
//! Each gear item is checked against three independent rules:
//!
//! 1. `worn` condition produces a `replace` alert (`worn-{gearId}`)
//! 2. `fair` condition produces a `service` alert (`fair-{gearId}`)
//! 3. an item older than its type's lifetime produces an `old-gear` alert (`old-{gearId}`)
//!
//! Output is grouped replace, service, old-gear, keeping inventory order inside
//! each group.

use std::collections::HashMap;

use chrono::{Datelike, Utc};
use gearfit_core::models::{
    AppNotification, FamilyMember, GearCondition, GearItem, NotificationType,
};
use tracing::debug;

const UNKNOWN_OWNER: &str = "Unknown";

fn notification(
    kind: NotificationType,
    item: &GearItem,
    owner: Option<&FamilyMember>,
    body: String,
) -> AppNotification {
    let owner_name = owner.map_or(UNKNOWN_OWNER, |member| member.name.as_str());
    AppNotification {
        id: kind.notification_id(&item.id),
        notification_type: kind,
        member_id: owner.map(|member| member.id.clone()),
        gear_id: item.id.clone(),
        title: format!("{owner_name}'s {}", item.gear_type.label()),
        body,
    }
}

fn describe(item: &GearItem) -> String {
    format!("{} {}", item.brand, item.model).trim().to_owned()
}

/// Alerts for the given inventory as of `current_year`
#[must_use]
pub fn generate_notifications_for_year(
    members: &[FamilyMember],
    gear_items: &[GearItem],
    current_year: i32,
) -> Vec<AppNotification> {
    let owners: HashMap<&str, &FamilyMember> = members
        .iter()
        .map(|member| (member.id.as_str(), member))
        .collect();

    let mut replace = Vec::new();
    let mut service = Vec::new();
    let mut old_gear = Vec::new();

    for item in gear_items {
        let owner = owners.get(item.owner_id.as_str()).copied();
        let name = describe(item);

        match item.condition {
            GearCondition::Worn => replace.push(notification(
                NotificationType::Replace,
                item,
                owner,
                format!("{name} is worn out and should be replaced."),
            )),
            GearCondition::Fair => service.push(notification(
                NotificationType::Service,
                item,
                owner,
                format!("{name} is in fair condition and could use a service before next season."),
            )),
            GearCondition::New | GearCondition::Good => {}
        }

        if let Some(year) = item.year {
            let age = current_year - year;
            if age > item.gear_type.old_gear_threshold_years() {
                old_gear.push(notification(
                    NotificationType::OldGear,
                    item,
                    owner,
                    format!("{name} is {age} years old. Check it for wear and consider replacing it."),
                ));
            }
        }
    }

    debug!(
        replace = replace.len(),
        service = service.len(),
        old_gear = old_gear.len(),
        "Generated gear notifications"
    );

    replace.extend(service);
    replace.extend(old_gear);
    replace
}

/// Alerts for the given inventory as of the current UTC year
#[must_use]
pub fn generate_notifications(
    members: &[FamilyMember],
    gear_items: &[GearItem],
) -> Vec<AppNotification> {
    generate_notifications_for_year(members, gear_items, Utc::now().year())
}
