// ABOUTME: Core data models for the Gearfit sizing engine
// ABOUTME: Re-exports measurements, members, gear, notifications and context enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

//! # Data Models
//!
//! Plain records exchanged with the UI and persistence layers. The engine reads
//! them and never mutates them.
//!
//! ## Design Principles
//!
//! - **Serializable**: camelCase JSON fields, kebab-case enum values
//! - **Optional-tolerant**: missing optional measurements fall back to defaults in the engine
//! - **Type Safe**: every context string (sport, skill, unit system) is a parsed enum

mod gear;
mod measurements;
mod member;
mod notification;
mod sport;
mod units;

// Body measurements
pub use measurements::{MeasurementEntry, Measurements};

// Family members
pub use member::FamilyMember;

// Gear inventory
pub use gear::{
    AlpineSkiDetails, BootDetails, ExtendedGearDetails, GearCondition, GearItem, GearStatus,
    GearType, NordicSkiDetails, SkateDetails, SkiProfile, SnowboardDetails,
};

// Notifications
pub use notification::{AppNotification, NotificationType};

// Sizing context
pub use sport::{Gender, NordicDiscipline, SizingModel, SkateBrand, SkillLevel, Sport, Terrain};

// Units
pub use units::{LengthUnit, ShoeSizeSystem};
