// ABOUTME: Main library entry point for the Gearfit equipment sizing engine
// ABOUTME: Re-exports the core and intelligence crates plus logging, config and display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

#![deny(unsafe_code)]

//! # Gearfit
//!
//! Family equipment sizing for skiing, snowboarding and hockey. Body
//! measurements go in; ski lengths, pole lengths, boot sizes, DIN settings,
//! board and skate sizes, helmet sizes, growth warnings and gear maintenance
//! alerts come out.
//!
//! ## Architecture
//!
//! - **`gearfit-core`**: errors, plain data models, sizing constants, display preferences
//! - **`gearfit-intelligence`**: the pure calculation engine
//! - **this crate**: logging setup, environment configuration, display formatting
//!   and the `gearfit-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use gearfit::intelligence::sizing::calculate_nordic_ski_sizing;
//! use gearfit::models::{Measurements, NordicDiscipline, SkillLevel};
//!
//! let measurements = Measurements::new(180.0, 70.0, 27.0, Utc::now());
//! let sizing = calculate_nordic_ski_sizing(
//!     &measurements,
//!     NordicDiscipline::Classic,
//!     SkillLevel::Intermediate,
//! );
//! assert_eq!((sizing.ski_length.min, sizing.ski_length.max), (190, 200));
//! assert_eq!(sizing.ski_length.recommended, 193);
//! ```

/// Unified error handling
pub use gearfit_core::errors;

/// Plain data models
pub use gearfit_core::models;

/// Sizing constants
pub use gearfit_core::constants;

/// Calculation engine
pub use gearfit_intelligence as intelligence;

/// Environment-driven engine configuration
pub mod config;

/// Display formatting driven by explicit preferences
pub mod formatters;

/// Family and gear records loaded from JSON
pub mod input;

/// Structured logging setup
pub mod logging;
