// ABOUTME: Core types and constants for the Gearfit equipment sizing engine
// ABOUTME: Foundation crate with error handling, data models, sizing constants, and display config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

#![deny(unsafe_code)]

//! # Gearfit Core
//!
//! Foundation crate providing shared types and constants for the Gearfit
//! equipment sizing engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Plain, serializable records exchanged with the UI and persistence layers
//! - **constants**: Sizing tables and thresholds organized by sport
//! - **config**: Display preferences and growth analysis thresholds

/// Unified error handling system with standard error codes
pub mod errors;

/// Sizing constants organized by sport and domain
pub mod constants;

/// Core data models (measurements, family members, gear items, notifications)
pub mod models;

/// Display preferences and analysis thresholds passed explicitly to the engine
pub mod config;
