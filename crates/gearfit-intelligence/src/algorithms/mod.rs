// ABOUTME: Unit conversion algorithms used standalone and by the sizing calculations
// ABOUTME: Shoe and foot size conversion routed through centimeters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

/// Shoe size conversion between cm, mondopoint, EU, UK and US systems
pub mod shoe_size;
