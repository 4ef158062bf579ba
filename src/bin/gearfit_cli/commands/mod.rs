// ABOUTME: Command modules for gearfit-cli
// ABOUTME: Single-person sizing commands and family-document commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

pub mod family;
pub mod sizing;
