// ABOUTME: Helper modules for gearfit-cli
// ABOUTME: Shared measurement arguments and output printing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

pub mod args;
pub mod display;
