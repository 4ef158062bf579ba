// ABOUTME: Output helpers for gearfit-cli
// ABOUTME: Pretty JSON on stdout for machine consumers and plain summary lines for people
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print labelled summary lines, aligned on the label column
pub fn print_summary(lines: &[(&str, String)]) {
    let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in lines {
        println!("{label:<width$}  {value}");
    }
}
