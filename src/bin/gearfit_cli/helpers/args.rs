// ABOUTME: Shared clap argument groups describing a person's body measurements
// ABOUTME: Turns command-line values into engine Measurements stamped with the current time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

use chrono::Utc;
use clap::Args;
use gearfit::models::Measurements;

/// Foot measurements
#[derive(Args)]
pub struct FootArgs {
    /// Foot length of the longer foot (cm)
    #[arg(long)]
    pub foot_length: f64,

    /// Foot width at the widest point (cm)
    #[arg(long)]
    pub foot_width: Option<f64>,

    /// Everyday US shoe size
    #[arg(long)]
    pub shoe_size_us: Option<f64>,
}

impl FootArgs {
    /// Measurements carrying only foot data
    #[must_use]
    pub fn to_measurements(&self) -> Measurements {
        self.apply(Measurements::new(0.0, 0.0, self.foot_length, Utc::now()))
    }

    fn apply(&self, mut measurements: Measurements) -> Measurements {
        measurements.foot_width_left = self.foot_width;
        measurements.foot_width_right = self.foot_width;
        measurements.shoe_size_us = self.shoe_size_us;
        measurements
    }
}

/// Height, weight and feet
#[derive(Args)]
pub struct BodyArgs {
    /// Standing height (cm)
    #[arg(long)]
    pub height: f64,

    /// Body weight (kg)
    #[arg(long)]
    pub weight: f64,

    #[command(flatten)]
    pub feet: FootArgs,
}

impl BodyArgs {
    /// Measurements taken now
    #[must_use]
    pub fn to_measurements(&self) -> Measurements {
        self.feet.apply(Measurements::new(
            self.height,
            self.weight,
            self.feet.foot_length,
            Utc::now(),
        ))
    }
}
