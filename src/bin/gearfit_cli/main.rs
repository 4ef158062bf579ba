// ABOUTME: Gearfit CLI - command-line front end for the equipment sizing engine
// ABOUTME: Converts shoe sizes, sizes skis, boots, boards, skates and helmets, and checks family records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors
//!
//! Usage:
//! ```bash
//! # Convert a shoe size between systems
//! gearfit-cli convert --value 27 --from cm --to eu
//!
//! # Size classic skis and poles
//! gearfit-cli nordic --height 180 --weight 70 --foot-length 27 --discipline classic
//!
//! # Alpine skis, DIN and boots, checking a current binding setting
//! gearfit-cli alpine --height 175 --weight 72 --foot-length 27 --skill advanced --din-setting 8
//!
//! # Maintenance alerts for a family inventory
//! gearfit-cli notifications --input family.json
//!
//! # Full report for every member
//! gearfit-cli report --input family.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gearfit::config::EngineConfig;
use gearfit::models::{
    Gender, NordicDiscipline, ShoeSizeSystem, SizingModel, SkateBrand, SkillLevel, Terrain,
};
use tracing::debug;

use helpers::args::{BodyArgs, FootArgs};

#[derive(Parser)]
#[command(
    name = "gearfit-cli",
    about = "Gearfit equipment sizing CLI",
    long_about = "Sizes family ski, snowboard and hockey equipment from body measurements and checks gear inventories for maintenance."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print a short human readable summary instead of JSON where available
    #[arg(long, global = true)]
    summary: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Convert a shoe size from one system to another
    Convert {
        /// Size to convert
        #[arg(long)]
        value: f64,

        /// System the value is expressed in
        #[arg(long)]
        from: ShoeSizeSystem,

        /// Target system
        #[arg(long)]
        to: ShoeSizeSystem,
    },

    /// Show a foot length in every shoe size system
    ShoeSizes {
        /// Foot length (cm)
        #[arg(long)]
        foot_length: f64,
    },

    /// Cross-country ski, pole and boot sizing
    Nordic {
        #[command(flatten)]
        body: BodyArgs,

        /// Discipline (classic, skate, combi)
        #[arg(long, default_value_t = NordicDiscipline::Classic)]
        discipline: NordicDiscipline,

        /// Skill level
        #[arg(long, default_value_t = SkillLevel::Intermediate)]
        skill: SkillLevel,

        /// Vendor chart (defaults to `GEARFIT_SIZING_MODEL`)
        #[arg(long)]
        model: Option<SizingModel>,
    },

    /// Alpine ski, DIN, waist width and boot sizing
    Alpine {
        #[command(flatten)]
        body: BodyArgs,

        /// Skill level
        #[arg(long, default_value_t = SkillLevel::Intermediate)]
        skill: SkillLevel,

        /// Gender used for length and flex adjustments
        #[arg(long, default_value_t = Gender::Other)]
        gender: Gender,

        /// Terrain used for the waist width band
        #[arg(long, default_value_t = Terrain::AllMountain)]
        terrain: Terrain,

        /// Current binding setting to check against the recommended range
        #[arg(long)]
        din_setting: Option<f64>,
    },

    /// Snowboard length, waist width, stance and boot sizing
    Snowboard {
        #[command(flatten)]
        body: BodyArgs,

        /// Skill level
        #[arg(long, default_value_t = SkillLevel::Intermediate)]
        skill: SkillLevel,
    },

    /// Hockey skate sizing
    Hockey {
        #[command(flatten)]
        feet: FootArgs,

        /// Skate brand chart
        #[arg(long, default_value_t = SkateBrand::Bauer)]
        brand: SkateBrand,
    },

    /// Helmet size from head circumference
    Helmet {
        /// Head circumference (cm)
        #[arg(long)]
        head_circumference: f64,
    },

    /// Maintenance and replacement alerts for a family inventory
    Notifications {
        /// JSON document with `members` and `gear`
        #[arg(long)]
        input: PathBuf,

        /// Year used for gear age (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Measurement staleness and growth trends per member
    Growth {
        /// JSON document with `members`
        #[arg(long)]
        input: PathBuf,
    },

    /// Every applicable recommendation per member
    Report {
        /// JSON document with `members`
        #[arg(long)]
        input: PathBuf,

        /// Only report on this member id
        #[arg(long)]
        member: Option<String>,

        /// Vendor chart for nordic skis (defaults to `GEARFIT_SIZING_MODEL`)
        #[arg(long)]
        model: Option<SizingModel>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EngineConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging.init()?;
    debug!(display = ?config.display, growth = ?config.growth, "Gearfit CLI configured");

    let summary = cli.summary;
    match cli.command {
        Command::Convert { value, from, to } => commands::sizing::convert(value, from, to),
        Command::ShoeSizes { foot_length } => {
            commands::sizing::shoe_sizes(foot_length, &config, summary)
        }
        Command::Nordic {
            body,
            discipline,
            skill,
            model,
        } => commands::sizing::nordic(
            &body,
            discipline,
            skill,
            model.unwrap_or(config.display.sizing_model),
            &config,
            summary,
        ),
        Command::Alpine {
            body,
            skill,
            gender,
            terrain,
            din_setting,
        } => commands::sizing::alpine(&body, skill, gender, terrain, din_setting, &config, summary),
        Command::Snowboard { body, skill } => {
            commands::sizing::snowboard(&body, skill, &config, summary)
        }
        Command::Hockey { feet, brand } => commands::sizing::hockey(&feet, brand),
        Command::Helmet { head_circumference } => commands::sizing::helmet(head_circumference),
        Command::Notifications { input, year } => commands::family::notifications(&input, year),
        Command::Growth { input } => commands::family::growth(&input, &config),
        Command::Report {
            input,
            member,
            model,
        } => commands::family::report(
            &input,
            member.as_deref(),
            model.unwrap_or(config.display.sizing_model),
            &config,
        ),
    }
}
