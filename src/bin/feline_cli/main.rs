// ABOUTME: Feline CLI - command-line access to the DER calculator and feeding plans
// ABOUTME: Reads cat profiles from files, stdin, or flags and prints text or JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # DER for a stored profile document
//! feline-cli der --profile whiskers.json
//!
//! # Same, reading stdin and showing how the number was reached
//! cat whiskers.json | feline-cli der --explain
//!
//! # JSON output for scripts
//! feline-cli der --profile whiskers.json --format json
//!
//! # Profile built from flags
//! feline-cli estimate --weight 5.5 --target 4.5 --age 6 --neutered --breed maine_coon
//!
//! # Portions of a 380 kcal/100 g kibble over three meals
//! feline-cli feeding --profile whiskers.json --kcal-per-100g 380 --meals 3
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use feline_nutrition::{errors::AppResult, logging::LoggingConfig};
use std::process::ExitCode;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "feline-cli",
    about = "Feline Nutrition CLI",
    long_about = "Compute a cat's Daily Energy Requirement and turn it into food portions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (written to stderr)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Output rendering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate the DER of a profile document
    Der {
        /// Profile JSON file (`-` or omitted reads stdin)
        #[arg(long)]
        profile: Option<String>,

        /// Show the calculation breakdown
        #[arg(long)]
        explain: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Calculate the DER of a profile given as flags
    Estimate {
        /// Current body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Target body weight (kg)
        #[arg(long)]
        target: Option<f64>,

        /// Age in years (fractions allowed)
        #[arg(long)]
        age: Option<f64>,

        /// The cat is neutered
        #[arg(long)]
        neutered: bool,

        /// Activity level (low, moderate, high)
        #[arg(long)]
        activity: Option<String>,

        /// Physiological state (normal, pregnant, lactating, recovering)
        #[arg(long)]
        state: Option<String>,

        /// Chronic disease (none, hyperthyroidism, kidney_disease, ...)
        #[arg(long)]
        disease: Option<String>,

        /// Breed (mixed, sphynx, bengal, maine_coon, ...)
        #[arg(long)]
        breed: Option<String>,

        /// Show the calculation breakdown
        #[arg(long)]
        explain: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Convert a profile's DER into grams of a specific food
    Feeding {
        /// Profile JSON file (`-` reads stdin)
        #[arg(long)]
        profile: String,

        /// Calorie density of the food (kcal per 100 g)
        #[arg(long = "kcal-per-100g")]
        kcal_per_100g: f64,

        /// Meals per day
        #[arg(long, default_value_t = 2)]
        meals: u8,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error.code = ?e.code, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Der {
            profile,
            explain,
            format,
        } => commands::der::from_document(profile.as_deref(), explain, format).await,
        Command::Estimate {
            weight,
            target,
            age,
            neutered,
            activity,
            state,
            disease,
            breed,
            explain,
            format,
        } => {
            let flags = commands::der::ProfileFlags {
                weight,
                target,
                age,
                neutered,
                activity,
                state,
                disease,
                breed,
            };
            commands::der::from_flags(&flags, explain, format)
        }
        Command::Feeding {
            profile,
            kcal_per_100g,
            meals,
            format,
        } => commands::feeding::plan(&profile, kcal_per_100g, meals, format).await,
    }
}
