// ABOUTME: Feeding plan subcommand for feline-cli
// ABOUTME: Converts a profile's DER into daily and per-meal grams of one food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_feeding_plan;
use crate::{OutputFormat, Result};
use feline_nutrition::errors::AppError;
use feline_nutrition::input::{load_profile, ProfileSource};
use feline_nutrition::intelligence::{calculate_daily_energy_requirement, calculate_feeding_plan};

/// `feline-cli feeding`
pub async fn plan(path: &str, kcal_per_100g: f64, meals: u8, format: OutputFormat) -> Result<()> {
    let source = ProfileSource::from_arg(Some(path));
    let profile = load_profile(&source)
        .await?
        .ok_or_else(|| AppError::missing_field("profile"))?;

    let daily_kcal = calculate_daily_energy_requirement(Some(&profile));
    let plan = calculate_feeding_plan(daily_kcal, kcal_per_100g, meals)?;
    print_feeding_plan(&plan, format)
}
