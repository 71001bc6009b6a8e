// ABOUTME: Converts a daily calorie target into gram portions of a specific food
// ABOUTME: Splits the daily amount evenly across the requested number of meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use feline_core::constants::limits::{MAX_MEALS_PER_DAY, MIN_MEALS_PER_DAY};
use feline_core::errors::AppError;
use serde::{Deserialize, Serialize};

/// Daily and per-meal portions of one food
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedingPlan {
    /// Calorie target the plan was built from (kcal/day)
    pub daily_kcal: u32,
    /// Calorie density of the food (kcal per 100 g)
    pub kcal_per_100g: f64,
    /// Number of meals the daily amount is split into
    pub meals_per_day: u8,
    /// Food per day (grams, one decimal)
    pub grams_per_day: f64,
    /// Food per meal (grams, one decimal)
    pub grams_per_meal: f64,
    /// Calories per meal (kcal, one decimal)
    pub kcal_per_meal: f64,
}

/// Build a feeding plan for a calorie target
///
/// Formula: `grams_per_day = daily_kcal / kcal_per_100g x 100`
///
/// A target of `0` (indeterminate profile) yields an all-zero plan.
///
/// # Errors
///
/// Returns an error if the calorie density is not a positive finite number
/// or the meal count is outside the supported range
pub fn calculate_feeding_plan(
    daily_kcal: u32,
    kcal_per_100g: f64,
    meals_per_day: u8,
) -> Result<FeedingPlan, AppError> {
    if !kcal_per_100g.is_finite() || kcal_per_100g <= 0.0 {
        return Err(AppError::invalid_input(
            "Calorie density must be a positive number of kcal per 100 g",
        ));
    }
    if !(MIN_MEALS_PER_DAY..=MAX_MEALS_PER_DAY).contains(&meals_per_day) {
        return Err(AppError::invalid_input(format!(
            "Meals per day must be between {MIN_MEALS_PER_DAY} and {MAX_MEALS_PER_DAY}"
        )));
    }

    let daily = f64::from(daily_kcal);
    let meals = f64::from(meals_per_day);
    let grams_per_day = daily / kcal_per_100g * 100.0;

    Ok(FeedingPlan {
        daily_kcal,
        kcal_per_100g,
        meals_per_day,
        grams_per_day: round_one_decimal(grams_per_day),
        grams_per_meal: round_one_decimal(grams_per_day / meals),
        kcal_per_meal: round_one_decimal(daily / meals),
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
