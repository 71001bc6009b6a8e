// ABOUTME: Output formatting helpers for feline-cli
// ABOUTME: Renders DER reports and feeding plans as text or JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{OutputFormat, Result};
use feline_nutrition::intelligence::{EnergyBranch, FeedingPlan};
use feline_nutrition::routes::energy::DerResponse;

/// Print a DER report
///
/// JSON output always includes the breakdown; `explain` only affects text.
pub fn print_der_report(report: &DerResponse, explain: bool, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Daily energy requirement: {} kcal/day", report.daily_kcal);
    println!("Age: {}", report.age_display);

    if !explain {
        return Ok(());
    }

    let Some(breakdown) = &report.breakdown else {
        println!("No calculation: the profile has no usable body weight");
        return Ok(());
    };

    println!("{}", "-".repeat(48));
    println!("Effective weight:     {:.2} kg", breakdown.effective_weight_kg);
    println!("Resting energy (RER): {:.1} kcal/day", breakdown.rer);
    match breakdown.branch {
        EnergyBranch::ChronicDisease { disease } => {
            println!("Condition:            chronic disease ({disease:?})");
        }
        EnergyBranch::PhysiologicalState { state } => {
            println!("Condition:            physiological state ({state:?})");
        }
        EnergyBranch::NormalAdult {
            life_stage,
            base_modifier,
            weight_goal,
            activity_level,
        } => {
            println!("Life stage:           {life_stage:?} (base {base_modifier})");
            println!("Weight goal:          {weight_goal:?}");
            println!("Activity:             {activity_level:?}");
        }
    }
    println!("Condition multiplier: {:.2}", breakdown.condition_multiplier);
    println!("Breed modifier:       {:.2}", breakdown.breed_modifier);
    println!("Unrounded DER:        {:.2} kcal/day", breakdown.unrounded_der);
    Ok(())
}

/// Print a feeding plan
pub fn print_feeding_plan(plan: &FeedingPlan, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    println!("Daily energy requirement: {} kcal/day", plan.daily_kcal);
    println!("Food density:             {} kcal/100 g", plan.kcal_per_100g);
    println!("Per day:                  {:.1} g", plan.grams_per_day);
    println!(
        "Per meal ({} meals):      {:.1} g ({:.1} kcal)",
        plan.meals_per_day, plan.grams_per_meal, plan.kcal_per_meal
    );
    Ok(())
}
