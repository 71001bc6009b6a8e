// ABOUTME: Daily Energy Requirement calculation for cats from profile data
// ABOUTME: RER from body mass, condition-priority multiplier, breed correction, and rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Energy Requirement (DER) Calculator
//!
//! Converts a [`CatProfile`] into a target daily intake in kilocalories.
//!
//! Stages, each pure and synchronous:
//!
//! 1. Effective weight: the goal weight when one is set, otherwise the current weight.
//!    A missing profile or a non-positive weight short-circuits to `0`.
//! 2. Resting Energy Requirement: `RER = 70 x weight^0.75`.
//! 3. Condition multiplier, first match wins:
//!    chronic disease, then physiological state, then the normal adult rules
//!    (life stage x neuter status, overridden by a weight goal, otherwise
//!    scaled by activity level).
//! 4. Breed modifier.
//! 5. `round(RER x condition x breed)`.
//!
//! # Reference
//! WSAVA Global Nutrition Committee energy requirement guidelines;
//! Hand et al. (2010) Small Animal Clinical Nutrition, chapter 6.

use crate::life_stage::LifeStage;
use crate::physiological_constants::{
    activity, breed, disease, physiological_state, rer, weight_goal, NEUTRAL_MULTIPLIER,
};
use feline_core::models::{ActivityLevel, Breed, CatProfile, ChronicDisease, PhysiologicalState};
use serde::{Deserialize, Serialize};

/// Direction of the weight plan implied by current and goal weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Current weight above goal
    Lose,
    /// Current weight below goal
    Gain,
    /// No goal, or already at goal
    Maintain,
}

/// The single branch of the condition resolver that produced the multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "branch", rename_all = "snake_case")]
pub enum EnergyBranch {
    /// A chronic disease is set; nothing else about the cat matters
    ChronicDisease {
        /// Diagnosed disease
        disease: ChronicDisease,
    },
    /// Healthy, but pregnant, lactating, or recovering
    PhysiologicalState {
        /// Current state
        state: PhysiologicalState,
    },
    /// Healthy cat in a normal state
    NormalAdult {
        /// Age bracket
        life_stage: LifeStage,
        /// Factor from life stage and neuter status
        base_modifier: f64,
        /// Weight plan; a goal replaces the base factor
        weight_goal: WeightGoal,
        /// Activity level, only applied when maintaining
        activity_level: ActivityLevel,
    },
}

/// Every intermediate value of one DER calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerBreakdown {
    /// Weight fed into the RER formula (kg)
    pub effective_weight_kg: f64,
    /// Resting Energy Requirement (kcal/day)
    pub rer: f64,
    /// Branch that selected the condition multiplier
    pub branch: EnergyBranch,
    /// Multiplier chosen by the branch
    pub condition_multiplier: f64,
    /// Breed correction
    pub breed_modifier: f64,
    /// DER before rounding (kcal/day)
    pub unrounded_der: f64,
    /// DER rounded to the nearest kilocalorie
    pub der: u32,
}

/// Resting Energy Requirement in kcal/day
///
/// Formula: `RER = 70 x weight_kg^0.75`
#[must_use]
pub fn calculate_resting_energy_requirement(weight_kg: f64) -> f64 {
    rer::COEFFICIENT * weight_kg.powf(rer::EXPONENT)
}

/// Weight used for the RER: the goal when set and positive, else the current weight
#[must_use]
pub fn effective_weight(profile: &CatProfile) -> f64 {
    profile
        .active_target_weight()
        .unwrap_or(profile.current_weight)
}

/// Weight plan implied by the profile
#[must_use]
pub fn weight_goal(profile: &CatProfile) -> WeightGoal {
    match profile.active_target_weight() {
        Some(target) if profile.current_weight > target => WeightGoal::Lose,
        Some(target) if profile.current_weight < target => WeightGoal::Gain,
        _ => WeightGoal::Maintain,
    }
}

/// Disease multiplier, or `None` for a healthy cat
#[must_use]
pub const fn disease_multiplier(chronic_disease: ChronicDisease) -> Option<f64> {
    match chronic_disease {
        ChronicDisease::None => None,
        ChronicDisease::Hyperthyroidism => Some(disease::HYPERTHYROIDISM),
        ChronicDisease::KidneyDisease => Some(disease::KIDNEY_DISEASE),
        ChronicDisease::Diabetes => Some(disease::DIABETES),
        ChronicDisease::HeartDisease => Some(disease::HEART_DISEASE),
        ChronicDisease::UrinaryTractDisease => Some(disease::URINARY_TRACT_DISEASE),
        ChronicDisease::Pancreatitis => Some(disease::PANCREATITIS),
        ChronicDisease::InflammatoryBowelDisease => Some(disease::INFLAMMATORY_BOWEL_DISEASE),
        ChronicDisease::Unknown => Some(NEUTRAL_MULTIPLIER),
    }
}

/// State multiplier, or `None` in the normal state
#[must_use]
pub const fn physiological_state_multiplier(state: PhysiologicalState) -> Option<f64> {
    match state {
        PhysiologicalState::Normal => None,
        PhysiologicalState::Pregnant => Some(physiological_state::PREGNANT),
        PhysiologicalState::Lactating => Some(physiological_state::LACTATING),
        PhysiologicalState::Recovering => Some(physiological_state::RECOVERING),
        PhysiologicalState::Unknown => Some(NEUTRAL_MULTIPLIER),
    }
}

/// Activity adjustment for a cat without a weight goal
#[must_use]
pub const fn activity_factor(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::High => activity::HIGH,
        ActivityLevel::Low => activity::LOW,
        ActivityLevel::Moderate | ActivityLevel::Unknown => NEUTRAL_MULTIPLIER,
    }
}

/// Breed correction applied after the condition multiplier
#[must_use]
pub const fn breed_modifier(cat_breed: Breed) -> f64 {
    match cat_breed {
        Breed::Sphynx => breed::SPHYNX,
        Breed::Bengal => breed::BENGAL,
        Breed::BritishShorthair => breed::BRITISH_SHORTHAIR,
        Breed::Ragdoll => breed::RAGDOLL,
        Breed::Mixed
        | Breed::EuropeanShorthair
        | Breed::MaineCoon
        | Breed::Siberian
        | Breed::Unknown => NEUTRAL_MULTIPLIER,
    }
}

/// Select the condition multiplier; exactly one branch applies
#[must_use]
pub fn resolve_condition(profile: &CatProfile) -> (EnergyBranch, f64) {
    if let Some(multiplier) = disease_multiplier(profile.chronic_disease) {
        return (
            EnergyBranch::ChronicDisease {
                disease: profile.chronic_disease,
            },
            multiplier,
        );
    }

    if let Some(multiplier) = physiological_state_multiplier(profile.physiological_state) {
        return (
            EnergyBranch::PhysiologicalState {
                state: profile.physiological_state,
            },
            multiplier,
        );
    }

    let life_stage = LifeStage::from_years(profile.age_or_default());
    let base_modifier = life_stage.base_modifier(profile.is_neutered);
    let goal = weight_goal(profile);

    let multiplier = match goal {
        WeightGoal::Lose => weight_goal::LOSS,
        WeightGoal::Gain => weight_goal::GAIN,
        WeightGoal::Maintain => base_modifier * activity_factor(profile.activity_level),
    };

    (
        EnergyBranch::NormalAdult {
            life_stage,
            base_modifier,
            weight_goal: goal,
            activity_level: profile.activity_level,
        },
        multiplier,
    )
}

/// Run the full calculation and keep every intermediate value
///
/// Returns `None` when the profile is absent or the effective weight is not a
/// positive finite number.
#[must_use]
pub fn calculate_der_breakdown(profile: Option<&CatProfile>) -> Option<DerBreakdown> {
    let profile = profile?;

    let effective_weight_kg = effective_weight(profile);
    if !effective_weight_kg.is_finite() || effective_weight_kg <= 0.0 {
        return None;
    }

    let rer = calculate_resting_energy_requirement(effective_weight_kg);
    let (branch, condition_multiplier) = resolve_condition(profile);
    let breed_modifier = breed_modifier(profile.breed);
    let unrounded_der = rer * condition_multiplier * breed_modifier;

    Some(DerBreakdown {
        effective_weight_kg,
        rer,
        branch,
        condition_multiplier,
        breed_modifier,
        unrounded_der,
        der: unrounded_der.round() as u32,
    })
}

/// Daily Energy Requirement in kcal/day
///
/// Never fails: an absent profile or a non-positive effective weight yields `0`.
#[must_use]
pub fn calculate_daily_energy_requirement(profile: Option<&CatProfile>) -> u32 {
    calculate_der_breakdown(profile).map_or(0, |breakdown| breakdown.der)
}
