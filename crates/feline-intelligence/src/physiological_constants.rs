// ABOUTME: Veterinary energy constants for feline maintenance calculations
// ABOUTME: RER formula, condition multipliers, life stage bounds, and breed modifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants for feline energy requirements
//!
//! These values are fixed domain constants, not configuration. They follow
//! the resting energy formula and factor tables used in small-animal clinical
//! nutrition.
//!
//! References:
//! - WSAVA Global Nutrition Committee, Energy requirement guidelines
//! - Hand, M.S. et al. (2010). Small Animal Clinical Nutrition, 5th Edition

/// Resting Energy Requirement formula: `RER = 70 x weight_kg^0.75`
pub mod rer {
    /// Coefficient of the allometric RER formula (kcal/day)
    pub const COEFFICIENT: f64 = 70.0;

    /// Metabolic body weight exponent
    pub const EXPONENT: f64 = 0.75;
}

/// Multipliers applied when a chronic disease is diagnosed
pub mod disease {
    /// Hyperthyroidism raises metabolic rate
    pub const HYPERTHYROIDISM: f64 = 1.5;
    /// Kidney disease: maintenance at resting level
    pub const KIDNEY_DISEASE: f64 = 1.0;
    /// Diabetes mellitus
    pub const DIABETES: f64 = 1.2;
    /// Heart disease
    pub const HEART_DISEASE: f64 = 1.3;
    /// Urinary tract disease
    pub const URINARY_TRACT_DISEASE: f64 = 0.8;
    /// Pancreatitis
    pub const PANCREATITIS: f64 = 1.1;
    /// Inflammatory bowel disease
    pub const INFLAMMATORY_BOWEL_DISEASE: f64 = 1.2;
}

/// Multipliers for reproductive and recovery states
pub mod physiological_state {
    /// Gestation
    pub const PREGNANT: f64 = 2.0;
    /// Lactation
    pub const LACTATING: f64 = 3.5;
    /// Convalescence
    pub const RECOVERING: f64 = 1.3;
}

/// Life stage boundaries (years) and the maintenance factors tied to them
pub mod life_stage {
    /// Below this age a kitten is in its fastest growth phase (about 4 months)
    pub const NEONATAL_KITTEN_MAX_AGE: f64 = 0.33;
    /// Below this age the cat is still a kitten
    pub const KITTEN_MAX_AGE: f64 = 1.0;
    /// Above this age the cat is a senior
    pub const SENIOR_MIN_AGE: f64 = 7.0;

    /// Growth factor for kittens under 4 months
    pub const NEONATAL_KITTEN: f64 = 3.0;
    /// Growth factor for kittens 4 to 12 months
    pub const KITTEN: f64 = 2.5;
    /// Neutered adult
    pub const ADULT_NEUTERED: f64 = 1.2;
    /// Intact adult
    pub const ADULT_INTACT: f64 = 1.4;
    /// Neutered senior
    pub const SENIOR_NEUTERED: f64 = 1.0;
    /// Intact senior
    pub const SENIOR_INTACT: f64 = 1.2;
}

/// Factors for cats on a weight change plan
pub mod weight_goal {
    /// Weight loss plan
    pub const LOSS: f64 = 0.8;
    /// Weight gain plan
    pub const GAIN: f64 = 1.4;
}

/// Activity adjustments, only applied when there is no weight goal
pub mod activity {
    /// High activity
    pub const HIGH: f64 = 1.2;
    /// Low activity
    pub const LOW: f64 = 0.8;
}

/// Breed-specific corrections applied after the condition multiplier
pub mod breed {
    /// Hairless breeds lose more heat
    pub const SPHYNX: f64 = 1.2;
    /// Bengal
    pub const BENGAL: f64 = 1.1;
    /// British Shorthair
    pub const BRITISH_SHORTHAIR: f64 = 0.95;
    /// Ragdoll
    pub const RAGDOLL: f64 = 0.95;
}

/// Factor used wherever an input is unrecognized
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;
