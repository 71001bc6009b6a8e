// ABOUTME: Cat profile model with biometric and medical fields
// ABOUTME: CatProfile, ActivityLevel, PhysiologicalState, ChronicDisease, and Breed definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};

/// Age assumed when a profile does not record one (years)
pub const DEFAULT_AGE_YEARS: f64 = 1.0;

/// Usable age in years
///
/// Absent, negative, or non-finite ages fall back to [`DEFAULT_AGE_YEARS`].
/// A recorded age of `0.0` is a newborn and is kept as is.
#[must_use]
pub fn resolve_age(age: Option<f64>) -> f64 {
    age.filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(DEFAULT_AGE_YEARS)
}

/// Day-to-day activity level of the cat
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Mostly resting, indoor
    Low,
    /// Typical indoor play
    #[default]
    Moderate,
    /// Outdoor or very playful
    High,
    /// Any value this version does not recognize
    #[serde(other)]
    Unknown,
}

impl ActivityLevel {
    /// Parse activity level from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

/// Reproductive or recovery state that overrides normal maintenance needs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PhysiologicalState {
    /// No special state
    #[default]
    Normal,
    /// Gestating queen
    Pregnant,
    /// Nursing queen
    Lactating,
    /// Convalescing after illness or surgery
    Recovering,
    /// Any value this version does not recognize
    #[serde(other)]
    Unknown,
}

impl PhysiologicalState {
    /// Parse physiological state from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "normal" => Self::Normal,
            "pregnant" => Self::Pregnant,
            "lactating" => Self::Lactating,
            "recovering" => Self::Recovering,
            _ => Self::Unknown,
        }
    }
}

/// Diagnosed chronic condition
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChronicDisease {
    /// Healthy
    #[default]
    None,
    /// Overactive thyroid
    Hyperthyroidism,
    /// Chronic kidney disease
    KidneyDisease,
    /// Diabetes mellitus
    Diabetes,
    /// Cardiomyopathy and related conditions
    HeartDisease,
    /// Lower urinary tract disease
    UrinaryTractDisease,
    /// Pancreatitis
    Pancreatitis,
    /// Inflammatory bowel disease
    InflammatoryBowelDisease,
    /// Any value this version does not recognize
    #[serde(other)]
    Unknown,
}

impl ChronicDisease {
    /// Parse chronic disease from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "none" => Self::None,
            "hyperthyroidism" => Self::Hyperthyroidism,
            "kidney_disease" => Self::KidneyDisease,
            "diabetes" => Self::Diabetes,
            "heart_disease" => Self::HeartDisease,
            "urinary_tract_disease" => Self::UrinaryTractDisease,
            "pancreatitis" => Self::Pancreatitis,
            "inflammatory_bowel_disease" => Self::InflammatoryBowelDisease,
            _ => Self::Unknown,
        }
    }
}

/// Cat breed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Breed {
    /// Mixed or unspecified breed
    #[default]
    Mixed,
    /// European Shorthair
    EuropeanShorthair,
    /// British Shorthair
    BritishShorthair,
    /// Maine Coon
    MaineCoon,
    /// Ragdoll
    Ragdoll,
    /// Siberian
    Siberian,
    /// Bengal
    Bengal,
    /// Sphynx
    Sphynx,
    /// Any value this version does not recognize
    #[serde(other)]
    Unknown,
}

impl Breed {
    /// Parse breed from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mixed" => Self::Mixed,
            "european_shorthair" => Self::EuropeanShorthair,
            "british_shorthair" => Self::BritishShorthair,
            "maine_coon" => Self::MaineCoon,
            "ragdoll" => Self::Ragdoll,
            "siberian" => Self::Siberian,
            "bengal" => Self::Bengal,
            "sphynx" => Self::Sphynx,
            _ => Self::Unknown,
        }
    }
}

/// Biometric and medical profile of one cat
///
/// Field names follow the camelCase documents stored by the client
/// application. Every field has a default so partially filled documents
/// still deserialize, and an explicit `null` reads the same as a missing
/// key. The calculator treats missing weight as indeterminate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatProfile {
    /// Current body weight in kilograms
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_weight: f64,
    /// Goal weight in kilograms; absent or non-positive means no goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Age in years, fractional part encodes months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Whether the cat is spayed or neutered
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_neutered: bool,
    /// Activity level
    #[serde(default, deserialize_with = "null_as_default")]
    pub activity_level: ActivityLevel,
    /// Physiological state
    #[serde(default, deserialize_with = "null_as_default")]
    pub physiological_state: PhysiologicalState,
    /// Chronic disease, if any
    #[serde(default, deserialize_with = "null_as_default")]
    pub chronic_disease: ChronicDisease,
    /// Breed
    #[serde(default, deserialize_with = "null_as_default")]
    pub breed: Breed,
}

/// Read a JSON `null` as the field's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CatProfile {
    /// Create a profile with only a current weight; all other fields default
    #[must_use]
    pub fn new(current_weight: f64) -> Self {
        Self {
            current_weight,
            ..Self::default()
        }
    }

    /// Goal weight if one is set (strictly positive)
    #[must_use]
    pub fn active_target_weight(&self) -> Option<f64> {
        self.target_weight.filter(|weight| *weight > 0.0)
    }

    /// Age with the default applied, see [`resolve_age`]
    #[must_use]
    pub fn age_or_default(&self) -> f64 {
        resolve_age(self.age)
    }
}
