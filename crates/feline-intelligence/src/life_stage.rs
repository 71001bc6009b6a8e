// ABOUTME: Life stage classification from age and human-readable age formatting
// ABOUTME: Maps age in years to kitten/adult/senior brackets with their maintenance factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::life_stage;
use feline_core::models::resolve_age;
use serde::{Deserialize, Serialize};

/// Age bracket used to pick the maintenance factor of a healthy cat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// Younger than about 4 months
    NeonatalKitten,
    /// 4 to 12 months
    Kitten,
    /// 1 to 7 years
    Adult,
    /// Older than 7 years
    Senior,
}

impl LifeStage {
    /// Classify a recorded age, applying the default through [`resolve_age`]
    #[must_use]
    pub fn from_age(age: Option<f64>) -> Self {
        Self::from_years(resolve_age(age))
    }

    /// Classify an already resolved age in years
    #[must_use]
    pub fn from_years(age: f64) -> Self {
        if age < life_stage::NEONATAL_KITTEN_MAX_AGE {
            Self::NeonatalKitten
        } else if age < life_stage::KITTEN_MAX_AGE {
            Self::Kitten
        } else if age > life_stage::SENIOR_MIN_AGE {
            Self::Senior
        } else {
            Self::Adult
        }
    }

    /// Maintenance factor for this stage; growth stages ignore neuter status
    #[must_use]
    pub const fn base_modifier(self, is_neutered: bool) -> f64 {
        match (self, is_neutered) {
            (Self::NeonatalKitten, _) => life_stage::NEONATAL_KITTEN,
            (Self::Kitten, _) => life_stage::KITTEN,
            (Self::Adult, true) => life_stage::ADULT_NEUTERED,
            (Self::Adult, false) => life_stage::ADULT_INTACT,
            (Self::Senior, true) => life_stage::SENIOR_NEUTERED,
            (Self::Senior, false) => life_stage::SENIOR_INTACT,
        }
    }
}

/// Format an age in years as "2 years 3 months"
///
/// Returns `"Unknown"` when no usable age is recorded. Months are rounded,
/// and twelve rounded months carry into the next year.
#[must_use]
pub fn format_age(age: Option<f64>) -> String {
    let Some(age) = age.filter(|value| value.is_finite() && *value >= 0.0) else {
        return "Unknown".to_owned();
    };

    let mut years = age.trunc() as u32;
    let mut months = ((age - age.trunc()) * 12.0).round() as u32;
    if months >= 12 {
        years += 1;
        months = 0;
    }

    match (years, months) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
