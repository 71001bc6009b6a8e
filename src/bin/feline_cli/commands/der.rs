// ABOUTME: DER subcommands for feline-cli
// ABOUTME: Builds a profile from a JSON document or from flags and prints its energy requirement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_der_report;
use crate::{OutputFormat, Result};
use feline_nutrition::input::{load_profile, ProfileSource};
use feline_nutrition::intelligence::calculate_der_breakdown;
use feline_nutrition::models::{
    ActivityLevel, Breed, CatProfile, ChronicDisease, PhysiologicalState,
};
use feline_nutrition::routes::energy::DerResponse;

/// Profile fields supplied on the command line
pub struct ProfileFlags {
    pub weight: f64,
    pub target: Option<f64>,
    pub age: Option<f64>,
    pub neutered: bool,
    pub activity: Option<String>,
    pub state: Option<String>,
    pub disease: Option<String>,
    pub breed: Option<String>,
}

impl ProfileFlags {
    /// Build a profile; unrecognized enumerated values become `unknown`
    pub fn to_profile(&self) -> CatProfile {
        CatProfile {
            current_weight: self.weight,
            target_weight: self.target,
            age: self.age,
            is_neutered: self.neutered,
            activity_level: self
                .activity
                .as_deref()
                .map_or_else(ActivityLevel::default, ActivityLevel::from_str_lossy),
            physiological_state: self
                .state
                .as_deref()
                .map_or_else(PhysiologicalState::default, PhysiologicalState::from_str_lossy),
            chronic_disease: self
                .disease
                .as_deref()
                .map_or_else(ChronicDisease::default, ChronicDisease::from_str_lossy),
            breed: self
                .breed
                .as_deref()
                .map_or_else(Breed::default, Breed::from_str_lossy),
        }
    }
}

/// `feline-cli der`
pub async fn from_document(path: Option<&str>, explain: bool, format: OutputFormat) -> Result<()> {
    let source = ProfileSource::from_arg(path);
    let profile = load_profile(&source).await?;
    report(profile.as_ref(), explain, format)
}

/// `feline-cli estimate`
pub fn from_flags(flags: &ProfileFlags, explain: bool, format: OutputFormat) -> Result<()> {
    let profile = flags.to_profile();
    report(Some(&profile), explain, format)
}

fn report(profile: Option<&CatProfile>, explain: bool, format: OutputFormat) -> Result<()> {
    let breakdown = calculate_der_breakdown(profile);
    let response = DerResponse::new(profile, breakdown);
    print_der_report(&response, explain, format)
}
