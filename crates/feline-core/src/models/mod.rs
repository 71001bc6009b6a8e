// ABOUTME: Core data models for the feline nutrition platform
// ABOUTME: Re-exports the cat profile record and its enumerated fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cat profile record consumed by the energy calculator
pub mod cat;

pub use cat::{
    resolve_age, ActivityLevel, Breed, CatProfile, ChronicDisease, PhysiologicalState,
    DEFAULT_AGE_YEARS,
};
