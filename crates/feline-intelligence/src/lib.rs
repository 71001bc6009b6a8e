// ABOUTME: Feline energy requirement engine and related nutrition helpers
// ABOUTME: DER calculation, life stages, batch evaluation, and feeding portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Feline Intelligence
//!
//! Pure, synchronous nutrition algorithms for cats. Nothing in this crate
//! performs I/O or holds state, so every function can be called from a
//! request handler, a batch job, or a test without setup.

/// Daily Energy Requirement calculator
pub mod der_calculator;

/// Fixed veterinary constants used by the calculator
pub mod physiological_constants;

/// Life stage classification and age display formatting
pub mod life_stage;

/// Parallel evaluation of many profiles
pub mod batch;

/// Converting a calorie target into food portions
pub mod feeding;

pub use batch::calculate_batch;
pub use der_calculator::{
    calculate_daily_energy_requirement, calculate_der_breakdown,
    calculate_resting_energy_requirement, DerBreakdown, EnergyBranch, WeightGoal,
};
pub use feeding::{calculate_feeding_plan, FeedingPlan};
pub use life_stage::{format_age, LifeStage};
