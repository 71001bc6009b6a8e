// ABOUTME: Parallel DER evaluation across many cat profiles
// ABOUTME: Uses rayon to spread CPU-bound calculations over the global thread pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::der_calculator::calculate_daily_energy_requirement;
use feline_core::models::CatProfile;
use rayon::prelude::*;

/// Below this many profiles a sequential pass is faster than fanning out
const PARALLEL_THRESHOLD: usize = 64;

/// Compute the DER of every profile, preserving input order
///
/// Each element equals `calculate_daily_energy_requirement(Some(&profile))`.
#[must_use]
pub fn calculate_batch(profiles: &[CatProfile]) -> Vec<u32> {
    if profiles.len() < PARALLEL_THRESHOLD {
        return profiles
            .iter()
            .map(|profile| calculate_daily_energy_requirement(Some(profile)))
            .collect();
    }

    profiles
        .par_iter()
        .map(|profile| calculate_daily_energy_requirement(Some(profile)))
        .collect()
}
