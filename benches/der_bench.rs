// ABOUTME: Criterion benchmarks for the daily energy requirement calculator
// ABOUTME: Measures single-profile calculation, breakdowns, batch evaluation, and the memo cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for DER calculation.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use feline_nutrition::cache::DerCache;
use feline_nutrition::intelligence::{
    calculate_batch, calculate_daily_energy_requirement, calculate_der_breakdown,
};
use feline_nutrition::models::{
    ActivityLevel, Breed, CatProfile, ChronicDisease, PhysiologicalState,
};

/// Deterministic mix of profiles covering every branch
fn generate_profiles(count: u32) -> Vec<CatProfile> {
    (0..count)
        .map(|index| CatProfile {
            current_weight: 2.5 + f64::from(index % 60) / 10.0,
            target_weight: (index % 3 == 0).then_some(4.0),
            age: Some(f64::from(index % 18) * 0.75),
            is_neutered: index % 2 == 0,
            activity_level: match index % 3 {
                0 => ActivityLevel::Low,
                1 => ActivityLevel::Moderate,
                _ => ActivityLevel::High,
            },
            physiological_state: if index % 11 == 0 {
                PhysiologicalState::Lactating
            } else {
                PhysiologicalState::Normal
            },
            chronic_disease: if index % 7 == 0 {
                ChronicDisease::KidneyDisease
            } else {
                ChronicDisease::None
            },
            breed: if index % 5 == 0 {
                Breed::Bengal
            } else {
                Breed::Mixed
            },
        })
        .collect()
}

fn bench_single_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("der_single");
    let profile = generate_profiles(1).remove(0);

    group.bench_function("calculate_daily_energy_requirement", |b| {
        b.iter(|| calculate_daily_energy_requirement(black_box(Some(&profile))));
    });
    group.bench_function("calculate_der_breakdown", |b| {
        b.iter(|| calculate_der_breakdown(black_box(Some(&profile))));
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("der_batch");

    for count in [10_u32, 100, 500] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(
            BenchmarkId::new("calculate_batch", count),
            &profiles,
            |b, profiles| b.iter(|| calculate_batch(black_box(profiles))),
        );
    }

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("der_cache");
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let profiles = generate_profiles(64);
    let cache = DerCache::new(1024);

    group.bench_function("warm_lookup", |b| {
        b.iter(|| {
            runtime.block_on(async {
                for profile in &profiles {
                    black_box(cache.daily_energy_requirement(profile).await);
                }
            });
        });
    });

    group.finish();
}

criterion_group!(benches, bench_single_profile, bench_batch, bench_cache);
criterion_main!(benches);
