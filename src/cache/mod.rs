// ABOUTME: Bounded LRU memoization of DER calculations keyed by the full cat profile
// ABOUTME: Tracks hit and miss counts for the readiness endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! DER memo cache
//!
//! The calculator is pure, so two structurally equal profiles always produce
//! the same breakdown. [`DerCache`] keeps the most recent results in an
//! `lru::LruCache` behind an async mutex. Floats are keyed by bit pattern.

use feline_core::models::{ActivityLevel, Breed, CatProfile, ChronicDisease, PhysiologicalState};
use feline_intelligence::{calculate_der_breakdown, DerBreakdown};
use lru::LruCache;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

/// Hashable projection of every calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileKey {
    current_weight: u64,
    target_weight: Option<u64>,
    age: Option<u64>,
    is_neutered: bool,
    activity_level: ActivityLevel,
    physiological_state: PhysiologicalState,
    chronic_disease: ChronicDisease,
    breed: Breed,
}

impl From<&CatProfile> for ProfileKey {
    fn from(profile: &CatProfile) -> Self {
        Self {
            current_weight: profile.current_weight.to_bits(),
            target_weight: profile.target_weight.map(f64::to_bits),
            age: profile.age.map(f64::to_bits),
            is_neutered: profile.is_neutered,
            activity_level: profile.activity_level,
            physiological_state: profile.physiological_state,
            chronic_disease: profile.chronic_disease,
            breed: profile.breed,
        }
    }
}

/// Snapshot of cache usage
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CacheStats {
    /// Configured capacity (0 when disabled)
    pub capacity: usize,
    /// Entries currently held
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran the calculator
    pub misses: u64,
}

/// LRU memo of calculator breakdowns
pub struct DerCache {
    store: Option<Mutex<LruCache<ProfileKey, Option<DerBreakdown>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl DerCache {
    /// Create a cache holding at most `capacity` results; `0` disables caching
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let store = NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap)));
        if store.is_none() {
            debug!("DER cache disabled");
        }
        Self {
            store,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Whether results are retained between calls
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Breakdown for a profile, computing and storing it on a miss
    pub async fn breakdown(&self, profile: &CatProfile) -> Option<DerBreakdown> {
        let Some(store) = &self.store else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return calculate_der_breakdown(Some(profile));
        };

        let key = ProfileKey::from(profile);
        // One lock for lookup and insert: concurrent misses on a key compute once
        let mut guard = store.lock().await;
        if let Some(cached) = guard.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let computed = calculate_der_breakdown(Some(profile));
        guard.put(key, computed.clone());
        drop(guard);
        computed
    }

    /// Rounded DER for a profile (`0` when indeterminate)
    pub async fn daily_energy_requirement(&self, profile: &CatProfile) -> u32 {
        self.breakdown(profile).await.map_or(0, |breakdown| breakdown.der)
    }

    /// Current usage statistics
    pub async fn stats(&self) -> CacheStats {
        let (capacity, entries) = match &self.store {
            Some(store) => {
                let guard = store.lock().await;
                let usage = (guard.cap().get(), guard.len());
                drop(guard);
                usage
            }
            None => (0, 0),
        };
        CacheStats {
            capacity,
            entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_second_lookup_is_a_hit() {
        let cache = DerCache::new(8);
        let profile = CatProfile::new(4.0);

        let first = cache.daily_energy_requirement(&profile).await;
        let second = cache.daily_energy_requirement(&profile).await;
        assert_eq!(first, second);

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[tokio::test]
    async fn test_capacity_bounds_entries() {
        let cache = DerCache::new(2);
        for weight in [3.0, 4.0, 5.0] {
            cache.breakdown(&CatProfile::new(weight)).await;
        }
        let stats = cache.stats().await;
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.capacity, 2);
    }

    #[tokio::test]
    async fn test_zero_capacity_disables_cache() {
        let cache = DerCache::new(0);
        assert!(!cache.is_enabled());
        let profile = CatProfile::new(4.0);
        cache.breakdown(&profile).await;
        cache.breakdown(&profile).await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.entries, 0);
    }

    #[tokio::test]
    async fn test_indeterminate_profile_is_cached_as_none() {
        let cache = DerCache::new(4);
        let profile = CatProfile::new(-1.0);
        assert!(cache.breakdown(&profile).await.is_none());
        assert_eq!(cache.daily_energy_requirement(&profile).await, 0);
        assert_eq!(cache.stats().await.hits, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_lookups_compute_once() {
        let cache = std::sync::Arc::new(DerCache::new(8));
        let profile = CatProfile::new(4.5);

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let cache = std::sync::Arc::clone(&cache);
                let profile = profile.clone();
                tokio::spawn(async move { cache.daily_energy_requirement(&profile).await })
            })
            .collect();

        let mut values = Vec::new();
        for task in tasks {
            values.push(task.await.unwrap());
        }
        assert!(values.windows(2).all(|pair| pair[0] == pair[1]));

        let stats = cache.stats().await;
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 15);
    }

    #[test]
    fn test_key_distinguishes_every_input() {
        let base = CatProfile::new(4.0);
        let mut neutered = base.clone();
        neutered.is_neutered = true;
        let mut aged = base.clone();
        aged.age = Some(4.0);

        assert_ne!(ProfileKey::from(&base), ProfileKey::from(&neutered));
        assert_ne!(ProfileKey::from(&base), ProfileKey::from(&aged));
        assert_eq!(ProfileKey::from(&base), ProfileKey::from(&base.clone()));
    }
}
