// ABOUTME: Route module organization for the feline nutrition HTTP endpoints
// ABOUTME: Groups health checks and energy calculations into per-domain routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain module exposes a `routes(resources)` constructor returning an
//! axum `Router` with its state attached; [`crate::server::build_router`]
//! merges them.

/// Energy requirement and feeding plan routes
pub mod energy;
/// Health check and readiness routes
pub mod health;

pub use energy::EnergyRoutes;
pub use health::HealthRoutes;
