// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, HTTP endpoints, ports, and request limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants grouped by domain.

/// Service identifiers used in structured logs
pub mod service_names {
    /// HTTP server service name
    pub const FELINE_NUTRITION_SERVER: &str = "feline-nutrition-server";
    /// Command-line tool name
    pub const FELINE_CLI: &str = "feline-cli";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// Daily energy requirement for a single profile
    pub const ENERGY_DER: &str = "/api/energy/der";
    /// Daily energy requirement for many profiles
    pub const ENERGY_DER_BATCH: &str = "/api/energy/der/batch";
    /// Food portions for a daily target
    pub const ENERGY_FEEDING_PLAN: &str = "/api/energy/feeding-plan";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Request and resource limits
pub mod limits {
    /// Default number of memoized DER results
    pub const DEFAULT_DER_CACHE_CAPACITY: usize = 1024;
    /// Default upper bound on profiles accepted by one batch request
    pub const DEFAULT_MAX_BATCH_PROFILES: usize = 500;
    /// Fewest meals a feeding plan may be split into
    pub const MIN_MEALS_PER_DAY: u8 = 1;
    /// Most meals a feeding plan may be split into
    pub const MAX_MEALS_PER_DAY: u8 = 12;
    /// Meals per day when none is requested
    pub const DEFAULT_MEALS_PER_DAY: u8 = 2;
}
