// ABOUTME: Energy requirement route handlers for single, batch, and feeding plan requests
// ABOUTME: Parses cat profiles, consults the DER cache, and returns JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy routes
//!
//! Request bodies are parsed with `serde_json` directly so malformed
//! documents produce the standard error envelope carrying the request ID.
//! A `null` or blank body on the single-profile route means "no profile".

use crate::{
    errors::AppError, input::parse_profile_document, middleware::RequestId,
    server::ServerResources,
};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use feline_core::constants::{endpoints, limits};
use feline_core::models::CatProfile;
use feline_intelligence::{
    calculate_batch, calculate_feeding_plan, format_age, DerBreakdown, LifeStage,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a single DER calculation
#[derive(Debug, Serialize, Deserialize)]
pub struct DerResponse {
    /// Daily Energy Requirement (kcal/day, `0` when indeterminate)
    pub daily_kcal: u32,
    /// Intermediate values, `null` when indeterminate
    pub breakdown: Option<DerBreakdown>,
    /// Life stage derived from age, `null` without a profile
    pub life_stage: Option<LifeStage>,
    /// Human-readable age
    pub age_display: String,
}

impl DerResponse {
    /// Assemble the response for a profile and its (possibly cached) breakdown
    #[must_use]
    pub fn new(profile: Option<&CatProfile>, breakdown: Option<DerBreakdown>) -> Self {
        let age = profile.and_then(|p| p.age);
        Self {
            daily_kcal: breakdown.as_ref().map_or(0, |b| b.der),
            breakdown,
            life_stage: profile.map(|p| LifeStage::from_age(p.age)),
            age_display: format_age(age),
        }
    }
}

/// Batch request body
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Profiles to evaluate
    pub profiles: Vec<CatProfile>,
}

/// Batch response body, one entry per input profile in order
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    /// DER values (kcal/day)
    pub results: Vec<u32>,
}

/// Feeding plan request body
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedingPlanRequest {
    /// Cat to feed
    pub profile: CatProfile,
    /// Calorie density of the food
    pub kcal_per_100g: f64,
    /// Number of meals per day
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u8,
}

const fn default_meals_per_day() -> u8 {
    limits::DEFAULT_MEALS_PER_DAY
}

/// Energy calculation routes
pub struct EnergyRoutes;

impl EnergyRoutes {
    /// Create all energy routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::ENERGY_DER, post(Self::handle_der))
            .route(endpoints::ENERGY_DER_BATCH, post(Self::handle_batch))
            .route(endpoints::ENERGY_FEEDING_PLAN, post(Self::handle_feeding_plan))
            .with_state(resources)
    }

    /// Handle a single profile (or `null`)
    async fn handle_der(
        State(resources): State<Arc<ServerResources>>,
        Extension(request_id): Extension<RequestId>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let profile = parse_profile_document(&body)
            .map_err(|e| e.with_request_id(request_id.as_str()))?;

        let breakdown = match &profile {
            Some(profile) => resources.der_cache.breakdown(profile).await,
            None => None,
        };
        let response = DerResponse::new(profile.as_ref(), breakdown);

        debug!(
            request_id = %request_id,
            daily_kcal = response.daily_kcal,
            "DER calculated"
        );
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle many profiles in one request
    async fn handle_batch(
        State(resources): State<Arc<ServerResources>>,
        Extension(request_id): Extension<RequestId>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let request: BatchRequest = serde_json::from_slice(&body)
            .map_err(|e| AppError::from(e).with_request_id(request_id.as_str()))?;

        let limit = resources.config.max_batch_profiles;
        let count = request.profiles.len();
        if count > limit {
            return Err(AppError::value_out_of_range(format!(
                "Batch of {count} profiles exceeds the limit of {limit}"
            ))
            .with_details(json!({ "limit": limit, "received": count }))
            .with_request_id(request_id.as_str()));
        }

        let results = tokio::task::spawn_blocking(move || calculate_batch(&request.profiles))
            .await
            .map_err(|e| {
                AppError::internal(format!("Batch calculation task failed: {e}"))
                    .with_request_id(request_id.as_str())
            })?;

        info!(request_id = %request_id, profiles = count, "Batch DER calculated");
        Ok((StatusCode::OK, Json(BatchResponse { results })).into_response())
    }

    /// Handle a feeding plan for one profile and food
    async fn handle_feeding_plan(
        State(resources): State<Arc<ServerResources>>,
        Extension(request_id): Extension<RequestId>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let request: FeedingPlanRequest = serde_json::from_slice(&body)
            .map_err(|e| AppError::from(e).with_request_id(request_id.as_str()))?;

        let daily_kcal = resources
            .der_cache
            .daily_energy_requirement(&request.profile)
            .await;

        let plan = calculate_feeding_plan(daily_kcal, request.kcal_per_100g, request.meals_per_day)
            .map_err(|e| e.with_request_id(request_id.as_str()))?;

        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_without_profile() {
        let response = DerResponse::new(None, None);
        assert_eq!(response.daily_kcal, 0);
        assert!(response.life_stage.is_none());
        assert_eq!(response.age_display, "Unknown");
    }

    #[test]
    fn test_feeding_request_defaults_meals() {
        let request: FeedingPlanRequest = serde_json::from_str(
            r#"{"profile": {"currentWeight": 4.0}, "kcal_per_100g": 380.0}"#,
        )
        .unwrap();
        assert_eq!(request.meals_per_day, limits::DEFAULT_MEALS_PER_DAY);
    }
}
