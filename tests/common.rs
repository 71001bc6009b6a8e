// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, reference profiles, and router/request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `feline_nutrition`

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use feline_nutrition::{
    config::environment::ServerConfig,
    models::{ActivityLevel, Breed, CatProfile, ChronicDisease, PhysiologicalState},
    server::{build_router, ServerResources},
};
use std::error::Error;
use std::sync::{Arc, Once};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Adult neutered 4 kg cat at its target weight
pub fn baseline_profile() -> CatProfile {
    CatProfile {
        current_weight: 4.0,
        target_weight: Some(4.0),
        age: Some(3.0),
        is_neutered: true,
        activity_level: ActivityLevel::Moderate,
        physiological_state: PhysiologicalState::Normal,
        chronic_disease: ChronicDisease::None,
        breed: Breed::Mixed,
    }
}

/// Server resources with the given configuration
pub fn test_resources(config: ServerConfig) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(config))
}

/// Full router over default configuration
pub fn test_router() -> (Router, Arc<ServerResources>) {
    let resources = test_resources(ServerConfig::default());
    (build_router(&resources), resources)
}

/// Send one request and return status plus parsed JSON body
pub async fn send_json(
    app: Router,
    request: Request<Body>,
) -> Result<(StatusCode, serde_json::Value), Box<dyn Error>> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let value = serde_json::from_slice(&body)?;
    Ok((status, value))
}

/// Build a JSON POST request
pub fn post_json(uri: &str, body: impl Into<String>) -> Result<Request<Body>, Box<dyn Error>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))?)
}
