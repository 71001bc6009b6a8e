// ABOUTME: HTTP integration tests for the energy requirement routes
// ABOUTME: Drives the full router with oneshot requests and checks JSON bodies and error envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use common::{baseline_profile, post_json, send_json, test_resources, test_router};
use feline_nutrition::config::environment::ServerConfig;
use feline_nutrition::server::build_router;
use serde_json::json;
use std::error::Error;

const BASELINE_DOCUMENT: &str = r#"{
    "currentWeight": 4,
    "targetWeight": 4,
    "age": 3,
    "isNeutered": true,
    "activityLevel": "moderate",
    "physiologicalState": "normal",
    "chronicDisease": "none",
    "breed": "mixed"
}"#;

// ============================================================================
// Single profile
// ============================================================================

#[tokio::test]
async fn test_der_for_baseline_profile() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let (status, body) = send_json(app, post_json("/api/energy/der", BASELINE_DOCUMENT)?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["daily_kcal"], 238);
    assert_eq!(body["life_stage"], "adult");
    assert_eq!(body["age_display"], "3 years");
    assert_eq!(body["breakdown"]["der"], 238);
    assert_eq!(body["breakdown"]["branch"]["branch"], "normal_adult");
    Ok(())
}

#[tokio::test]
async fn test_der_for_null_profile() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let (status, body) = send_json(app, post_json("/api/energy/der", "null")?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["daily_kcal"], 0);
    assert!(body["breakdown"].is_null());
    assert!(body["life_stage"].is_null());
    assert_eq!(body["age_display"], "Unknown");
    Ok(())
}

#[tokio::test]
async fn test_der_for_weightless_profile() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let (status, body) =
        send_json(app, post_json("/api/energy/der", r#"{"currentWeight": 0}"#)?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["daily_kcal"], 0);
    assert!(body["breakdown"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_der_for_null_weight_is_indeterminate() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let (status, body) =
        send_json(app, post_json("/api/energy/der", r#"{"currentWeight": null}"#)?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["daily_kcal"], 0);
    assert!(body["breakdown"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_der_null_fields_use_neutral_values() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let document = json!({
        "currentWeight": 4,
        "targetWeight": 4,
        "age": 3,
        "isNeutered": true,
        "activityLevel": null,
        "physiologicalState": null,
        "chronicDisease": null,
        "breed": null
    });
    let (status, body) =
        send_json(app, post_json("/api/energy/der", document.to_string())?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["daily_kcal"], 238);
    assert_eq!(body["breakdown"]["branch"]["branch"], "normal_adult");
    Ok(())
}

#[tokio::test]
async fn test_der_reports_disease_branch() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let document = json!({
        "currentWeight": 4,
        "targetWeight": 4,
        "age": 10,
        "isNeutered": true,
        "chronicDisease": "hyperthyroidism"
    });
    let (status, body) =
        send_json(app, post_json("/api/energy/der", document.to_string())?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["daily_kcal"], 297);
    assert_eq!(body["breakdown"]["branch"]["branch"], "chronic_disease");
    assert_eq!(body["breakdown"]["branch"]["disease"], "hyperthyroidism");
    assert_eq!(body["life_stage"], "senior");
    Ok(())
}

#[tokio::test]
async fn test_malformed_document_returns_error_envelope() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/energy/der")
        .header("x-request-id", "req-malformed-1")
        .body(axum::body::Body::from("{\"currentWeight\": "))?;
    let (status, body) = send_json(app, request).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
    assert_eq!(body["error"]["request_id"], "req-malformed-1");
    Ok(())
}

#[tokio::test]
async fn test_repeated_profile_hits_cache() -> Result<(), Box<dyn Error>> {
    let (app, resources) = test_router();
    for _ in 0..3 {
        let (status, body) =
            send_json(app.clone(), post_json("/api/energy/der", BASELINE_DOCUMENT)?).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["daily_kcal"], 238);
    }

    let stats = resources.der_cache.stats().await;
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 2);
    Ok(())
}

// ============================================================================
// Batch
// ============================================================================

#[tokio::test]
async fn test_batch_preserves_order() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let baseline = serde_json::to_value(baseline_profile())?;
    let mut kitten = baseline.clone();
    kitten["age"] = json!(0.5);
    let mut sphynx = baseline.clone();
    sphynx["breed"] = json!("sphynx");

    let request = json!({ "profiles": [baseline, kitten, {"currentWeight": -1}, sphynx] });
    let (status, body) = send_json(
        app,
        post_json("/api/energy/der/batch", request.to_string())?,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([238, 495, 0, 285]));
    Ok(())
}

#[tokio::test]
async fn test_batch_over_limit_is_rejected() -> Result<(), Box<dyn Error>> {
    let resources = test_resources(ServerConfig {
        max_batch_profiles: 2,
        ..ServerConfig::default()
    });
    let app = build_router(&resources);

    let request = json!({ "profiles": [{"currentWeight": 4}, {"currentWeight": 5}, {"currentWeight": 6}] });
    let (status, body) = send_json(
        app,
        post_json("/api/energy/der/batch", request.to_string())?,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert!(body["error"]["request_id"].is_string());
    assert_eq!(body["error"]["details"]["limit"], 2);
    assert_eq!(body["error"]["details"]["received"], 3);
    Ok(())
}

// ============================================================================
// Feeding plan
// ============================================================================

#[tokio::test]
async fn test_feeding_plan() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let request = json!({
        "profile": serde_json::to_value(baseline_profile())?,
        "kcal_per_100g": 380.0,
        "meals_per_day": 2
    });
    let (status, body) = send_json(
        app,
        post_json("/api/energy/feeding-plan", request.to_string())?,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["daily_kcal"], 238);
    assert_eq!(body["grams_per_day"], 62.6);
    assert_eq!(body["grams_per_meal"], 31.3);
    Ok(())
}

#[tokio::test]
async fn test_feeding_plan_rejects_zero_density() -> Result<(), Box<dyn Error>> {
    let (app, _) = test_router();
    let request = json!({
        "profile": {"currentWeight": 4},
        "kcal_per_100g": 0.0
    });
    let (status, body) = send_json(
        app,
        post_json("/api/energy/feeding-plan", request.to_string())?,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    Ok(())
}
