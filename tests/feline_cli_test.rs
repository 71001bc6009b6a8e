// ABOUTME: End-to-end tests for the feline-cli binary
// ABOUTME: Runs the compiled CLI against temporary profile files and checks output and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const BASELINE_DOCUMENT: &str = r#"{"currentWeight": 4, "targetWeight": 4, "age": 3, "isNeutered": true}"#;

fn feline_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_feline-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn profile_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_der_text_output() {
    let file = profile_file(BASELINE_DOCUMENT);
    let output = feline_cli(&["der", "--profile", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("238 kcal/day"), "{stdout}");
}

#[test]
fn test_der_json_output() {
    let file = profile_file(BASELINE_DOCUMENT);
    let output = feline_cli(&[
        "der",
        "--profile",
        file.path().to_str().unwrap(),
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["daily_kcal"], 238);
    assert_eq!(report["life_stage"], "adult");
}

#[test]
fn test_estimate_from_flags() {
    let output = feline_cli(&[
        "estimate",
        "--weight",
        "4",
        "--age",
        "10",
        "--neutered",
        "--disease",
        "hyperthyroidism",
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["daily_kcal"], 297);
}

#[test]
fn test_estimate_explain_lists_multipliers() {
    let output = feline_cli(&["estimate", "--weight", "4", "--breed", "sphynx", "--explain"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Breed modifier"), "{stdout}");
}

#[test]
fn test_feeding_plan_output() {
    let file = profile_file(BASELINE_DOCUMENT);
    let output = feline_cli(&[
        "feeding",
        "--profile",
        file.path().to_str().unwrap(),
        "--kcal-per-100g",
        "380",
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["grams_per_day"], 62.6);
    assert_eq!(plan["meals_per_day"], 2);
}

#[test]
fn test_missing_profile_file_fails() {
    let output = feline_cli(&["der", "--profile", "/nonexistent/whiskers.json"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error"), "{stderr}");
}

#[test]
fn test_malformed_profile_file_fails() {
    let file = profile_file("{ not json");
    let output = feline_cli(&["der", "--profile", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
}
