// ABOUTME: Core types and constants for the feline nutrition platform
// ABOUTME: Foundation crate with the cat profile model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Feline Core
//!
//! Foundation crate providing shared types for the feline nutrition
//! platform. It changes infrequently so the calculator and server crates
//! compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the JSON error envelope
//! - **constants**: Service names, endpoints, and limits
//! - **models**: The `CatProfile` record and its enumerated fields

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`CatProfile`, `Breed`, `ChronicDisease`, ...)
pub mod models;
