// ABOUTME: Main library entry point for the feline nutrition API
// ABOUTME: Wires configuration, logging, caching, and HTTP routes around the DER engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Feline Nutrition
//!
//! An HTTP service and command-line tool that compute a cat's Daily Energy
//! Requirement (DER) from its biometric and medical profile, and turn that
//! target into food portions.
//!
//! ## Architecture
//!
//! - **`feline-core`**: `CatProfile` model, `AppError`, constants
//! - **`feline-intelligence`**: the pure DER calculator and feeding helpers
//! - **This crate**: environment configuration, structured logging, a memo
//!   cache, and axum routes
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use feline_nutrition::config::environment::ServerConfig;
//! use feline_nutrition::server::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::new(config));
//!     feline_nutrition::server::run(resources).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Unified error handling (re-exported from `feline-core`)
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Memoization of calculator results
pub mod cache;

/// HTTP middleware (CORS, request IDs)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Server resources, router assembly, and the serve loop
pub mod server;

/// Loading cat profile documents from files and streams
pub mod input;

/// Domain models (re-exported from `feline-core`)
pub mod models {
    pub use feline_core::models::*;
}

/// Nutrition algorithms (re-exported from `feline-intelligence`)
pub mod intelligence {
    pub use feline_intelligence::*;
}
