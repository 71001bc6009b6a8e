// ABOUTME: Re-exports the unified error types from feline-core for this crate's modules
// ABOUTME: Keeps `crate::errors::AppError` paths stable for handlers and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `feline-core` so the calculator crate can share
//! them; this module re-exports them for the server and CLI.

pub use feline_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
