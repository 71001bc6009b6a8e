// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports environment-driven server configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the feline nutrition server
//!
//! All settings come from environment variables; see
//! [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{ConfigError, Environment, LogLevel, ServerConfig};
