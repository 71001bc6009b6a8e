// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime limits for the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use anyhow::{Context, Result};
use feline_core::constants::{limits, ports};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Default bind address
const DEFAULT_HOST: &str = "127.0.0.1";

/// Configuration values that parse but cannot run a server
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `HTTP_PORT` must be a non-zero port
    #[error("HTTP_PORT must be between 1 and 65535")]
    InvalidPort,

    /// `HOST` must not be blank
    #[error("HOST must not be empty")]
    EmptyHost,

    /// `MAX_BATCH_PROFILES` must allow at least one profile
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Origins allowed by CORS (`*` for any)
    pub cors_allowed_origins: Vec<String>,
    /// Entries kept by the DER memo cache (0 disables it)
    pub der_cache_capacity: usize,
    /// Largest accepted batch request
    pub max_batch_profiles: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            cors_allowed_origins: vec!["*".to_owned()],
            der_cache_capacity: limits::DEFAULT_DER_CACHE_CAPACITY,
            max_batch_profiles: limits::DEFAULT_MAX_BATCH_PROFILES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        let config = Self {
            host: env_var_or("HOST", DEFAULT_HOST),
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors_allowed_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
            der_cache_capacity: env_var_or(
                "DER_CACHE_CAPACITY",
                &limits::DEFAULT_DER_CACHE_CAPACITY.to_string(),
            )
            .parse()
            .context("Invalid DER_CACHE_CAPACITY value")?,
            max_batch_profiles: env_var_or(
                "MAX_BATCH_PROFILES",
                &limits::DEFAULT_MAX_BATCH_PROFILES.to_string(),
            )
            .parse()
            .context("Invalid MAX_BATCH_PROFILES value")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port, a blank host, or a zero batch limit
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.max_batch_profiles == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "MAX_BATCH_PROFILES must be at least 1",
            ));
        }
        Ok(())
    }

    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Feline Nutrition Server Configuration:\n\
             - Bind Address: {}\n\
             - Log Level: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - DER Cache: {}\n\
             - Max Batch Profiles: {}",
            self.bind_address(),
            self.log_level,
            self.environment,
            self.cors_allowed_origins.join(", "),
            if self.der_cache_capacity == 0 {
                "Disabled".to_owned()
            } else {
                format!("{} entries", self.der_cache_capacity)
            },
            self.max_batch_profiles,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
