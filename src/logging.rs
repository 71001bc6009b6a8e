// ABOUTME: Logging configuration and structured logging setup for the server and CLI
// ABOUTME: Configures log levels, formatters, and output destinations via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! The server derives its level and environment from the validated
//! [`ServerConfig`]; presentation settings come from `LOG_FORMAT`,
//! `LOG_INCLUDE_*` and `SERVICE_NAME`. `RUST_LOG`, when set, replaces the
//! base filter.

use crate::config::environment::{Environment, LogLevel, ServerConfig};
use anyhow::Result;
use feline_core::constants::service_names;
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for application targets
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Where formatted events are written
    pub destination: LogDestination,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, falling back to pretty output
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Output stream for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Standard output (server)
    Stdout,
    /// Standard error (CLI, so stdout stays machine-readable)
    Stderr,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            destination: LogDestination::Stdout,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::FELINE_NUTRITION_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Logging configuration for the HTTP server
    ///
    /// Level and environment are taken from `config`, so the logged level
    /// always matches the one reported in the configuration summary.
    #[must_use]
    pub fn for_server(config: &ServerConfig) -> Self {
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |value| LogFormat::from_str_or_default(&value));

        // In production, use more detailed logging
        let is_production = config.environment.is_production();

        Self {
            level: config.log_level,
            format,
            destination: LogDestination::Stdout,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::FELINE_NUTRITION_SERVER.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment: config.environment,
        }
    }

    /// Configuration for the command-line tool: warnings only, written to stderr
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        Self {
            level: if verbose { LogLevel::Debug } else { LogLevel::Warn },
            format: LogFormat::Compact,
            destination: LogDestination::Stderr,
            service_name: service_names::FELINE_CLI.into(),
            ..Self::default()
        }
    }

    /// Build the event filter with noise reduction for HTTP internals
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let level = self.level.to_tracing_level();
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(self.level.to_string()),
            |env_directive| EnvFilter::new(env_directive),
        );

        base.add_directive(
            "hyper=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
        .add_directive(
            "tower_http=info"
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        )
        // Keep our application logs at desired level
        .add_directive(
            format!("feline_nutrition={}", self.level)
                .parse()
                .unwrap_or_else(|_| level.into()),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        match self.destination {
            LogDestination::Stdout => self.init_with_writer(io::stdout)?,
            LogDestination::Stderr => self.init_with_writer(io::stderr)?,
        }

        if self.destination == LogDestination::Stdout {
            self.log_startup_info();
        }

        Ok(())
    }

    fn init_with_writer<W>(&self, writer: W) -> Result<()>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(writer)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(writer)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(writer)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Feline nutrition server starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string()
            },
            "logging": {
                "level": self.level.to_string(),
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Logging configured: {}", config_summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_cli_config_writes_to_stderr() {
        let quiet = LoggingConfig::for_cli(false);
        assert_eq!(quiet.destination, LogDestination::Stderr);
        assert_eq!(quiet.level, LogLevel::Warn);
        assert_eq!(quiet.service_name, service_names::FELINE_CLI);

        assert_eq!(LoggingConfig::for_cli(true).level, LogLevel::Debug);
    }

    #[test]
    fn test_server_config_drives_level_and_environment() {
        let config = ServerConfig {
            log_level: LogLevel::Trace,
            environment: Environment::Production,
            ..ServerConfig::default()
        };
        let logging = LoggingConfig::for_server(&config);

        assert_eq!(logging.level, LogLevel::Trace);
        assert_eq!(logging.environment, Environment::Production);
        assert_eq!(logging.destination, LogDestination::Stdout);
        assert!(logging.include_location);
        assert!(logging.include_spans);
    }

    #[test]
    fn test_application_directive_follows_level() {
        let logging = LoggingConfig {
            level: LogLevel::Debug,
            ..LoggingConfig::default()
        };
        let filter = logging.env_filter().to_string();
        assert!(filter.contains("feline_nutrition=debug"));
        assert!(filter.contains("hyper=warn"));
    }
}
