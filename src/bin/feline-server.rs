// ABOUTME: HTTP server binary for the feline nutrition API
// ABOUTME: Loads configuration from the environment, initializes logging, and serves requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feline Nutrition Server Binary
//!
//! Serves Daily Energy Requirement calculations and feeding plans over HTTP.

use anyhow::Result;
use clap::Parser;
use feline_nutrition::{
    config::environment::ServerConfig, logging::LoggingConfig, server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "feline-server")]
#[command(about = "Feline Nutrition API - daily energy requirements for cats")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
        config.validate()?;
    }

    LoggingConfig::for_server(&config).init()?;

    info!("Starting Feline Nutrition API");
    info!("{}", config.summary());

    let resources = Arc::new(server::ServerResources::new(config));
    if let Err(e) = server::run(resources).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
