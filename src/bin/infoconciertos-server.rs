// ABOUTME: Server binary for the InfoConciertos concert information service
// ABOUTME: Loads configuration, bootstraps the database, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # InfoConciertos Server Binary
//!
//! Starts the concert information REST API with environment-driven
//! configuration and an auto-bootstrapped SQLite schema.

use anyhow::Result;
use clap::Parser;
use infoconciertos::{
    config::environment::ServerConfig,
    database::Database,
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "infoconciertos-server")]
#[command(about = "InfoConciertos - concert information REST API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database connection string
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args {
                http_port: None,
                database_url: None,
            }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Apply command-line overrides
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting InfoConciertos server");
    info!("{}", config.summary());

    // Initialize database; the schema is bootstrapped before the first request
    let database = Database::new(&config.database.url).await?;
    info!("Database initialized successfully: {}", config.database.url);

    let resources = Arc::new(ServerResources::new(database, config));

    server::run(resources).await
}
