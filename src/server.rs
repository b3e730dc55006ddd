// ABOUTME: Router assembly, shared server resources, and the HTTP serve loop
// ABOUTME: Wires routes, middleware, and the bind/shutdown lifecycle together
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server assembly
//!
//! [`ServerResources`] is the dependency container built once at startup and
//! shared (via `Arc`) with every handler; [`run`] binds the listener and
//! serves the assembled router until a shutdown signal arrives.

use crate::{
    config::environment::ServerConfig,
    database::Database,
    middleware::setup_cors,
    routes::{ConciertosRoutes, HealthRoutes},
};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared server dependencies, constructed once at process start
///
/// Held for the process lifetime and never mutated.
pub struct ServerResources {
    /// Database handle over the shared connection pool
    pub database: Database,
    /// Environment-driven configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Create the resource container
    #[must_use]
    pub const fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}

/// Assemble the application router
///
/// Concert routes are merged with the health endpoints and nested under the
/// configured base path when one is set.
pub fn router(resources: Arc<ServerResources>) -> Router {
    let base_path = resources.config.base_path.clone();
    let cors = setup_cors(&resources.config);

    let api = ConciertosRoutes::routes(resources).merge(HealthRoutes::routes());

    let app = if base_path.is_empty() {
        api
    } else {
        Router::new().nest(&base_path, api)
    };

    app.layer(TraceLayer::new_for_http()).layer(cors)
}

/// Bind the HTTP listener and serve until shutdown
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server loop fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = format!("0.0.0.0:{}", resources.config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

    info!("HTTP server listening on {addr}");

    axum::serve(listener, router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");

    Ok(())
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install shutdown signal handler: {e}");
        return;
    }
    info!("Shutdown signal received");
}
