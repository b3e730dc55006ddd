// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides in-memory databases and ephemeral-port test servers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use infoconciertos::{
    config::environment::{CorsConfig, DatabaseConfig, ServerConfig},
    database::Database,
    server::{self, ServerResources},
};
use std::sync::Arc;

/// Create an in-memory test database with the schema bootstrapped
pub async fn create_test_database() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

/// Build a config suitable for tests
pub fn test_config(base_path: &str) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        base_path: base_path.to_owned(),
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

/// Test server bound to an ephemeral port
pub struct TestServer {
    /// Base URL of the running server, e.g. `http://127.0.0.1:43211`
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn a server over a fresh in-memory database
    pub async fn spawn() -> Self {
        Self::spawn_with_base_path("").await
    }

    /// Spawn a server with all routes nested under `base_path`
    pub async fn spawn_with_base_path(base_path: &str) -> Self {
        let database = create_test_database().await;
        let config = test_config(base_path);
        let resources = Arc::new(ServerResources::new(database, config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let app = server::router(resources);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
