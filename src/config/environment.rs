// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration management
//!
//! All settings are read from environment variables once at process start;
//! the resulting [`ServerConfig`] is injected into the server and never
//! mutated afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port when `HTTP_PORT` is unset
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default database connection string when `DATABASE_URL` is unset
const DEFAULT_DATABASE_URL: &str = "sqlite:conciertos.db";

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string for the relational store
    pub url: String,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or "*" for any origin
    pub allowed_origins: String,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind port
    pub http_port: u16,
    /// Path prefix applied to all routes, empty for none
    pub base_path: String,
    /// Database settings
    pub database: DatabaseConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is not a valid port number or if
    /// `BASE_PATH` is malformed.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("Invalid HTTP_PORT value: {port}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let base_path = env::var("BASE_PATH").unwrap_or_default();
        Self::validate_base_path(&base_path)?;

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
        };

        let cors = CorsConfig {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_owned()),
        };

        Ok(Self {
            http_port,
            base_path,
            database,
            cors,
        })
    }

    /// Validate a route prefix: empty, or `/`-prefixed without a trailing slash
    fn validate_base_path(base_path: &str) -> Result<()> {
        if base_path.is_empty() {
            return Ok(());
        }
        if !base_path.starts_with('/') {
            anyhow::bail!("BASE_PATH must start with '/': {base_path}");
        }
        if base_path.ends_with('/') {
            anyhow::bail!("BASE_PATH must not end with '/': {base_path}");
        }
        Ok(())
    }

    /// One-line configuration summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} base_path={:?} database_url={} cors_origins={}",
            self.http_port, self.base_path, self.database.url, self.cors.allowed_origins
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_validation() {
        assert!(ServerConfig::validate_base_path("").is_ok());
        assert!(ServerConfig::validate_base_path("/api").is_ok());
        assert!(ServerConfig::validate_base_path("/api/v1").is_ok());
        assert!(ServerConfig::validate_base_path("api").is_err());
        assert!(ServerConfig::validate_base_path("/api/").is_err());
    }
}
