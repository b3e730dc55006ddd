// ABOUTME: Main library entry point for the InfoConciertos concert information service
// ABOUTME: Provides a SQLite-backed REST API for listing and managing concert records
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # InfoConciertos
//!
//! A small REST service exposing create/read/update/delete operations over
//! concert records with scheduling fields (event date, sales-opening date,
//! available-ticket count), backed by a SQLite store.
//!
//! ## Architecture
//!
//! The service follows a modular architecture:
//! - **Database**: SQLite pool with idempotent schema bootstrap and a
//!   per-operation transactional manager
//! - **Routes**: HTTP endpoints and their wire-format request/response types
//! - **Config**: environment-driven configuration, built once at startup
//! - **Errors**: unified error handling with HTTP response mapping
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use infoconciertos::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration from environment
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("InfoConciertos configured with port: HTTP={}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Database pool, schema bootstrap, and concert persistence operations
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for cross-origin resource sharing
pub mod middleware;

/// HTTP routes for concert records and health checks
pub mod routes;

/// Router assembly, shared server resources, and the serve loop
pub mod server;
