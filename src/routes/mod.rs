// ABOUTME: Route module organization for InfoConciertos HTTP endpoints
// ABOUTME: Provides route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module for the InfoConciertos server
//!
//! Each domain module contains its route table and thin handler functions
//! that delegate to the persistence layer.

/// Concert record routes
pub mod conciertos;
/// Health check and system status routes
pub mod health;

/// Concert route handlers
pub use conciertos::ConciertosRoutes;
/// Health route handlers
pub use health::HealthRoutes;
