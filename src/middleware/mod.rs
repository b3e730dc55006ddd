// ABOUTME: HTTP middleware for the InfoConciertos server
// ABOUTME: Provides CORS configuration applied to the assembled router

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
