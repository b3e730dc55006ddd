// ABOUTME: Configuration module organization for the InfoConciertos server
// ABOUTME: Groups environment-driven configuration types and parsing

//! Configuration management

/// Environment-based server configuration
pub mod environment;
