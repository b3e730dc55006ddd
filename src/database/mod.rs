// ABOUTME: Database pool management and idempotent schema bootstrap
// ABOUTME: Owns the SQLite connection pool shared by all request handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! This module owns the SQLite connection pool and the schema bootstrap that
//! runs before the server accepts its first request.

/// Concert persistence operations
pub mod conciertos;

use anyhow::Result;
use sqlx::SqlitePool;

/// Database handle wrapping the shared connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection and bootstrap the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema bootstrap fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };

        // Run migrations
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// Idempotent: safe to run on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails to execute.
    pub async fn migrate(&self) -> Result<()> {
        // Concert table. AUTOINCREMENT keeps ids monotonic so a deleted
        // record's id is never handed out again. Length limits on the text
        // columns are declared, not CHECK-enforced.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS conciertos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre VARCHAR(100) NOT NULL,
                descripcion VARCHAR(350) NOT NULL,
                fecha TEXT NOT NULL,
                fecha_apertura_venta TEXT NOT NULL,
                entradas_en_venta INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
