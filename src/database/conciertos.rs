// ABOUTME: Database operations for concert records
// ABOUTME: Handles transactional CRUD with one scoped transaction per operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// A concert record as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concierto {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,
    /// Concert name, declared max 100 characters
    pub nombre: String,
    /// Concert description, declared max 350 characters
    pub descripcion: String,
    /// Date/time the concert occurs
    pub fecha: NaiveDateTime,
    /// Date/time ticket sales open
    pub fecha_apertura_venta: NaiveDateTime,
    /// Remaining/available ticket count
    pub entradas_en_venta: i64,
}

/// The externally settable fields of a concert record
///
/// Used for both create and update; the identifier is always server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConciertoData {
    /// Concert name
    pub nombre: String,
    /// Concert description
    pub descripcion: String,
    /// Date/time the concert occurs
    pub fecha: NaiveDateTime,
    /// Date/time ticket sales open
    pub fecha_apertura_venta: NaiveDateTime,
    /// Remaining/available ticket count
    pub entradas_en_venta: i64,
}

/// Concert database operations manager
///
/// Every operation runs inside one scoped transaction: committed on success,
/// rolled back when the transaction guard is dropped on any error path.
pub struct ConciertosManager {
    pool: SqlitePool,
}

impl ConciertosManager {
    /// Create a new concerts manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all concerts ordered by event date ascending
    ///
    /// Ties on equal `fecha` keep store row order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<Concierto>> {
        let mut tx = self.begin().await?;

        let rows = sqlx::query(
            r"
            SELECT id, nombre, descripcion, fecha, fecha_apertura_venta, entradas_en_venta
            FROM conciertos
            ORDER BY fecha ASC
            ",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to list concerts: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))?;

        rows.iter().map(row_to_concierto).collect()
    }

    /// Create a new concert; the store assigns the identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(&self, data: &ConciertoData) -> AppResult<Concierto> {
        let mut tx = self.begin().await?;

        let result = sqlx::query(
            r"
            INSERT INTO conciertos (nombre, descripcion, fecha, fecha_apertura_venta, entradas_en_venta)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&data.nombre)
        .bind(&data.descripcion)
        .bind(data.fecha)
        .bind(data.fecha_apertura_venta)
        .bind(data.entradas_en_venta)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create concert: {e}")))?;

        let id = result.last_insert_rowid();

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))?;

        Ok(Concierto {
            id,
            nombre: data.nombre.clone(),
            descripcion: data.descripcion.clone(),
            fecha: data.fecha,
            fecha_apertura_venta: data.fecha_apertura_venta,
            entradas_en_venta: data.entradas_en_venta,
        })
    }

    /// Get a concert by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get(&self, id: i64) -> AppResult<Option<Concierto>> {
        let mut tx = self.begin().await?;

        let row = sqlx::query(
            r"
            SELECT id, nombre, descripcion, fecha, fecha_apertura_venta, entradas_en_venta
            FROM conciertos
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to get concert: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))?;

        row.as_ref().map(row_to_concierto).transpose()
    }

    /// Overwrite every mutable field of an existing concert
    ///
    /// The existence check and the write share one transaction. Returns
    /// `false` without touching the store when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update(&self, id: i64, data: &ConciertoData) -> AppResult<bool> {
        let mut tx = self.begin().await?;

        let existing = sqlx::query("SELECT id FROM conciertos WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to get concert: {e}")))?;

        if existing.is_none() {
            // Dropping the transaction rolls back; nothing was written.
            return Ok(false);
        }

        sqlx::query(
            r"
            UPDATE conciertos
            SET nombre = $1, descripcion = $2, fecha = $3, fecha_apertura_venta = $4, entradas_en_venta = $5
            WHERE id = $6
            ",
        )
        .bind(&data.nombre)
        .bind(&data.descripcion)
        .bind(data.fecha)
        .bind(data.fecha_apertura_venta)
        .bind(data.entradas_en_venta)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to update concert: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))?;

        Ok(true)
    }

    /// Delete a concert by id
    ///
    /// The existence check and the delete share one transaction. Returns
    /// `false` without attempting a deletion when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self.begin().await?;

        let existing = sqlx::query("SELECT id FROM conciertos WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to get concert: {e}")))?;

        if existing.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM conciertos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete concert: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))?;

        Ok(true)
    }

    /// Open the scoped transaction for one logical operation
    async fn begin(&self) -> AppResult<sqlx::Transaction<'_, sqlx::Sqlite>> {
        self.pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to open transaction: {e}")))
    }
}

/// Convert a database row to a `Concierto`
fn row_to_concierto(row: &SqliteRow) -> AppResult<Concierto> {
    let fecha: NaiveDateTime = row
        .try_get("fecha")
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?;
    let fecha_apertura_venta: NaiveDateTime = row
        .try_get("fecha_apertura_venta")
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?;

    Ok(Concierto {
        id: row.get("id"),
        nombre: row.get("nombre"),
        descripcion: row.get("descripcion"),
        fecha,
        fecha_apertura_venta,
        entradas_en_venta: row.get("entradas_en_venta"),
    })
}
