// ABOUTME: Route handlers for the concerts REST API
// ABOUTME: Provides REST endpoints for CRUD operations on concert records
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concert routes
//!
//! This module handles the five concert endpoints: list, create, fetch,
//! update, and delete. Path identifiers are parsed strictly as integers;
//! non-numeric ids are rejected with a 400 before the handler runs.

use crate::{
    database::conciertos::{Concierto, ConciertoData, ConciertosManager},
    errors::AppError,
    server::ServerResources,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fixed detail message returned when a concert id does not exist
const CONCIERTO_NOT_FOUND: &str = "Concierto no encontrado";

/// Client-submitted concert payload, identical for create and update
///
/// Carries every mutable field; the identifier is always server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConciertoRequest {
    /// Concert name
    pub nombre: String,
    /// Concert description
    pub descripcion: String,
    /// Date/time the concert occurs (naive ISO-8601)
    pub fecha: NaiveDateTime,
    /// Date/time ticket sales open (naive ISO-8601)
    pub fecha_apertura_venta: NaiveDateTime,
    /// Remaining/available ticket count
    pub entradas_en_venta: i64,
}

/// Server-returned concert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConciertoResponse {
    /// Store-assigned identifier
    pub id: i64,
    /// Concert name
    pub nombre: String,
    /// Concert description
    pub descripcion: String,
    /// Date/time the concert occurs (naive ISO-8601)
    pub fecha: NaiveDateTime,
    /// Date/time ticket sales open (naive ISO-8601)
    pub fecha_apertura_venta: NaiveDateTime,
    /// Remaining/available ticket count
    pub entradas_en_venta: i64,
}

/// Response for listing concerts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConciertosResponse {
    /// Concerts ordered by event date ascending
    pub conciertos: Vec<ConciertoResponse>,
}

impl From<Concierto> for ConciertoResponse {
    fn from(entity: Concierto) -> Self {
        Self {
            id: entity.id,
            nombre: entity.nombre,
            descripcion: entity.descripcion,
            fecha: entity.fecha,
            fecha_apertura_venta: entity.fecha_apertura_venta,
            entradas_en_venta: entity.entradas_en_venta,
        }
    }
}

impl From<ConciertoRequest> for ConciertoData {
    fn from(payload: ConciertoRequest) -> Self {
        Self {
            nombre: payload.nombre,
            descripcion: payload.descripcion,
            fecha: payload.fecha,
            fecha_apertura_venta: payload.fecha_apertura_venta,
            entradas_en_venta: payload.entradas_en_venta,
        }
    }
}

/// Concert routes handler
pub struct ConciertosRoutes;

impl ConciertosRoutes {
    /// Create all concert routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/conciertos", get(Self::handle_list))
            .route("/conciertos", post(Self::handle_create))
            .route("/conciertos/:id", get(Self::handle_get))
            .route("/conciertos/:id", put(Self::handle_update))
            .route("/conciertos/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Get the concerts manager over the shared pool
    fn manager(resources: &Arc<ServerResources>) -> ConciertosManager {
        ConciertosManager::new(resources.database.pool().clone())
    }

    /// Handle GET /conciertos - List concerts ordered by event date
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let manager = Self::manager(&resources);
        let conciertos = manager.list().await?;

        let response = ListConciertosResponse {
            conciertos: conciertos.into_iter().map(Into::into).collect(),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /conciertos - Create a new concert
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<ConciertoRequest>,
    ) -> Result<Response, AppError> {
        let manager = Self::manager(&resources);
        let data: ConciertoData = body.into();
        let concierto = manager.create(&data).await?;

        let response: ConciertoResponse = concierto.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /conciertos/:id - Fetch a specific concert
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let manager = Self::manager(&resources);
        let concierto = manager
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(CONCIERTO_NOT_FOUND))?;

        let response: ConciertoResponse = concierto.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /conciertos/:id - Overwrite every mutable field
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(body): Json<ConciertoRequest>,
    ) -> Result<Response, AppError> {
        let manager = Self::manager(&resources);
        let data: ConciertoData = body.into();
        let updated = manager.update(id, &data).await?;

        if !updated {
            return Err(AppError::not_found(CONCIERTO_NOT_FOUND));
        }

        Ok(StatusCode::OK.into_response())
    }

    /// Handle DELETE /conciertos/:id - Delete a concert
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let manager = Self::manager(&resources);
        let deleted = manager.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found(CONCIERTO_NOT_FOUND));
        }

        Ok(StatusCode::OK.into_response())
    }
}
