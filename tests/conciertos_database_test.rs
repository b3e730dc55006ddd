// ABOUTME: Unit tests for the concerts database module
// ABOUTME: Tests transactional CRUD operations and not-found semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDateTime;
use infoconciertos::database::{
    conciertos::{ConciertoData, ConciertosManager},
    Database,
};

fn timestamp(s: &str) -> NaiveDateTime {
    s.parse().unwrap()
}

fn concert_data(nombre: &str, fecha: &str, entradas: i64) -> ConciertoData {
    ConciertoData {
        nombre: nombre.to_owned(),
        descripcion: format!("Description for {nombre}"),
        fecha: timestamp(fecha),
        fecha_apertura_venta: timestamp("2025-01-15T10:00:00"),
        entradas_en_venta: entradas,
    }
}

async fn create_test_manager() -> ConciertosManager {
    let database = common::create_test_database().await;
    ConciertosManager::new(database.pool().clone())
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let manager = create_test_manager().await;

    let first = manager
        .create(&concert_data("First", "2025-06-01T20:00:00", 100))
        .await
        .unwrap();
    let second = manager
        .create(&concert_data("Second", "2025-07-01T20:00:00", 200))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_create_then_get_echoes_every_field() {
    let manager = create_test_manager().await;

    let data = concert_data("Rock Fest", "2025-08-01T20:00:00", 500);
    let created = manager.create(&data).await.unwrap();

    let fetched = manager.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.nombre, data.nombre);
    assert_eq!(fetched.descripcion, data.descripcion);
    assert_eq!(fetched.fecha, data.fecha);
    assert_eq!(fetched.fecha_apertura_venta, data.fecha_apertura_venta);
    assert_eq!(fetched.entradas_en_venta, data.entradas_en_venta);
}

#[tokio::test]
async fn test_list_orders_by_event_date_ascending() {
    let manager = create_test_manager().await;

    // Created out of chronological order on purpose
    manager
        .create(&concert_data("Middle", "2025-07-01T20:00:00", 10))
        .await
        .unwrap();
    manager
        .create(&concert_data("Last", "2025-09-01T20:00:00", 10))
        .await
        .unwrap();
    manager
        .create(&concert_data("First", "2025-05-01T20:00:00", 10))
        .await
        .unwrap();

    let listed = manager.list().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|c| c.nombre.as_str()).collect();
    assert_eq!(names, ["First", "Middle", "Last"]);
}

#[tokio::test]
async fn test_list_empty_store() {
    let manager = create_test_manager().await;
    assert!(manager.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_replaces_every_field() {
    let manager = create_test_manager().await;

    let created = manager
        .create(&concert_data("Original", "2025-08-01T20:00:00", 500))
        .await
        .unwrap();

    let replacement = ConciertoData {
        nombre: "Replaced".to_owned(),
        descripcion: "New description".to_owned(),
        fecha: timestamp("2026-01-01T21:30:00"),
        fecha_apertura_venta: timestamp("2025-11-01T09:00:00"),
        entradas_en_venta: 0,
    };
    let updated = manager.update(created.id, &replacement).await.unwrap();
    assert!(updated);

    let fetched = manager.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.nombre, replacement.nombre);
    assert_eq!(fetched.descripcion, replacement.descripcion);
    assert_eq!(fetched.fecha, replacement.fecha);
    assert_eq!(fetched.fecha_apertura_venta, replacement.fecha_apertura_venta);
    assert_eq!(fetched.entradas_en_venta, replacement.entradas_en_venta);
}

#[tokio::test]
async fn test_update_missing_id_writes_nothing() {
    let manager = create_test_manager().await;

    let existing = manager
        .create(&concert_data("Only", "2025-08-01T20:00:00", 500))
        .await
        .unwrap();

    let updated = manager
        .update(existing.id + 41, &concert_data("Ghost", "2025-08-01T20:00:00", 1))
        .await
        .unwrap();
    assert!(!updated);

    // The one existing record is untouched
    let fetched = manager.get(existing.id).await.unwrap().unwrap();
    assert_eq!(fetched, existing);
    assert_eq!(manager.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_then_get_returns_none() {
    let manager = create_test_manager().await;

    let created = manager
        .create(&concert_data("Ephemeral", "2025-08-01T20:00:00", 500))
        .await
        .unwrap();

    let deleted = manager.delete(created.id).await.unwrap();
    assert!(deleted);
    assert!(manager.get(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_id_returns_false() {
    let manager = create_test_manager().await;
    assert!(!manager.delete(99).await.unwrap());
}

#[tokio::test]
async fn test_get_missing_id_returns_none() {
    let manager = create_test_manager().await;
    assert!(manager.get(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleted_ids_are_never_reused() {
    let manager = create_test_manager().await;

    let first = manager
        .create(&concert_data("First", "2025-06-01T20:00:00", 100))
        .await
        .unwrap();
    manager.delete(first.id).await.unwrap();

    let second = manager
        .create(&concert_data("Second", "2025-07-01T20:00:00", 100))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_schema_bootstrap_is_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("conciertos-test.db");
    let url = format!("sqlite:{}", db_path.display());

    let database = Database::new(&url).await.unwrap();
    let manager = ConciertosManager::new(database.pool().clone());
    let created = manager
        .create(&concert_data("Persistent", "2025-08-01T20:00:00", 42))
        .await
        .unwrap();
    drop(manager);
    drop(database);

    // Reopening runs the bootstrap again and must keep existing data
    let reopened = Database::new(&url).await.unwrap();
    let manager = ConciertosManager::new(reopened.pool().clone());
    let fetched = manager.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.nombre, "Persistent");
}
