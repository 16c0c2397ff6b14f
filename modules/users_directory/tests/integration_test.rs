//! Integration-style tests for the users_directory module.
//!
//! Key points:
//! - Each test runs on a fresh in-memory SQLite DB and applies migrations.
//! - Service is constructed with a SeaORM-backed repository (Domain Port + Adapter).
//! - Local client is tested against the same Service.
//! - REST layer is exercised via an Axum Router registered through real routes.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use activity_log::{
    contract::client::ActivityLogApi,
    domain::service::{Service as ActivityService, ServiceConfig as ActivityServiceConfig},
    gateways::local::ActivityLogLocalClient,
    infra::storage::SeaOrmActivityLogRepository,
};
use users_directory::{
    api::rest::dto::UserDto,
    contract::model::{NewUser, UserPatch, UserRole, PILOT_ZONES},
    domain::service::{Service, ServiceConfig},
    infra::storage::{migrations::Migrator, SeaOrmUsersRepository},
};

/// Create a fresh test database for each test (in-memory SQLite) and run migrations.
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run users migrations");
    activity_log::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run activity migrations");
    db
}

fn activity_client(db: &DatabaseConnection) -> Arc<dyn ActivityLogApi> {
    let repo = SeaOrmActivityLogRepository::new(db.clone());
    let service = ActivityService::new(Arc::new(repo), ActivityServiceConfig::default());
    Arc::new(ActivityLogLocalClient::new(Arc::new(service)))
}

/// Build the domain Service with a SeaORM-backed repository.
async fn create_test_service() -> (Arc<Service>, DatabaseConnection) {
    let db = create_test_db().await;
    let repo = SeaOrmUsersRepository::new(db.clone());
    let service = Service::new(
        Arc::new(repo),
        activity_client(&db),
        ServiceConfig::default(),
    );
    (Arc::new(service), db)
}

fn resident(name: &str, email: &str, zone: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        phone: "08012345678".to_string(),
        role: UserRole::Resident,
        zone: zone.to_string(),
        availability: None,
        preferred_operator_id: None,
    }
}

fn operator(name: &str, email: &str, zone: &str, availability: Option<bool>) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        phone: "08023456789".to_string(),
        role: UserRole::PspOperator,
        zone: zone.to_string(),
        availability,
        preferred_operator_id: None,
    }
}

#[test]
fn pilot_zone_catalog_is_a_hint_not_a_whitelist() {
    assert!(PILOT_ZONES.contains(&"Bodija"));
    assert!(PILOT_ZONES.contains(&"Dugbe"));
}

#[tokio::test]
async fn test_register_and_get() -> Result<()> {
    let (service, _db) = create_test_service().await;

    let created = service
        .create_user(resident("Ayo Balogun", "ayo@mail.ng", "Bodija"))
        .await?;
    assert_eq!(created.role, UserRole::Resident);
    assert_eq!(created.zone, "Bodija");

    let fetched = service.get_user(created.id).await?;
    assert_eq!(fetched, created);

    let by_email = service.find_by_email("AYO@mail.ng").await?;
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    Ok(())
}

#[tokio::test]
async fn test_email_conflict() -> Result<()> {
    let (service, _db) = create_test_service().await;

    service
        .create_user(resident("Ayo", "ayo@mail.ng", "Bodija"))
        .await?;
    let err = service
        .create_user(resident("Impostor", "ayo@mail.ng", "Akobo"))
        .await
        .expect_err("duplicate email must be rejected");
    assert!(err.to_string().contains("already exists"));

    Ok(())
}

#[tokio::test]
async fn test_validation_errors() {
    let (service, _db) = create_test_service().await;

    let mut bad_email = resident("Ayo", "not-an-email", "Bodija");
    bad_email.email = "not-an-email".to_string();
    assert!(service.create_user(bad_email).await.is_err());

    let mut empty_name = resident("", "a@b.ng", "Bodija");
    empty_name.name = String::new();
    assert!(service.create_user(empty_name).await.is_err());
}

#[tokio::test]
async fn test_profile_update_and_availability() -> Result<()> {
    let (service, _db) = create_test_service().await;

    let op = service
        .create_user(operator("CleanOyo Ltd", "ops@cleanoyo.ng", "Bodija", Some(true)))
        .await?;

    let updated = service
        .update_user(
            op.id,
            UserPatch {
                availability: Some(false),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.availability, Some(false));
    assert!(!updated.is_available());
    assert!(updated.updated_at >= op.updated_at);

    Ok(())
}

#[tokio::test]
async fn test_preferred_operator_must_be_operator() -> Result<()> {
    let (service, _db) = create_test_service().await;

    let res = service
        .create_user(resident("Ayo", "ayo@mail.ng", "Bodija"))
        .await?;
    let other = service
        .create_user(resident("Bisi", "bisi@mail.ng", "Akobo"))
        .await?;

    // Pinning another resident as preferred operator is rejected.
    let err = service
        .update_user(
            res.id,
            UserPatch {
                preferred_operator_id: Some(Some(other.id)),
                ..Default::default()
            },
        )
        .await
        .expect_err("non-operator preference must be rejected");
    assert!(err.to_string().contains("not a collection operator"));

    Ok(())
}

#[tokio::test]
async fn test_operator_pool_is_in_registration_order() -> Result<()> {
    let (service, _db) = create_test_service().await;

    let first = service
        .create_user(operator("First Ops", "first@ops.ng", "Bodija", Some(true)))
        .await?;
    let second = service
        .create_user(operator("Second Ops", "second@ops.ng", "Bodija", Some(true)))
        .await?;
    service
        .create_user(resident("Ayo", "ayo@mail.ng", "Bodija"))
        .await?;

    let pool = service.list_operators().await?;
    assert_eq!(
        pool.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

#[tokio::test]
async fn test_rest_register_and_fetch() -> Result<()> {
    let (service, _db) = create_test_service().await;
    let app: Router =
        users_directory::api::rest::routes::register_routes(Router::new(), service.clone());

    let body = serde_json::json!({
        "name": "Ayo Balogun",
        "email": "ayo@mail.ng",
        "phone": "08012345678",
        "role": "RESIDENT",
        "zone": "Bodija"
    });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let created: UserDto = serde_json::from_slice(&bytes)?;
    assert_eq!(created.role, "RESIDENT");

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/users/{}", created.id))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_rest_rejects_bad_role() -> Result<()> {
    let (service, _db) = create_test_service().await;
    let app: Router =
        users_directory::api::rest::routes::register_routes(Router::new(), service.clone());

    let body = serde_json::json!({
        "name": "Ayo",
        "email": "ayo@mail.ng",
        "phone": "080",
        "role": "SUPERVISOR",
        "zone": "Bodija"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
