//! Integration-style tests for the activity_log module.
//!
//! Each test runs on a fresh in-memory SQLite DB and applies migrations.

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
use uuid::Uuid;

use activity_log::{
    contract::{client::ActivityLogApi, model::NewActivityEntry},
    domain::service::{Service, ServiceConfig},
    gateways::local::ActivityLogLocalClient,
    infra::storage::{migrations::Migrator, SeaOrmActivityLogRepository},
};

async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

async fn create_test_service() -> Arc<Service> {
    let db = create_test_db().await;
    let repo = SeaOrmActivityLogRepository::new(db);
    Arc::new(Service::new(Arc::new(repo), ServiceConfig::default()))
}

fn entry(user_id: Uuid, action: &str, details: &str) -> NewActivityEntry {
    NewActivityEntry {
        user_id,
        action: action.to_string(),
        details: details.to_string(),
    }
}

#[tokio::test]
async fn test_record_and_list() -> Result<()> {
    let service = create_test_service().await;
    let actor = Uuid::new_v4();

    let recorded = service
        .record(entry(actor, "CREATE_PICKUP", "New request created."))
        .await?;
    assert_eq!(recorded.action, "CREATE_PICKUP");

    let all = service.list(None, None, None).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, recorded.id);

    // Filtered by actor
    let other = Uuid::new_v4();
    service
        .record(entry(other, "UPDATE_STATUS", "Status changed."))
        .await?;

    let mine = service.list(Some(actor), None, None).await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].user_id, actor);

    Ok(())
}

#[tokio::test]
async fn test_empty_action_rejected() {
    let service = create_test_service().await;
    let err = service
        .record(entry(Uuid::new_v4(), "  ", "whatever"))
        .await
        .expect_err("empty action must be rejected");
    assert!(err.to_string().contains("Action cannot be empty"));
}

#[tokio::test]
async fn test_local_client_delegates() -> Result<()> {
    let service = create_test_service().await;
    let client: Arc<dyn ActivityLogApi> = Arc::new(ActivityLogLocalClient::new(service));

    client
        .record(entry(Uuid::new_v4(), "DATABASE_SEED", "Seeded."))
        .await?;
    let listed = client.list(None, None, None).await?;
    assert_eq!(listed.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_rest_list() -> Result<()> {
    let service = create_test_service().await;
    let actor = Uuid::new_v4();
    service
        .record(entry(actor, "UPDATE_PROFILE", "User details updated."))
        .await?;

    let app: Router =
        activity_log::api::rest::routes::register_routes(Router::new(), service.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/activity-logs?user_id={actor}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["total"], 1);
    assert_eq!(body["entries"][0]["action"], "UPDATE_PROFILE");

    Ok(())
}
