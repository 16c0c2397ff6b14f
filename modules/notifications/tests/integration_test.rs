//! Integration-style tests for the notifications module.
//!
//! Each test runs on a fresh in-memory SQLite DB and applies migrations.
//! Text generation is exercised through stub generators so the fallback
//! behavior is deterministic.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use futures::StreamExt;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tokio::time::timeout;
use tower::ServiceExt;
use uuid::Uuid;

use notifications::{
    broadcast::NotificationBroadcaster,
    contract::model::{EventContext, EventKind, Medium, NotifyEvent},
    domain::{ports::TextGenerator, service::Service, templates::fallback_message},
    infra::{storage::SeaOrmNotificationsRepository, textgen::DisabledTextGenerator},
};

struct FailingTextGenerator;

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    async fn generate(&self, _kind: EventKind, _ctx: &EventContext) -> anyhow::Result<String> {
        anyhow::bail!("rate limited")
    }
}

struct SlowTextGenerator;

#[async_trait]
impl TextGenerator for SlowTextGenerator {
    async fn generate(&self, _kind: EventKind, _ctx: &EventContext) -> anyhow::Result<String> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("too late".to_string())
    }
}

struct CannedTextGenerator(&'static str);

#[async_trait]
impl TextGenerator for CannedTextGenerator {
    async fn generate(&self, _kind: EventKind, _ctx: &EventContext) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    notifications::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

async fn create_test_service(textgen: Arc<dyn TextGenerator>) -> (Arc<Service>, NotificationBroadcaster) {
    let db = create_test_db().await;
    let repo = SeaOrmNotificationsRepository::new(db);
    let broadcaster = NotificationBroadcaster::new(16);
    let service = Service::new(
        Arc::new(repo),
        textgen,
        broadcaster.clone(),
        Duration::from_millis(100),
    );
    (Arc::new(service), broadcaster)
}

fn confirmation_event(recipient: Uuid) -> NotifyEvent {
    NotifyEvent {
        kind: EventKind::PickupConfirmation,
        recipient_id: recipient,
        context: EventContext {
            recipient_name: "Ayo Balogun".to_string(),
            waste_type: Some("General Household".to_string()),
            zone: Some("Bodija".to_string()),
            status: None,
        },
    }
}

#[tokio::test]
async fn test_failed_generation_uses_fallback_template() -> Result<()> {
    let (service, _b) = create_test_service(Arc::new(FailingTextGenerator)).await;
    let recipient = Uuid::new_v4();

    let event = confirmation_event(recipient);
    let record = service.notify(event.clone()).await?;

    assert!(!record.message.is_empty());
    assert_eq!(
        record.message,
        fallback_message(EventKind::PickupConfirmation, &event.context)
    );
    assert_eq!(record.medium, Medium::Email);

    Ok(())
}

#[tokio::test]
async fn test_slow_generation_times_out_to_fallback() -> Result<()> {
    let (service, _b) = create_test_service(Arc::new(SlowTextGenerator)).await;
    let recipient = Uuid::new_v4();

    let event = confirmation_event(recipient);
    // Must come back well under the generator's sleep: the timeout bounds it.
    let record = timeout(Duration::from_secs(5), service.notify(event.clone())).await??;
    assert_eq!(
        record.message,
        fallback_message(EventKind::PickupConfirmation, &event.context)
    );

    Ok(())
}

#[tokio::test]
async fn test_generated_copy_is_used_when_available() -> Result<()> {
    let (service, _b) = create_test_service(Arc::new(CannedTextGenerator("Custom copy."))).await;

    let record = service.notify(confirmation_event(Uuid::new_v4())).await?;
    assert_eq!(record.message, "Custom copy.");

    Ok(())
}

#[tokio::test]
async fn test_blank_generated_copy_falls_back() -> Result<()> {
    let (service, _b) = create_test_service(Arc::new(CannedTextGenerator("   "))).await;

    let event = confirmation_event(Uuid::new_v4());
    let record = service.notify(event.clone()).await?;
    assert_eq!(
        record.message,
        fallback_message(EventKind::PickupConfirmation, &event.context)
    );

    Ok(())
}

#[tokio::test]
async fn test_medium_per_event_kind() -> Result<()> {
    let (service, _b) = create_test_service(Arc::new(DisabledTextGenerator)).await;
    let recipient = Uuid::new_v4();

    let email = service.notify(confirmation_event(recipient)).await?;
    assert_eq!(email.medium, Medium::Email);

    let sms = service
        .notify(NotifyEvent {
            kind: EventKind::DriverEnRoute,
            recipient_id: recipient,
            context: EventContext::default(),
        })
        .await?;
    assert_eq!(sms.medium, Medium::Sms);

    Ok(())
}

#[tokio::test]
async fn test_list_and_clear() -> Result<()> {
    let (service, _b) = create_test_service(Arc::new(DisabledTextGenerator)).await;
    let recipient = Uuid::new_v4();
    let bystander = Uuid::new_v4();

    service.notify(confirmation_event(recipient)).await?;
    service
        .notify(NotifyEvent {
            kind: EventKind::StatusUpdate,
            recipient_id: recipient,
            context: EventContext {
                status: Some("SCHEDULED".to_string()),
                ..Default::default()
            },
        })
        .await?;
    service.notify(confirmation_event(bystander)).await?;

    let mine = service.list_for_user(recipient).await?;
    assert_eq!(mine.len(), 2);

    let cleared = service.clear_for_user(recipient).await?;
    assert_eq!(cleared, 2);
    assert!(service.list_for_user(recipient).await?.is_empty());

    // The bystander's records are untouched.
    assert_eq!(service.list_for_user(bystander).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_broadcast_delivers_to_subscribers() -> Result<()> {
    let (service, broadcaster) = create_test_service(Arc::new(DisabledTextGenerator)).await;
    let mut stream = Box::pin(broadcaster.subscribe_stream());

    let recipient = Uuid::new_v4();
    let record = service.notify(confirmation_event(recipient)).await?;

    let received = timeout(Duration::from_millis(200), stream.next())
        .await
        .expect("timeout")
        .expect("event received");
    assert_eq!(received.id, record.id);
    assert_eq!(received.user_id, recipient);

    Ok(())
}

#[tokio::test]
async fn test_rest_list_and_clear() -> Result<()> {
    let (service, broadcaster) = create_test_service(Arc::new(DisabledTextGenerator)).await;
    let recipient = Uuid::new_v4();
    service.notify(confirmation_event(recipient)).await?;

    let app: Router = notifications::api::rest::routes::register_routes(
        Router::new(),
        service.clone(),
        broadcaster,
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/notifications/{recipient}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["total"], 1);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/notifications/{recipient}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["cleared"], 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/notifications/{recipient}"))
                .body(Body::empty())?,
        )
        .await?;
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["total"], 0);

    Ok(())
}
