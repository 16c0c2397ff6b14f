use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::broadcast::NotificationBroadcaster;
use crate::contract::model::{NotificationRecord, NotifyEvent};
use crate::domain::error::DomainError;
use crate::domain::ports::TextGenerator;
use crate::domain::repo::NotificationsRepository;
use crate::domain::templates::fallback_message;

/// Domain service owning notification records and their fan-out.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn NotificationsRepository>,
    textgen: Arc<dyn TextGenerator>,
    broadcaster: NotificationBroadcaster,
    textgen_timeout: Duration,
}

impl Service {
    pub fn new(
        repo: Arc<dyn NotificationsRepository>,
        textgen: Arc<dyn TextGenerator>,
        broadcaster: NotificationBroadcaster,
        textgen_timeout: Duration,
    ) -> Self {
        Self {
            repo,
            textgen,
            broadcaster,
            textgen_timeout,
        }
    }

    #[instrument(
        name = "notifications.service.notify",
        skip(self),
        fields(kind = %event.kind, recipient = %event.recipient_id)
    )]
    pub async fn notify(&self, event: NotifyEvent) -> Result<NotificationRecord, DomainError> {
        let message = self.compose(&event).await;

        let record = NotificationRecord {
            id: Uuid::new_v4(),
            user_id: event.recipient_id,
            kind: event.kind,
            message,
            medium: event.kind.medium(),
            timestamp: Utc::now(),
            is_read: false,
        };

        self.repo
            .insert(record.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        // Live fan-out is at-most-once and never blocks the caller.
        self.broadcaster.send(record.clone());

        debug!("Notification recorded and emitted");
        Ok(record)
    }

    #[instrument(name = "notifications.service.list_for_user", skip(self))]
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<NotificationRecord>, DomainError> {
        self.repo
            .list_for_user(user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "notifications.service.clear_for_user", skip(self))]
    pub async fn clear_for_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        self.repo
            .delete_for_user(user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Compose message copy for the event.
    ///
    /// The text-generation collaborator gets one bounded attempt; any error,
    /// timeout or blank output degrades to the deterministic template.
    async fn compose(&self, event: &NotifyEvent) -> String {
        let generated = tokio::time::timeout(
            self.textgen_timeout,
            self.textgen.generate(event.kind, &event.context),
        )
        .await;

        match generated {
            Ok(Ok(text)) if !text.trim().is_empty() => text,
            Ok(Ok(_)) => {
                warn!(kind = %event.kind, "Text generation returned empty copy, using template");
                fallback_message(event.kind, &event.context)
            }
            Ok(Err(e)) => {
                warn!(kind = %event.kind, error = %e, "Text generation failed, using template");
                fallback_message(event.kind, &event.context)
            }
            Err(_) => {
                warn!(kind = %event.kind, "Text generation timed out, using template");
                fallback_message(event.kind, &event.context)
            }
        }
    }
}
