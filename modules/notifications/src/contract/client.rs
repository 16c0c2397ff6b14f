use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::NotificationsError,
    model::{NotificationRecord, NotifyEvent},
};

/// Public API trait for the notifications module that other modules can use
#[async_trait]
pub trait NotificationsApi: Send + Sync {
    /// Compose, persist and emit one notification.
    ///
    /// Message composition never blocks on the text-generation collaborator:
    /// on its failure or timeout a deterministic template is used instead.
    async fn notify(&self, event: NotifyEvent) -> Result<NotificationRecord, NotificationsError>;

    /// All notifications for a recipient, newest first.
    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<NotificationRecord>, NotificationsError>;

    /// Hard-delete all notifications for a recipient. Returns the count removed.
    async fn clear_for_user(&self, user_id: Uuid) -> Result<u64, NotificationsError>;
}
