use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::NotificationRecord;

/// Port for the domain layer: persistence operations the domain needs.
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    /// Insert a fully-formed record.
    ///
    /// Service computes id/timestamp/message; repo persists.
    async fn insert(&self, record: NotificationRecord) -> anyhow::Result<()>;

    /// All records for one recipient, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<NotificationRecord>>;

    /// Delete all records for one recipient. Returns rows removed.
    async fn delete_for_user(&self, user_id: Uuid) -> anyhow::Result<u64>;
}
