use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::ActivityEntry;

/// Port for the domain layer: persistence operations the domain needs.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Insert a fully-formed entry.
    ///
    /// Service computes id/timestamp/validation; repo persists.
    async fn insert(&self, entry: ActivityEntry) -> anyhow::Result<()>;

    /// List entries newest first, optionally filtered by actor.
    async fn list(
        &self,
        user_id: Option<Uuid>,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<ActivityEntry>>;
}
