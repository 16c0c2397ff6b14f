use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::ActivityLogError,
    model::{ActivityEntry, NewActivityEntry},
};

/// Public API trait for the activity_log module that other modules can use
#[async_trait]
pub trait ActivityLogApi: Send + Sync {
    /// Append one activity entry.
    async fn record(&self, entry: NewActivityEntry) -> Result<ActivityEntry, ActivityLogError>;

    /// List entries, newest first, optionally filtered to one actor.
    async fn list(
        &self,
        user_id: Option<Uuid>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<ActivityEntry>, ActivityLogError>;
}
