use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use activity_log::contract::model::ActivityEntry;

use crate::contract::model::{PickupRequest, PickupStatus, RequestScope};

/// Result of a compare-and-swap transition attempt.
#[derive(Debug)]
pub enum TransitionOutcome {
    /// The transition committed; here is the updated record.
    Applied(PickupRequest),
    /// Another writer moved the request off the expected status first.
    /// Nothing was written.
    Raced,
}

/// Port for the domain layer: persistence operations the lifecycle engine needs.
///
/// Mutations take the activity entry alongside the record so the adapter can
/// commit both in one transaction; a lifecycle write without its log entry
/// must be impossible.
#[async_trait]
pub trait PickupsRepository: Send + Sync {
    /// Load a request by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<PickupRequest>>;

    /// Persist a new request and its CREATE_PICKUP entry atomically.
    async fn insert_with_log(
        &self,
        request: PickupRequest,
        log: ActivityEntry,
    ) -> anyhow::Result<()>;

    /// Compare-and-swap the status from `from` to `to`, bumping `updated_at`
    /// and appending the UPDATE_STATUS entry in the same transaction.
    async fn transition_with_log(
        &self,
        id: Uuid,
        from: PickupStatus,
        to: PickupStatus,
        updated_at: DateTime<Utc>,
        log: ActivityEntry,
    ) -> anyhow::Result<TransitionOutcome>;

    /// Role-scoped listing, newest first.
    async fn list(
        &self,
        scope: RequestScope,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<PickupRequest>>;
}
