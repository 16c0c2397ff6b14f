use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::PickupsError,
    model::{NewPickupRequest, PickupRequest, PickupStatus, RequestScope},
};

/// Public API trait for the pickups module that other modules can use
#[async_trait]
pub trait PickupsApi: Send + Sync {
    /// Create a pickup request on behalf of the acting user.
    async fn create_request(
        &self,
        actor_id: Uuid,
        data: NewPickupRequest,
    ) -> Result<PickupRequest, PickupsError>;

    /// Drive one status transition; same-status updates are a no-op success.
    async fn update_status(
        &self,
        request_id: Uuid,
        actor_id: Uuid,
        new_status: PickupStatus,
    ) -> Result<PickupRequest, PickupsError>;

    /// Get one request by id.
    async fn get_request(&self, id: Uuid) -> Result<PickupRequest, PickupsError>;

    /// Role-scoped listing, newest first.
    async fn list_requests(
        &self,
        scope: RequestScope,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<PickupRequest>, PickupsError>;
}
