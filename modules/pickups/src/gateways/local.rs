use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::PickupsApi,
    error::PickupsError,
    model::{NewPickupRequest, PickupRequest, PickupStatus, RequestScope},
};
use crate::domain::service::Service;

/// Local implementation of the PickupsApi trait that delegates to the domain service
pub struct PickupsLocalClient {
    service: Arc<Service>,
}

impl PickupsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PickupsApi for PickupsLocalClient {
    async fn create_request(
        &self,
        actor_id: Uuid,
        data: NewPickupRequest,
    ) -> Result<PickupRequest, PickupsError> {
        self.service
            .create_request(actor_id, data)
            .await
            .map_err(Into::into)
    }

    async fn update_status(
        &self,
        request_id: Uuid,
        actor_id: Uuid,
        new_status: PickupStatus,
    ) -> Result<PickupRequest, PickupsError> {
        self.service
            .update_status(request_id, actor_id, new_status)
            .await
            .map_err(Into::into)
    }

    async fn get_request(&self, id: Uuid) -> Result<PickupRequest, PickupsError> {
        self.service.get_request(id).await.map_err(Into::into)
    }

    async fn list_requests(
        &self,
        scope: RequestScope,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<PickupRequest>, PickupsError> {
        self.service
            .list_requests(scope, limit, offset)
            .await
            .map_err(Into::into)
    }
}
