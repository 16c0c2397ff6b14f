use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::ActivityLogApi,
    error::ActivityLogError,
    model::{ActivityEntry, NewActivityEntry},
};
use crate::domain::service::Service;

/// Local implementation of the ActivityLogApi trait that delegates to the domain service
pub struct ActivityLogLocalClient {
    service: Arc<Service>,
}

impl ActivityLogLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ActivityLogApi for ActivityLogLocalClient {
    async fn record(&self, entry: NewActivityEntry) -> Result<ActivityEntry, ActivityLogError> {
        self.service.record(entry).await.map_err(Into::into)
    }

    async fn list(
        &self,
        user_id: Option<Uuid>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<ActivityEntry>, ActivityLogError> {
        self.service
            .list(user_id, limit, offset)
            .await
            .map_err(Into::into)
    }
}
