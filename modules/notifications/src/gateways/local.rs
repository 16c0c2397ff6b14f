use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::NotificationsApi,
    error::NotificationsError,
    model::{NotificationRecord, NotifyEvent},
};
use crate::domain::service::Service;

/// Local implementation of the NotificationsApi trait that delegates to the domain service
pub struct NotificationsLocalClient {
    service: Arc<Service>,
}

impl NotificationsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl NotificationsApi for NotificationsLocalClient {
    async fn notify(&self, event: NotifyEvent) -> Result<NotificationRecord, NotificationsError> {
        self.service.notify(event).await.map_err(Into::into)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<NotificationRecord>, NotificationsError> {
        self.service
            .list_for_user(user_id)
            .await
            .map_err(Into::into)
    }

    async fn clear_for_user(&self, user_id: Uuid) -> Result<u64, NotificationsError> {
        self.service
            .clear_for_user(user_id)
            .await
            .map_err(Into::into)
    }
}
