use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::UsersDirectoryApi,
    error::UsersDirectoryError,
    model::{NewUser, User, UserPatch, UserRole},
};
use crate::domain::service::Service;

/// Local implementation of the UsersDirectoryApi trait that delegates to the domain service
pub struct UsersDirectoryLocalClient {
    service: Arc<Service>,
}

impl UsersDirectoryLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersDirectoryApi for UsersDirectoryLocalClient {
    async fn get_user(&self, id: Uuid) -> Result<User, UsersDirectoryError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersDirectoryError> {
        self.service.find_by_email(email).await.map_err(Into::into)
    }

    async fn list_users(
        &self,
        role: Option<UserRole>,
        zone: Option<String>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<User>, UsersDirectoryError> {
        self.service
            .list_users(role, zone, limit, offset)
            .await
            .map_err(Into::into)
    }

    async fn list_operators(&self) -> Result<Vec<User>, UsersDirectoryError> {
        self.service.list_operators().await.map_err(Into::into)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersDirectoryError> {
        self.service.create_user(new_user).await.map_err(Into::into)
    }

    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, UsersDirectoryError> {
        self.service
            .update_user(id, patch)
            .await
            .map_err(Into::into)
    }
}
