use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{User, UserRole};

/// Port for the domain layer: persistence operations the domain needs.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Load a user by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    /// Load a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Check uniqueness by email.
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;

    /// Insert a fully-formed domain user.
    ///
    /// Service computes id/timestamps/validation; repo persists.
    async fn insert(&self, user: User) -> anyhow::Result<()>;

    /// Update an existing user (by primary key in `user.id`).
    async fn update(&self, user: User) -> anyhow::Result<()>;

    /// List users ordered by `created_at` ascending.
    async fn list(
        &self,
        role: Option<UserRole>,
        zone: Option<String>,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<User>>;
}
