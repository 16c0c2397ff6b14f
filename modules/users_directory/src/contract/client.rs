use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::UsersDirectoryError,
    model::{NewUser, User, UserPatch, UserRole},
};

/// Public API trait for the users_directory module that other modules can use
#[async_trait]
pub trait UsersDirectoryApi: Send + Sync {
    /// Get a user by ID
    async fn get_user(&self, id: Uuid) -> Result<User, UsersDirectoryError>;

    /// Look a user up by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersDirectoryError>;

    /// List users with optional role/zone filters, ordered by registration time
    async fn list_users(
        &self,
        role: Option<UserRole>,
        zone: Option<String>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<User>, UsersDirectoryError>;

    /// The full PSP operator pool in stable registration order.
    ///
    /// Consumed by the pickup assignment resolver; the stable ordering is what
    /// makes its first-match-wins tie-break deterministic.
    async fn list_operators(&self) -> Result<Vec<User>, UsersDirectoryError>;

    /// Register a new user
    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersDirectoryError>;

    /// Update a user profile with partial data
    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, UsersDirectoryError>;
}
