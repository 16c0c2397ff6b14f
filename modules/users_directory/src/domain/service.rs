use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use activity_log::contract::{client::ActivityLogApi, model::NewActivityEntry};

use crate::contract::model::{NewUser, User, UserPatch, UserRole};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;

/// Domain service with business rules for the user registry.
/// Depends only on the repository port and the activity-log contract.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    activity: Arc<dyn ActivityLogApi>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_name_length: usize,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            default_page_size: 50,
            max_page_size: 500,
        }
    }
}

impl Service {
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        activity: Arc<dyn ActivityLogApi>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            activity,
            config,
        }
    }

    #[instrument(name = "users_directory.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        let user = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        Ok(user)
    }

    #[instrument(name = "users_directory.service.find_by_email", skip(self, email))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.repo
            .find_by_email(email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "users_directory.service.list_users", skip(self))]
    pub async fn list_users(
        &self,
        role: Option<UserRole>,
        zone: Option<String>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<User>, DomainError> {
        let limit = limit
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size);
        let offset = offset.unwrap_or(0);

        self.repo
            .list(role, zone, limit, offset)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// The PSP operator pool in stable registration order.
    #[instrument(name = "users_directory.service.list_operators", skip(self))]
    pub async fn list_operators(&self) -> Result<Vec<User>, DomainError> {
        self.repo
            .list(Some(UserRole::PspOperator), None, self.config.max_page_size, 0)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(
        name = "users_directory.service.create_user",
        skip(self),
        fields(email = %new_user.email, role = %new_user.role)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Registering new user");

        self.validate_new_user(&new_user)?;

        if self
            .repo
            .email_exists(&new_user.email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            return Err(DomainError::email_already_exists(new_user.email));
        }

        if let Some(op_id) = new_user.preferred_operator_id {
            self.ensure_operator(op_id).await?;
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            role: new_user.role,
            zone: new_user.zone,
            availability: new_user.availability,
            preferred_operator_id: new_user.preferred_operator_id,
            created_at: now,
            updated_at: now,
        };

        self.repo
            .insert(user.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        // Best-effort trail; registration must not fail on a logging hiccup.
        let activity_result = self
            .activity
            .record(NewActivityEntry {
                user_id: user.id,
                action: "REGISTER_USER".to_string(),
                details: format!("User {} registered as {}.", user.name, user.role),
            })
            .await;
        if let Err(e) = activity_result {
            debug!("Activity log call failed (continuing): {}", e);
        }

        info!("Successfully registered user with id={}", user.id);
        Ok(user)
    }

    #[instrument(
        name = "users_directory.service.update_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        info!("Updating user profile");

        self.validate_user_patch(&patch)?;

        let mut current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        if let Some(ref new_email) = patch.email {
            if new_email != &current.email
                && self
                    .repo
                    .email_exists(new_email)
                    .await
                    .map_err(|e| DomainError::database(e.to_string()))?
            {
                return Err(DomainError::email_already_exists(new_email.clone()));
            }
        }

        if let Some(Some(op_id)) = patch.preferred_operator_id {
            self.ensure_operator(op_id).await?;
        }

        if let Some(name) = patch.name {
            current.name = name;
        }
        if let Some(email) = patch.email {
            current.email = email;
        }
        if let Some(phone) = patch.phone {
            current.phone = phone;
        }
        if let Some(zone) = patch.zone {
            current.zone = zone;
        }
        if let Some(availability) = patch.availability {
            current.availability = Some(availability);
        }
        if let Some(preferred) = patch.preferred_operator_id {
            current.preferred_operator_id = preferred;
        }
        current.updated_at = Utc::now();

        self.repo
            .update(current.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let activity_result = self
            .activity
            .record(NewActivityEntry {
                user_id: current.id,
                action: "UPDATE_PROFILE".to_string(),
                details: format!("User {} details updated.", current.name),
            })
            .await;
        if let Err(e) = activity_result {
            debug!("Activity log call failed (continuing): {}", e);
        }

        info!("Successfully updated user profile");
        Ok(current)
    }

    // --- validation helpers ---

    async fn ensure_operator(&self, id: Uuid) -> Result<(), DomainError> {
        let user = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        if user.role != UserRole::PspOperator {
            return Err(DomainError::not_an_operator(id));
        }
        Ok(())
    }

    fn validate_new_user(&self, new_user: &NewUser) -> Result<(), DomainError> {
        self.validate_name(&new_user.name)?;
        self.validate_email(&new_user.email)?;
        self.validate_non_empty("phone", &new_user.phone)?;
        self.validate_non_empty("zone", &new_user.zone)?;
        Ok(())
    }

    fn validate_user_patch(&self, patch: &UserPatch) -> Result<(), DomainError> {
        if let Some(ref name) = patch.name {
            self.validate_name(name)?;
        }
        if let Some(ref email) = patch.email {
            self.validate_email(email)?;
        }
        if let Some(ref phone) = patch.phone {
            self.validate_non_empty("phone", phone)?;
        }
        if let Some(ref zone) = patch.zone {
            self.validate_non_empty("zone", zone)?;
        }
        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), DomainError> {
        if email.is_empty() || !email.contains('@') || !email.contains('.') {
            return Err(DomainError::invalid_email(email.to_string()));
        }
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::empty_field("name"));
        }
        if name.len() > self.config.max_name_length {
            return Err(DomainError::validation(
                "name",
                format!(
                    "too long: {} characters (max: {})",
                    name.len(),
                    self.config.max_name_length
                ),
            ));
        }
        Ok(())
    }

    fn validate_non_empty(&self, field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::empty_field(field));
        }
        Ok(())
    }
}
