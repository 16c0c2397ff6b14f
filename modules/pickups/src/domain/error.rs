use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::PickupStatus;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Pickup request not found: {id}")]
    RequestNotFound { id: Uuid },

    #[error("User not found: {id}")]
    UserNotFound { id: Uuid },

    #[error("User {id} is not a resident")]
    NotAResident { id: Uuid },

    #[error("Illegal status transition: {from} -> {to}")]
    InvalidTransition { from: PickupStatus, to: PickupStatus },

    #[error("Concurrent update on request {id}")]
    Conflict { id: Uuid },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn request_not_found(id: Uuid) -> Self {
        Self::RequestNotFound { id }
    }

    pub fn user_not_found(id: Uuid) -> Self {
        Self::UserNotFound { id }
    }

    pub fn not_a_resident(id: Uuid) -> Self {
        Self::NotAResident { id }
    }

    pub fn invalid_transition(from: PickupStatus, to: PickupStatus) -> Self {
        Self::InvalidTransition { from, to }
    }

    pub fn conflict(id: Uuid) -> Self {
        Self::Conflict { id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
