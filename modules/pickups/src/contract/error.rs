use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::PickupStatus;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum PickupsError {
    #[error("Pickup request not found: {id}")]
    NotFound { id: Uuid },

    #[error("Illegal status transition: {from} -> {to}")]
    InvalidTransition { from: PickupStatus, to: PickupStatus },

    #[error("Concurrent update on request {id}, retry the operation")]
    Conflict { id: Uuid },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl PickupsError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn invalid_transition(from: PickupStatus, to: PickupStatus) -> Self {
        Self::InvalidTransition { from, to }
    }

    pub fn conflict(id: Uuid) -> Self {
        Self::Conflict { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for PickupsError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            RequestNotFound { id } => Self::not_found(id),
            UserNotFound { id } => Self::validation(format!("Unknown user: {id}")),
            NotAResident { id } => Self::validation(format!("User {id} is not a resident")),
            InvalidTransition { from, to } => Self::invalid_transition(from, to),
            Conflict { id } => Self::conflict(id),
            Validation { field, message } => Self::validation(format!("{field}: {message}")),
            Database { .. } => Self::internal(),
        }
    }
}
