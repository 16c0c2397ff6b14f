use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use activity_log::contract::model::ActivityEntry;
use notifications::contract::{
    client::NotificationsApi,
    model::{EventContext, EventKind, NotifyEvent},
};
use users_directory::contract::{
    client::UsersDirectoryApi,
    error::UsersDirectoryError,
    model::{User, UserRole},
};

use crate::contract::model::{
    NewPickupRequest, PickupRequest, PickupStatus, Priority, RequestScope, WasteType,
};
use crate::domain::assignment;
use crate::domain::error::DomainError;
use crate::domain::repo::{PickupsRepository, TransitionOutcome};

/// The request lifecycle engine.
///
/// Exclusively owns PickupRequest mutation: creation runs the assignment
/// resolver and persists atomically with its activity entry; status updates
/// validate the transition table and compare-and-swap the stored status.
/// Notifications are dispatched strictly after the write commits and their
/// failures never surface to the caller.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn PickupsRepository>,
    users: Arc<dyn UsersDirectoryApi>,
    notifier: Arc<dyn NotificationsApi>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 500,
        }
    }
}

impl Service {
    pub fn new(
        repo: Arc<dyn PickupsRepository>,
        users: Arc<dyn UsersDirectoryApi>,
        notifier: Arc<dyn NotificationsApi>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            users,
            notifier,
            config,
        }
    }

    #[instrument(
        name = "pickups.service.create_request",
        skip(self, data),
        fields(actor_id = %actor_id)
    )]
    pub async fn create_request(
        &self,
        actor_id: Uuid,
        data: NewPickupRequest,
    ) -> Result<PickupRequest, DomainError> {
        info!("Creating pickup request");

        let actor = self.load_user(actor_id).await?;
        let resident = self.resolve_origin(&actor, data.resident_id).await?;

        if data.contact_phone.trim().is_empty() {
            return Err(DomainError::validation("contact_phone", "is required"));
        }

        let zone = data
            .zone
            .filter(|z| !z.trim().is_empty())
            .unwrap_or_else(|| resident.zone.clone());
        let waste_type = data.waste_type.unwrap_or(WasteType::General);
        let priority = data.priority.unwrap_or(Priority::Medium);
        let scheduled_date = data
            .scheduled_date
            .unwrap_or_else(|| Utc::now().date_naive());

        // Explicit preference on the payload wins over the resident's stored one.
        let preferred = data
            .preferred_operator_id
            .or(resident.preferred_operator_id);
        let pool = self
            .users
            .list_operators()
            .await
            .map_err(map_users_error)?;
        let operator = assignment::resolve(preferred, &zone, &pool);

        let now = Utc::now();
        let request = PickupRequest {
            id: Uuid::new_v4(),
            resident_id: resident.id,
            resident_name: resident.name.clone(),
            operator_id: operator.map(|op| op.id),
            operator_name: operator.map(|op| op.name.clone()),
            zone,
            house_number: data.house_number,
            street_name: data.street_name,
            landmark: data.landmark,
            contact_phone: data.contact_phone,
            coordinates: data.coordinates,
            waste_type,
            priority,
            scheduled_date,
            status: PickupStatus::Pending,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        };

        let log = ActivityEntry {
            id: Uuid::new_v4(),
            user_id: actor_id,
            action: "CREATE_PICKUP".to_string(),
            details: format!(
                "New {} request created for {}.",
                request.waste_type, request.zone
            ),
            timestamp: now,
        };

        self.repo
            .insert_with_log(request.clone(), log)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        // Post-commit side effects; the request stands regardless.
        self.dispatch_creation_notices(&request).await;

        info!("Successfully created pickup request with id={}", request.id);
        Ok(request)
    }

    #[instrument(
        name = "pickups.service.update_status",
        skip(self),
        fields(request_id = %request_id, actor_id = %actor_id, new_status = %new_status)
    )]
    pub async fn update_status(
        &self,
        request_id: Uuid,
        actor_id: Uuid,
        new_status: PickupStatus,
    ) -> Result<PickupRequest, DomainError> {
        let current = self
            .repo
            .find_by_id(request_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::request_not_found(request_id))?;

        // Dropdown re-submissions arrive as the current status; treat them as
        // a no-op success: no mutation, no log entry, no notification.
        if current.status == new_status {
            debug!("Status unchanged, treating as no-op");
            return Ok(current);
        }

        if !current.status.can_transition_to(new_status) {
            return Err(DomainError::invalid_transition(current.status, new_status));
        }

        let now = Utc::now();
        let log = ActivityEntry {
            id: Uuid::new_v4(),
            user_id: actor_id,
            action: "UPDATE_STATUS".to_string(),
            details: format!(
                "Request ID #{} status updated from {} to {}",
                short_id(request_id),
                current.status,
                new_status
            ),
            timestamp: now,
        };

        let outcome = self
            .repo
            .transition_with_log(request_id, current.status, new_status, now, log)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        match outcome {
            TransitionOutcome::Applied(updated) => {
                self.dispatch_status_notice(&updated).await;
                info!("Status transition applied");
                Ok(updated)
            }
            TransitionOutcome::Raced => Err(DomainError::conflict(request_id)),
        }
    }

    #[instrument(name = "pickups.service.get_request", skip(self), fields(request_id = %id))]
    pub async fn get_request(&self, id: Uuid) -> Result<PickupRequest, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::request_not_found(id))
    }

    #[instrument(name = "pickups.service.list_requests", skip(self))]
    pub async fn list_requests(
        &self,
        scope: RequestScope,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<PickupRequest>, DomainError> {
        let limit = limit
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size);
        let offset = offset.unwrap_or(0);

        self.repo
            .list(scope, limit, offset)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    // --- helpers ---

    async fn load_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.users.get_user(id).await.map_err(map_users_error)
    }

    /// Work out whose request this is.
    ///
    /// Residents are always their own origin. Operators and admins doing
    /// manual entry either name a resident explicitly or stand in as the
    /// origin themselves.
    async fn resolve_origin(
        &self,
        actor: &User,
        resident_id: Option<Uuid>,
    ) -> Result<User, DomainError> {
        if actor.role == UserRole::Resident {
            return Ok(actor.clone());
        }
        match resident_id {
            Some(id) if id != actor.id => {
                let user = self.load_user(id).await?;
                if user.role != UserRole::Resident {
                    return Err(DomainError::not_a_resident(id));
                }
                Ok(user)
            }
            _ => Ok(actor.clone()),
        }
    }

    async fn dispatch_creation_notices(&self, request: &PickupRequest) {
        let context = EventContext {
            recipient_name: request.resident_name.clone(),
            waste_type: Some(request.waste_type.to_string()),
            zone: Some(request.zone.clone()),
            status: None,
        };

        self.dispatch(NotifyEvent {
            kind: EventKind::PickupConfirmation,
            recipient_id: request.resident_id,
            context: context.clone(),
        })
        .await;

        if let (Some(operator_id), Some(operator_name)) =
            (request.operator_id, request.operator_name.as_ref())
        {
            self.dispatch(NotifyEvent {
                kind: EventKind::OperatorNewJob,
                recipient_id: operator_id,
                context: EventContext {
                    recipient_name: operator_name.clone(),
                    ..context
                },
            })
            .await;
        }
    }

    async fn dispatch_status_notice(&self, request: &PickupRequest) {
        let kind = match request.status {
            PickupStatus::OnTheWay => EventKind::DriverEnRoute,
            PickupStatus::Completed => EventKind::PickupCompleted,
            _ => EventKind::StatusUpdate,
        };

        self.dispatch(NotifyEvent {
            kind,
            recipient_id: request.resident_id,
            context: EventContext {
                recipient_name: request.resident_name.clone(),
                waste_type: Some(request.waste_type.to_string()),
                zone: Some(request.zone.clone()),
                status: Some(request.status.to_string()),
            },
        })
        .await;
    }

    /// Fire one notification; failures are logged and swallowed.
    async fn dispatch(&self, event: NotifyEvent) {
        if let Err(e) = self.notifier.notify(event).await {
            warn!("Notification dispatch failed (continuing): {}", e);
        }
    }
}

fn map_users_error(e: UsersDirectoryError) -> DomainError {
    match e {
        UsersDirectoryError::NotFound { id } => DomainError::user_not_found(id),
        UsersDirectoryError::Conflict { email } => {
            DomainError::validation("email", format!("'{email}' already exists"))
        }
        UsersDirectoryError::Validation { message } => DomainError::validation("user", message),
        UsersDirectoryError::Internal => DomainError::database("users directory unavailable"),
    }
}

/// The short id residents see in activity details and SMS copy.
fn short_id(id: Uuid) -> String {
    let simple = id.simple().to_string();
    simple[simple.len() - 6..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_is_last_six_hex_chars() {
        let id = Uuid::nil();
        assert_eq!(short_id(id), "000000");
    }
}
