use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::contract::model::{ActivityEntry, NewActivityEntry};
use crate::domain::error::DomainError;
use crate::domain::repo::ActivityLogRepository;

/// Domain service owning the append-only activity log.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn ActivityLogRepository>,
    config: ServiceConfig,
}

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
    pub fn new(repo: Arc<dyn ActivityLogRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[instrument(
        name = "activity_log.service.record",
        skip(self),
        fields(user_id = %entry.user_id, action = %entry.action)
    )]
    pub async fn record(&self, entry: NewActivityEntry) -> Result<ActivityEntry, DomainError> {
        if entry.action.trim().is_empty() {
            return Err(DomainError::empty_action());
        }

        let entry = ActivityEntry::from_new(entry, Utc::now());
        self.repo
            .insert(entry.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!("Recorded activity entry");
        Ok(entry)
    }

    #[instrument(name = "activity_log.service.list", skip(self))]
    pub async fn list(
        &self,
        user_id: Option<Uuid>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<ActivityEntry>, DomainError> {
        let limit = limit
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size);
        let offset = offset.unwrap_or(0);

        self.repo
            .list(user_id, limit, offset)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }
}
