use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::ActivityEntry;

/// REST DTO for one activity entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntryDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

/// REST DTO for the activity list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityListDto {
    pub entries: Vec<ActivityEntryDto>,
    pub total: usize,
    pub limit: u64,
    pub offset: u64,
}

/// REST DTO for query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ListActivityQuery {
    pub user_id: Option<Uuid>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl From<ActivityEntry> for ActivityEntryDto {
    fn from(entry: ActivityEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            action: entry.action,
            details: entry.details,
            timestamp: entry.timestamp,
        }
    }
}
