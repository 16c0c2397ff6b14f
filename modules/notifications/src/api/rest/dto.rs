use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::NotificationRecord;

/// REST DTO for one notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub message: String,
    pub medium: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

/// REST DTO for the notification list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListDto {
    pub notifications: Vec<NotificationDto>,
    pub total: usize,
}

/// REST DTO for the clear response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearedDto {
    pub cleared: u64,
}

impl From<NotificationRecord> for NotificationDto {
    fn from(record: NotificationRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            kind: record.kind.to_string(),
            message: record.message,
            medium: record.medium.to_string(),
            timestamp: record.timestamp,
            is_read: record.is_read,
        }
    }
}
