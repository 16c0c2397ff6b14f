use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One append-only activity record (who did what, when).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: Uuid,
    /// Actor who triggered the event.
    pub user_id: Uuid,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

/// Data for appending a new activity entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivityEntry {
    pub user_id: Uuid,
    pub action: String,
    pub details: String,
}

impl ActivityEntry {
    /// Materialize a new entry with a generated id and the current time.
    pub fn from_new(new: NewActivityEntry, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            action: new.action,
            details: new.details,
            timestamp: at,
        }
    }
}
