use anyhow::Context;

use crate::contract::model::{EventKind, Medium, NotificationRecord};
use crate::infra::storage::entity::Model as NotificationEntity;

/// Convert a database entity to a contract model.
///
/// Fails only if stored kind/medium tokens are unknown (schema drift).
pub fn entity_to_contract(entity: NotificationEntity) -> anyhow::Result<NotificationRecord> {
    let kind: EventKind = entity
        .kind
        .parse()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("notification {} has an invalid kind", entity.id))?;
    let medium: Medium = entity
        .medium
        .parse()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("notification {} has an invalid medium", entity.id))?;

    Ok(NotificationRecord {
        id: entity.id,
        user_id: entity.user_id,
        kind,
        message: entity.message,
        medium,
        timestamp: entity.timestamp,
        is_read: entity.is_read,
    })
}
