use anyhow::Context;

use crate::contract::model::{User, UserRole};
use crate::infra::storage::entity::Model as UserEntity;

/// Convert a database entity to a contract model.
///
/// Fails only if the stored role token is unknown (schema drift).
pub fn entity_to_contract(entity: UserEntity) -> anyhow::Result<User> {
    let role: UserRole = entity
        .role
        .parse()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("user {} has an invalid role", entity.id))?;

    Ok(User {
        id: entity.id,
        name: entity.name,
        email: entity.email,
        phone: entity.phone,
        role,
        zone: entity.zone,
        availability: entity.availability,
        preferred_operator_id: entity.preferred_operator_id,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    })
}
