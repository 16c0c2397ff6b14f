use anyhow::Context;
use sea_orm::Set;

use crate::contract::model::{Coordinates, PickupRequest, PickupStatus, Priority, WasteType};
use crate::infra::storage::entity::{ActiveModel, Model as RequestEntity};

/// Convert a database entity to a contract model.
///
/// Fails only if stored enum tokens are unknown (schema drift).
pub fn entity_to_contract(entity: RequestEntity) -> anyhow::Result<PickupRequest> {
    let status: PickupStatus = entity
        .status
        .parse()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("request {} has an invalid status", entity.id))?;
    let waste_type: WasteType = entity
        .waste_type
        .parse()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("request {} has an invalid waste type", entity.id))?;
    let priority: Priority = entity
        .priority
        .parse()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("request {} has an invalid priority", entity.id))?;

    let coordinates = match (entity.lat, entity.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        _ => None,
    };

    Ok(PickupRequest {
        id: entity.id,
        resident_id: entity.resident_id,
        resident_name: entity.resident_name,
        operator_id: entity.operator_id,
        operator_name: entity.operator_name,
        zone: entity.zone,
        house_number: entity.house_number,
        street_name: entity.street_name,
        landmark: entity.landmark,
        contact_phone: entity.contact_phone,
        coordinates,
        waste_type,
        priority,
        scheduled_date: entity.scheduled_date,
        status,
        notes: entity.notes,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    })
}

/// Convert a contract model into an insertable active model.
pub fn contract_to_active_model(request: PickupRequest) -> ActiveModel {
    ActiveModel {
        id: Set(request.id),
        resident_id: Set(request.resident_id),
        resident_name: Set(request.resident_name),
        operator_id: Set(request.operator_id),
        operator_name: Set(request.operator_name),
        zone: Set(request.zone),
        house_number: Set(request.house_number),
        street_name: Set(request.street_name),
        landmark: Set(request.landmark),
        contact_phone: Set(request.contact_phone),
        lat: Set(request.coordinates.map(|c| c.lat)),
        lng: Set(request.coordinates.map(|c| c.lng)),
        waste_type: Set(request.waste_type.to_string()),
        priority: Set(request.priority.to_string()),
        scheduled_date: Set(request.scheduled_date),
        status: Set(request.status.to_string()),
        notes: Set(request.notes),
        created_at: Set(request.created_at),
        updated_at: Set(request.updated_at),
    }
}
