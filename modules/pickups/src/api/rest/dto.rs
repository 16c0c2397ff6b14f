use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::{Coordinates, NewPickupRequest, PickupRequest};

/// REST DTO for coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinatesDto {
    pub lat: f64,
    pub lng: f64,
}

/// REST DTO for pickup request representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupRequestDto {
    pub id: Uuid,
    pub resident_id: Uuid,
    pub resident_name: String,
    pub operator_id: Option<Uuid>,
    pub operator_name: Option<String>,
    pub zone: String,
    pub house_number: String,
    pub street_name: String,
    pub landmark: String,
    pub contact_phone: String,
    pub coordinates: Option<CoordinatesDto>,
    pub waste_type: String,
    pub priority: String,
    pub scheduled_date: NaiveDate,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// REST DTO for creating a pickup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePickupRequestReq {
    /// Trusted actor identity supplied by the session layer.
    pub actor_id: Uuid,
    /// Only meaningful for manual entries by operators/admins.
    pub resident_id: Option<Uuid>,
    pub waste_type: Option<String>,
    pub priority: Option<String>,
    pub zone: Option<String>,
    pub house_number: Option<String>,
    pub street_name: Option<String>,
    pub landmark: Option<String>,
    pub contact_phone: String,
    pub coordinates: Option<CoordinatesDto>,
    pub scheduled_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub preferred_operator_id: Option<Uuid>,
}

/// REST DTO for a status transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusReq {
    pub actor_id: Uuid,
    pub status: String,
}

/// REST DTO for pickup request list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupRequestListDto {
    pub requests: Vec<PickupRequestDto>,
    pub total: usize,
    pub limit: u64,
    pub offset: u64,
}

/// REST DTO for query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ListRequestsQuery {
    pub actor_id: Option<Uuid>,
    pub role: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

// Conversion implementations between REST DTOs and contract models

impl From<Coordinates> for CoordinatesDto {
    fn from(c: Coordinates) -> Self {
        Self { lat: c.lat, lng: c.lng }
    }
}

impl From<CoordinatesDto> for Coordinates {
    fn from(c: CoordinatesDto) -> Self {
        Self { lat: c.lat, lng: c.lng }
    }
}

impl From<PickupRequest> for PickupRequestDto {
    fn from(r: PickupRequest) -> Self {
        Self {
            id: r.id,
            resident_id: r.resident_id,
            resident_name: r.resident_name,
            operator_id: r.operator_id,
            operator_name: r.operator_name,
            zone: r.zone,
            house_number: r.house_number,
            street_name: r.street_name,
            landmark: r.landmark,
            contact_phone: r.contact_phone,
            coordinates: r.coordinates.map(Into::into),
            waste_type: r.waste_type.to_string(),
            priority: r.priority.to_string(),
            scheduled_date: r.scheduled_date,
            status: r.status.to_string(),
            notes: r.notes,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl CreatePickupRequestReq {
    /// Parse enum tokens; the caller maps the error to a 422.
    pub fn into_new_request(self) -> Result<NewPickupRequest, String> {
        let waste_type = self.waste_type.as_deref().map(str::parse).transpose()?;
        let priority = self.priority.as_deref().map(str::parse).transpose()?;

        Ok(NewPickupRequest {
            resident_id: self.resident_id,
            zone: self.zone,
            house_number: self.house_number.unwrap_or_default(),
            street_name: self.street_name.unwrap_or_default(),
            landmark: self.landmark.unwrap_or_default(),
            contact_phone: self.contact_phone,
            coordinates: self.coordinates.map(Into::into),
            waste_type,
            priority,
            scheduled_date: self.scheduled_date,
            notes: self.notes,
            preferred_operator_id: self.preferred_operator_id,
        })
    }
}
