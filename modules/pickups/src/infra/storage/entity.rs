use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pickup_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Display label, e.g. "General Household".
    pub waste_type: String,
    pub priority: String,
    pub scheduled_date: NaiveDate,
    /// Canonical status token, the compare-and-swap column.
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
