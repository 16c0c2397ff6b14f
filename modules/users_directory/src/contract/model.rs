use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Zones of the Ibadan pilot deployment. Zones stay free-form strings; this
/// list is a hint for UIs and the seeder, not a validation whitelist.
pub const PILOT_ZONES: &[&str] = &["Bodija", "Akobo", "Challenge", "Dugbe", "Moniya", "Apata"];

/// Actor roles recognized by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Resident,
    /// Private Sector Partner - a waste-collection operator account.
    PspOperator,
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resident => write!(f, "RESIDENT"),
            Self::PspOperator => write!(f, "PSP_OPERATOR"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESIDENT" => Ok(Self::Resident),
            "PSP_OPERATOR" => Ok(Self::PspOperator),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// Pure user model for inter-module communication (no serde)
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    /// Coarse geographic district used for operator-resident matching.
    pub zone: String,
    /// Operators only; `None` means available.
    pub availability: Option<bool>,
    /// Residents may pin a preferred collection operator.
    pub preferred_operator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Availability defaults to true when unset.
    pub fn is_available(&self) -> bool {
        self.availability != Some(false)
    }
}

/// Data for registering a new user
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub zone: String,
    pub availability: Option<bool>,
    pub preferred_operator_id: Option<Uuid>,
}

/// Partial update data for a user profile
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub zone: Option<String>,
    pub availability: Option<bool>,
    pub preferred_operator_id: Option<Option<Uuid>>,
}
