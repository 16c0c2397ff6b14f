use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::{NewUser, User, UserPatch, UserRole};

/// REST DTO for user representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub zone: String,
    pub availability: Option<bool>,
    pub preferred_operator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// REST DTO for registering a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserReq {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub zone: String,
    pub availability: Option<bool>,
    pub preferred_operator_id: Option<Uuid>,
}

/// REST DTO for updating a user profile (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUserReq {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub zone: Option<String>,
    pub availability: Option<bool>,
    /// Absent leaves the preference untouched; clearing is not exposed here.
    pub preferred_operator_id: Option<Uuid>,
}

/// REST DTO for user list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
    pub total: usize,
    pub limit: u64,
    pub offset: u64,
}

/// REST DTO for query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
    pub zone: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// REST DTO for the operator pool query
#[derive(Debug, Clone, Deserialize)]
pub struct ListOperatorsQuery {
    pub zone: Option<String>,
}

// Conversion implementations between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role.to_string(),
            zone: user.zone,
            availability: user.availability,
            preferred_operator_id: user.preferred_operator_id,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl CreateUserReq {
    /// Parse the role token; the caller maps the error to a 422.
    pub fn into_new_user(self) -> Result<NewUser, String> {
        let role: UserRole = self.role.parse()?;
        Ok(NewUser {
            name: self.name,
            email: self.email,
            phone: self.phone,
            role,
            zone: self.zone,
            availability: self.availability,
            preferred_operator_id: self.preferred_operator_id,
        })
    }
}

impl From<UpdateUserReq> for UserPatch {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            zone: req.zone,
            availability: req.availability,
            preferred_operator_id: req.preferred_operator_id.map(Some),
        }
    }
}
