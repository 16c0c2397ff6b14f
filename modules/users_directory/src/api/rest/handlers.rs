use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    Extension,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::rest::dto::{
    CreateUserReq, ListOperatorsQuery, ListUsersQuery, UpdateUserReq, UserDto, UserListDto,
};
use crate::api::rest::error::{map_domain_error, ApiError};
use crate::contract::model::UserRole;
use crate::domain::service::Service;

/// List users with optional role/zone filters
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<UserListDto>, ApiError> {
    let role = match query.role.as_deref() {
        Some(token) => Some(
            token
                .parse::<UserRole>()
                .map_err(ApiError::unprocessable)?,
        ),
        None => None,
    };

    match svc
        .list_users(role, query.zone.clone(), query.limit, query.offset)
        .await
    {
        Ok(users) => {
            let users: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
            Ok(Json(UserListDto {
                total: users.len(),
                limit: query.limit.unwrap_or(50),
                offset: query.offset.unwrap_or(0),
                users,
            }))
        }
        Err(e) => {
            error!("Failed to list users: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// The PSP operator pool, optionally narrowed to one zone
pub async fn list_operators(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListOperatorsQuery>,
) -> Result<Json<UserListDto>, ApiError> {
    match svc.list_operators().await {
        Ok(operators) => {
            let users: Vec<UserDto> = operators
                .into_iter()
                .filter(|op| query.zone.as_deref().map_or(true, |z| op.zone == z))
                .map(UserDto::from)
                .collect();
            Ok(Json(UserListDto {
                total: users.len(),
                limit: 0,
                offset: 0,
                users,
            }))
        }
        Err(e) => {
            error!("Failed to list operators: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Get a specific user by ID
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDto>, ApiError> {
    match svc.get_user(id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to get user {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Register a new user
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateUserReq>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    info!("Registering user: {}", req.email);

    let new_user = req.into_new_user().map_err(ApiError::unprocessable)?;

    match svc.create_user(new_user).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(UserDto::from(user)))),
        Err(e) => {
            error!("Failed to create user: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Update a user profile
pub async fn update_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserReq>,
) -> Result<Json<UserDto>, ApiError> {
    match svc.update_user(id, req.into()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to update user {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}
