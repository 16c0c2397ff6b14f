use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    Extension,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use users_directory::contract::model::UserRole;

use crate::api::rest::dto::{
    CreatePickupRequestReq, ListRequestsQuery, PickupRequestDto, PickupRequestListDto,
    UpdateStatusReq,
};
use crate::api::rest::error::{map_domain_error, ApiError};
use crate::contract::model::{PickupStatus, RequestScope};
use crate::domain::service::Service;

/// Create a pickup request
pub async fn create_request(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreatePickupRequestReq>,
) -> Result<(StatusCode, Json<PickupRequestDto>), ApiError> {
    info!("Creating pickup request for actor {}", req.actor_id);

    let actor_id = req.actor_id;
    let data = req.into_new_request().map_err(ApiError::unprocessable)?;

    match svc.create_request(actor_id, data).await {
        Ok(request) => Ok((StatusCode::CREATED, Json(PickupRequestDto::from(request)))),
        Err(e) => {
            error!("Failed to create pickup request: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Drive one status transition
pub async fn update_status(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusReq>,
) -> Result<Json<PickupRequestDto>, ApiError> {
    let status: PickupStatus = req.status.parse().map_err(ApiError::unprocessable)?;

    match svc.update_status(id, req.actor_id, status).await {
        Ok(request) => Ok(Json(PickupRequestDto::from(request))),
        Err(e) => {
            error!("Failed to update status of {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Get a specific pickup request by ID
pub async fn get_request(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PickupRequestDto>, ApiError> {
    match svc.get_request(id).await {
        Ok(request) => Ok(Json(PickupRequestDto::from(request))),
        Err(e) => {
            error!("Failed to get pickup request {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Role-scoped request listing
pub async fn list_requests(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListRequestsQuery>,
) -> Result<Json<PickupRequestListDto>, ApiError> {
    let scope = scope_from_query(&query)?;

    match svc.list_requests(scope, query.limit, query.offset).await {
        Ok(requests) => {
            let requests: Vec<PickupRequestDto> = requests.into_iter().map(Into::into).collect();
            Ok(Json(PickupRequestListDto {
                total: requests.len(),
                limit: query.limit.unwrap_or(50),
                offset: query.offset.unwrap_or(0),
                requests,
            }))
        }
        Err(e) => {
            error!("Failed to list pickup requests: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Residents see their own requests, operators their assigned jobs,
/// admins (or callers with no actor) everything.
fn scope_from_query(query: &ListRequestsQuery) -> Result<RequestScope, ApiError> {
    let role = match query.role.as_deref() {
        Some(token) => Some(
            token
                .parse::<UserRole>()
                .map_err(ApiError::unprocessable)?,
        ),
        None => None,
    };

    Ok(match (query.actor_id, role) {
        (Some(actor), Some(UserRole::Resident)) => RequestScope::Resident(actor),
        (Some(actor), Some(UserRole::PspOperator)) => RequestScope::Operator(actor),
        _ => RequestScope::All,
    })
}
