use axum::{extract::Query, response::Json, Extension};
use std::sync::Arc;
use tracing::{debug, error};

use crate::api::rest::dto::{ActivityEntryDto, ActivityListDto, ListActivityQuery};
use crate::api::rest::error::{map_domain_error, ApiError};
use crate::domain::service::Service;

/// List activity entries (admin view), newest first
pub async fn list_activity(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListActivityQuery>,
) -> Result<Json<ActivityListDto>, ApiError> {
    debug!("Listing activity entries with query: {:?}", query);

    match svc.list(query.user_id, query.limit, query.offset).await {
        Ok(entries) => {
            let entries: Vec<ActivityEntryDto> = entries.into_iter().map(Into::into).collect();
            Ok(Json(ActivityListDto {
                total: entries.len(),
                limit: query.limit.unwrap_or(50),
                offset: query.offset.unwrap_or(0),
                entries,
            }))
        }
        Err(e) => {
            error!("Failed to list activity entries: {}", e);
            Err(map_domain_error(&e))
        }
    }
}
