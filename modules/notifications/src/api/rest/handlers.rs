use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::Path,
    response::sse::{Event, KeepAlive, Sse},
    response::Json,
    Extension,
};
use futures::{Stream, StreamExt};
use tracing::error;
use uuid::Uuid;

use crate::api::rest::dto::{ClearedDto, NotificationDto, NotificationListDto};
use crate::api::rest::error::{map_domain_error, ApiError};
use crate::broadcast::NotificationBroadcaster;
use crate::domain::service::Service;

/// All notifications for one recipient, newest first
pub async fn list_notifications(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<NotificationListDto>, ApiError> {
    match svc.list_for_user(user_id).await {
        Ok(records) => {
            let notifications: Vec<NotificationDto> =
                records.into_iter().map(Into::into).collect();
            Ok(Json(NotificationListDto {
                total: notifications.len(),
                notifications,
            }))
        }
        Err(e) => {
            error!("Failed to list notifications for {}: {}", user_id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Clear all notifications for one recipient
pub async fn clear_notifications(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ClearedDto>, ApiError> {
    match svc.clear_for_user(user_id).await {
        Ok(cleared) => Ok(Json(ClearedDto { cleared })),
        Err(e) => {
            error!("Failed to clear notifications for {}: {}", user_id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Live stream of emitted notifications as Server-Sent Events
pub async fn notification_events(
    Extension(broadcaster): Extension<NotificationBroadcaster>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = broadcaster.subscribe_stream().map(|record| {
        let dto = NotificationDto::from(record);
        let event = Event::default().json_data(&dto).unwrap_or_else(|_| {
            // Fallback to a tiny text marker instead of breaking the stream.
            Event::default().data("serialization_error")
        });
        Ok(event)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
