use axum::{
    routing::{delete, get},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::broadcast::NotificationBroadcaster;
use crate::domain::service::Service;

pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    broadcaster: NotificationBroadcaster,
) -> Router {
    router
        .route("/notifications/events", get(handlers::notification_events))
        .route("/notifications/{user_id}", get(handlers::list_notifications))
        .route(
            "/notifications/{user_id}",
            delete(handlers::clear_notifications),
        )
        .layer(Extension(service))
        .layer(Extension(broadcaster))
}
