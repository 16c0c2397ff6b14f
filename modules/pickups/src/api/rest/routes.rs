use axum::{
    routing::{get, patch, post},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/pickup-requests", get(handlers::list_requests))
        .route("/pickup-requests", post(handlers::create_request))
        .route("/pickup-requests/{id}", get(handlers::get_request))
        .route("/pickup-requests/{id}/status", patch(handlers::update_status))
        .layer(Extension(service))
}
