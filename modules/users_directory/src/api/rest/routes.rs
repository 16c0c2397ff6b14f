use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/users", get(handlers::list_users))
        .route("/users", post(handlers::create_user))
        .route("/users/operators", get(handlers::list_operators))
        .route("/users/{id}", get(handlers::get_user))
        .route("/users/{id}", put(handlers::update_user))
        .layer(Extension(service))
}
