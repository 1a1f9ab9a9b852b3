use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::residents::handlers;
use crate::features::residents::services::ResidentService;

/// Create routes for the residents feature
pub fn routes(service: Arc<ResidentService>) -> Router {
    Router::new()
        .route(
            "/api/residents",
            get(handlers::list_residents).post(handlers::create_resident),
        )
        .route(
            "/api/residents/{id}",
            get(handlers::get_resident).put(handlers::update_resident),
        )
        .with_state(service)
}
