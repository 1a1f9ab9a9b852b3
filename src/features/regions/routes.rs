use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the region proxy
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/regions/provinces", get(handlers::list_provinces))
        .route("/regions/regencies", get(handlers::list_regencies))
        .route("/regions/districts", get(handlers::list_districts))
        .route("/regions/villages", get(handlers::list_villages))
        .with_state(service)
}
