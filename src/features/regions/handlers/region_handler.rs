use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::core::error::AppError;
use crate::features::regions::dtos::{DistrictQuery, ProxyErrorDto, RegencyQuery, VillageQuery};
use crate::features::regions::models::RegionLevel;
use crate::features::regions::services::RegionService;

/// Any failure of a proxied listing, rendered as the fixed 500 envelope
pub struct ProxyFailure(AppError);

impl From<AppError> for ProxyFailure {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ProxyFailure {
    fn into_response(self) -> Response {
        tracing::warn!("Region proxy failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ProxyErrorDto::default()),
        )
            .into_response()
    }
}

type ProxyResult = std::result::Result<Json<Value>, ProxyFailure>;

/// List all provinces
#[utoipa::path(
    get,
    path = "/regions/provinces",
    responses(
        (status = 200, description = "Upstream province listing, relayed verbatim"),
        (status = 500, description = "Upstream failure", body = ProxyErrorDto)
    ),
    tag = "regions"
)]
pub async fn list_provinces(State(service): State<Arc<RegionService>>) -> ProxyResult {
    Ok(Json(service.list_provinces().await?))
}

/// List regencies in a province
#[utoipa::path(
    get,
    path = "/regions/regencies",
    params(RegencyQuery),
    responses(
        (status = 200, description = "Upstream regency listing, relayed verbatim"),
        (status = 500, description = "Upstream failure", body = ProxyErrorDto)
    ),
    tag = "regions"
)]
pub async fn list_regencies(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<RegencyQuery>,
) -> ProxyResult {
    let listing = service
        .list_children(RegionLevel::Regency, query.city.as_deref())
        .await?;
    Ok(Json(listing))
}

/// List districts in a regency
#[utoipa::path(
    get,
    path = "/regions/districts",
    params(DistrictQuery),
    responses(
        (status = 200, description = "Upstream district listing, relayed verbatim"),
        (status = 500, description = "Upstream failure", body = ProxyErrorDto)
    ),
    tag = "regions"
)]
pub async fn list_districts(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<DistrictQuery>,
) -> ProxyResult {
    let listing = service
        .list_children(RegionLevel::District, query.districts.as_deref())
        .await?;
    Ok(Json(listing))
}

/// List villages in a district
#[utoipa::path(
    get,
    path = "/regions/villages",
    params(VillageQuery),
    responses(
        (status = 200, description = "Upstream village listing, relayed verbatim"),
        (status = 500, description = "Upstream failure", body = ProxyErrorDto)
    ),
    tag = "regions"
)]
pub async fn list_villages(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<VillageQuery>,
) -> ProxyResult {
    let listing = service
        .list_children(RegionLevel::Village, query.villages.as_deref())
        .await?;
    Ok(Json(listing))
}
