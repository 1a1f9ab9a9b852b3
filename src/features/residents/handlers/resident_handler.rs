use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::census_form::TableView;
use crate::features::residents::dtos::{ResidentResponseDto, ResidentTableDto};
use crate::features::residents::models::ResidentRecord;
use crate::features::residents::services::ResidentService;
use crate::shared::constants::{NOTICE_CREATE_SUCCESS, NOTICE_UPDATE_SUCCESS};
use crate::shared::types::{ApiResponse, Meta};

/// List residents as a table
///
/// Hidden columns (incomes, RT/RW, reason, family card) are left out.
#[utoipa::path(
    get,
    path = "/api/residents",
    responses(
        (status = 200, description = "Resident table", body = ApiResponse<ResidentTableDto>),
    ),
    tag = "residents"
)]
pub async fn list_residents(
    State(service): State<Arc<ResidentService>>,
) -> Result<Json<ApiResponse<ResidentTableDto>>> {
    let table = TableView::new(service.list().await);
    let total = table.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(ResidentTableDto::from(&table)),
        None,
        Some(Meta { total }),
    )))
}

/// Get a resident with every field
#[utoipa::path(
    get,
    path = "/api/residents/{id}",
    params(
        ("id" = Uuid, Path, description = "Resident id")
    ),
    responses(
        (status = 200, description = "Resident found", body = ApiResponse<ResidentResponseDto>),
        (status = 404, description = "Resident not found")
    ),
    tag = "residents"
)]
pub async fn get_resident(
    State(service): State<Arc<ResidentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ResidentResponseDto>>> {
    let entry = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(entry.into()), None, None)))
}

/// Add a resident
#[utoipa::path(
    post,
    path = "/api/residents",
    request_body = ResidentRecord,
    responses(
        (status = 201, description = "Resident created", body = ApiResponse<ResidentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Save rejected by the store")
    ),
    tag = "residents"
)]
pub async fn create_resident(
    State(service): State<Arc<ResidentService>>,
    AppJson(record): AppJson<ResidentRecord>,
) -> Result<(StatusCode, Json<ApiResponse<ResidentResponseDto>>)> {
    let entry = service.create(record).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(entry.into()),
            Some(NOTICE_CREATE_SUCCESS.to_string()),
            None,
        )),
    ))
}

/// Replace a resident's record
#[utoipa::path(
    put,
    path = "/api/residents/{id}",
    params(
        ("id" = Uuid, Path, description = "Resident id")
    ),
    request_body = ResidentRecord,
    responses(
        (status = 200, description = "Resident updated", body = ApiResponse<ResidentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Resident not found"),
        (status = 502, description = "Save rejected by the store")
    ),
    tag = "residents"
)]
pub async fn update_resident(
    State(service): State<Arc<ResidentService>>,
    Path(id): Path<Uuid>,
    AppJson(record): AppJson<ResidentRecord>,
) -> Result<Json<ApiResponse<ResidentResponseDto>>> {
    let entry = service.update(id, record).await?;
    Ok(Json(ApiResponse::success(
        Some(entry.into()),
        Some(NOTICE_UPDATE_SUCCESS.to_string()),
        None,
    )))
}
