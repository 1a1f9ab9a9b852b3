use utoipa::{Modify, OpenApi};

use crate::features::regions::{
    dtos as regions_dtos, handlers as regions_handlers, models as regions_models,
};
use crate::features::residents::{
    dtos as residents_dtos, handlers as residents_handlers, models as residents_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions (upstream proxy)
        regions_handlers::list_provinces,
        regions_handlers::list_regencies,
        regions_handlers::list_districts,
        regions_handlers::list_villages,
        // Residents
        residents_handlers::list_residents,
        residents_handlers::get_resident,
        residents_handlers::create_resident,
        residents_handlers::update_resident,
    ),
    components(
        schemas(
            Meta,
            // Regions
            regions_dtos::ProxyErrorDto,
            regions_models::RegionOption,
            regions_models::RegionLevel,
            // Residents
            residents_models::Gender,
            residents_models::ResidentField,
            residents_models::ResidentRecord,
            residents_dtos::ResidentResponseDto,
            residents_dtos::TableColumnDto,
            residents_dtos::TableRowDto,
            residents_dtos::ResidentTableDto,
            ApiResponse<residents_dtos::ResidentResponseDto>,
            ApiResponse<residents_dtos::ResidentTableDto>,
        )
    ),
    tags(
        (name = "regions", description = "Indonesian administrative regions, relayed from the public wilayah API"),
        (name = "residents", description = "Resident census records"),
    ),
    info(
        title = "Sensus Penduduk API",
        version = "0.1.0",
        description = "API documentation for the resident census service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
