use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::PROXY_FAILURE_MESSAGE;

/// Query parameters for listing regencies of a province
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RegencyQuery {
    /// Province id
    #[param(example = "32")]
    pub city: Option<String>,
}

/// Query parameters for listing districts of a regency
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DistrictQuery {
    /// Regency id
    #[param(example = "3273")]
    pub districts: Option<String>,
}

/// Query parameters for listing villages of a district
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VillageQuery {
    /// District id
    #[param(example = "3273010")]
    pub villages: Option<String>,
}

/// Body returned when the upstream call fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProxyErrorDto {
    pub message: String,
}

impl Default for ProxyErrorDto {
    fn default() -> Self {
        Self {
            message: PROXY_FAILURE_MESSAGE.to_string(),
        }
    }
}
