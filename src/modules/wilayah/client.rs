//! HTTP client for the public api-wilayah-indonesia dataset
//!
//! Listings are static JSON files:
//! `provinces.json`, `regencies/{province_id}.json`,
//! `districts/{regency_id}.json`, `villages/{district_id}.json`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::WilayahConfig;
use crate::core::error::{AppError, Result};
use crate::features::regions::models::RegionLevel;
use crate::features::regions::services::RegionSource;

pub struct WilayahClient {
    client: Client,
    base_url: String,
}

impl WilayahClient {
    pub fn new(config: &WilayahConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent("SensusPenduduk/0.1 (resident-census)")
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upstream URL of the listing for `level` under `parent_id`
    pub fn listing_url(&self, level: RegionLevel, parent_id: Option<&str>) -> Result<String> {
        match (level, parent_id) {
            (RegionLevel::Province, _) => Ok(format!("{}/provinces.json", self.base_url)),
            (_, Some(id)) if !id.is_empty() => Ok(format!(
                "{}/{}/{}.json",
                self.base_url,
                level.upstream_segment(),
                urlencoding::encode(id)
            )),
            _ => Err(AppError::BadRequest(format!(
                "Parent id is required to list {}",
                level
            ))),
        }
    }
}

#[async_trait]
impl RegionSource for WilayahClient {
    async fn fetch_raw(&self, level: RegionLevel, parent_id: Option<&str>) -> Result<Value> {
        let url = self.listing_url(level, parent_id)?;
        debug!("Fetching {} listing: {}", level, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Wilayah request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Wilayah request failed: {}", e))
        })?;

        if !response.status().is_success() {
            warn!("Wilayah returned status {} for {}", response.status(), url);
            return Err(AppError::ExternalServiceError(format!(
                "Wilayah returned status {}",
                response.status()
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            warn!("Failed to parse wilayah response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse wilayah response: {}", e))
        })
    }
}
