use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{RegionLevel, RegionOption};

/// Anything that can list the regions of one level under a parent.
///
/// `parent_id` is `None` only for [`RegionLevel::Province`].
#[async_trait]
pub trait RegionSource: Send + Sync {
    /// Raw JSON listing exactly as the provider returned it
    async fn fetch_raw(&self, level: RegionLevel, parent_id: Option<&str>) -> Result<Value>;

    /// Typed listing, used by the selector chain
    async fn fetch_options(
        &self,
        level: RegionLevel,
        parent_id: Option<&str>,
    ) -> Result<Vec<RegionOption>> {
        let raw = self.fetch_raw(level, parent_id).await?;
        serde_json::from_value(raw).map_err(|e| {
            AppError::ExternalServiceError(format!("Malformed {} listing: {}", level, e))
        })
    }
}
