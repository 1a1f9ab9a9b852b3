use std::sync::Arc;

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::RegionLevel;
use crate::features::regions::services::RegionSource;

/// Pass-through access to the upstream region listings
pub struct RegionService {
    source: Arc<dyn RegionSource>,
}

impl RegionService {
    pub fn new(source: Arc<dyn RegionSource>) -> Self {
        Self { source }
    }

    /// List all provinces
    pub async fn list_provinces(&self) -> Result<Value> {
        self.source.fetch_raw(RegionLevel::Province, None).await
    }

    /// List the children of `parent_id` at `level`.
    ///
    /// A missing or blank parent id fails like an upstream miss would.
    pub async fn list_children(&self, level: RegionLevel, parent_id: Option<&str>) -> Result<Value> {
        let parent_id = parent_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::BadRequest(format!("Parent id is required to list {}", level))
            })?;

        self.source.fetch_raw(level, Some(parent_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::FakeRegionSource;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_children_rejects_blank_parent() {
        let source = Arc::new(FakeRegionSource::new());
        let service = RegionService::new(source.clone());

        let result = service.list_children(RegionLevel::Village, Some("  ")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let result = service.list_children(RegionLevel::Village, None).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_children_passes_through() {
        let source = Arc::new(
            FakeRegionSource::new().with_listing(
                RegionLevel::Regency,
                Some("32"),
                json!([{ "id": "3273", "province_id": "32", "name": "KOTA BANDUNG" }]),
            ),
        );
        let service = RegionService::new(source.clone());

        let value = service
            .list_children(RegionLevel::Regency, Some("32"))
            .await
            .unwrap();
        assert_eq!(value[0]["province_id"], "32");
        assert_eq!(
            source.calls(),
            vec![(RegionLevel::Regency, Some("32".to_string()))]
        );
    }
}
