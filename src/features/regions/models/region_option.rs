use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of an upstream region listing.
///
/// The upstream also sends the parent id (`province_id`, `regency_id`, ...);
/// only `id` and `name` are kept. Ids are opaque strings such as `"32"`,
/// `"3273"`, `"3273010"` or `"3273010001"` and are never parsed as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionOption {
    pub id: String,
    pub name: String,
}

impl RegionOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
