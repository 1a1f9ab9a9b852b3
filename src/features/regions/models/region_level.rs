use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One tier of the Indonesian administrative hierarchy, ordered from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RegionLevel {
    /// Provinsi
    Province,
    /// Kabupaten/Kota
    Regency,
    /// Kecamatan
    District,
    /// Kelurahan/Desa
    Village,
}

impl RegionLevel {
    pub const ALL: [RegionLevel; 4] = [
        RegionLevel::Province,
        RegionLevel::Regency,
        RegionLevel::District,
        RegionLevel::Village,
    ];

    pub fn index(self) -> usize {
        match self {
            RegionLevel::Province => 0,
            RegionLevel::Regency => 1,
            RegionLevel::District => 2,
            RegionLevel::Village => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The level whose options are keyed by a selection at this level
    pub fn child(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn parent(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// All levels strictly below this one
    pub fn descendants(self) -> impl Iterator<Item = RegionLevel> {
        Self::ALL.into_iter().skip(self.index() + 1)
    }

    /// Path segment of the upstream listing for this level
    pub fn upstream_segment(self) -> &'static str {
        match self {
            RegionLevel::Province => "provinces",
            RegionLevel::Regency => "regencies",
            RegionLevel::District => "districts",
            RegionLevel::Village => "villages",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegionLevel::Province => "Provinsi",
            RegionLevel::Regency => "Kab/Kota",
            RegionLevel::District => "Kecamatan",
            RegionLevel::Village => "Kelurahan",
        }
    }
}

impl std::fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.upstream_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order_and_navigation() {
        assert_eq!(RegionLevel::Province.child(), Some(RegionLevel::Regency));
        assert_eq!(RegionLevel::District.child(), Some(RegionLevel::Village));
        assert_eq!(RegionLevel::Village.child(), None);
        assert_eq!(RegionLevel::Province.parent(), None);
        assert_eq!(RegionLevel::Village.parent(), Some(RegionLevel::District));
        assert!(RegionLevel::Province < RegionLevel::Village);
    }

    #[test]
    fn test_descendants() {
        let below: Vec<_> = RegionLevel::Regency.descendants().collect();
        assert_eq!(below, vec![RegionLevel::District, RegionLevel::Village]);
        assert_eq!(RegionLevel::Village.descendants().count(), 0);
    }
}
