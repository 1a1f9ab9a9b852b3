use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use fake::faker::address::en::StreetName;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

use crate::core::error::{AppError, Result};
use crate::features::regions::models::RegionLevel;
use crate::features::regions::services::RegionSource;
use crate::features::residents::models::{Gender, ResidentRecord};

type ListingKey = (RegionLevel, Option<String>);

/// In-memory stand-in for the upstream region API.
///
/// Unknown parents fail the way the upstream 404 does.
#[derive(Default)]
pub struct FakeRegionSource {
    listings: HashMap<ListingKey, Value>,
    failing: HashSet<RegionLevel>,
    calls: Mutex<Vec<ListingKey>>,
}

impl FakeRegionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, level: RegionLevel, parent_id: Option<&str>, listing: Value) -> Self {
        self.listings
            .insert((level, parent_id.map(str::to_string)), listing);
        self
    }

    pub fn with_options(self, level: RegionLevel, parent_id: Option<&str>, options: &[(&str, &str)]) -> Self {
        let listing = options
            .iter()
            .map(|(id, name)| json!({ "id": id, "name": name }))
            .collect::<Vec<_>>();
        self.with_listing(level, parent_id, Value::Array(listing))
    }

    pub fn failing(mut self, level: RegionLevel) -> Self {
        self.failing.insert(level);
        self
    }

    /// Jawa Barat > Kota Bandung > Sukasari > Sarijadi, plus a second province
    pub fn bandung() -> Self {
        Self::new()
            .with_options(
                RegionLevel::Province,
                None,
                &[("31", "DKI JAKARTA"), ("32", "JAWA BARAT")],
            )
            .with_options(
                RegionLevel::Regency,
                Some("31"),
                &[("3171", "KOTA JAKARTA SELATAN")],
            )
            .with_options(
                RegionLevel::Regency,
                Some("32"),
                &[("3204", "KABUPATEN BANDUNG"), ("3273", "KOTA BANDUNG")],
            )
            .with_options(
                RegionLevel::District,
                Some("3273"),
                &[("3273010", "SUKASARI"), ("3273020", "COBLONG")],
            )
            .with_options(
                RegionLevel::Village,
                Some("3273010"),
                &[("3273010001", "SARIJADI"), ("3273010002", "SUKARASA")],
            )
    }

    pub fn calls(&self) -> Vec<ListingKey> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegionSource for FakeRegionSource {
    async fn fetch_raw(&self, level: RegionLevel, parent_id: Option<&str>) -> Result<Value> {
        let key = (level, parent_id.map(str::to_string));
        self.calls.lock().unwrap().push(key.clone());

        if self.failing.contains(&level) {
            return Err(AppError::ExternalServiceError(
                "simulated outage".to_string(),
            ));
        }

        self.listings
            .get(&key)
            .cloned()
            .ok_or_else(|| AppError::ExternalServiceError("404 Not Found".to_string()))
    }
}

/// A valid record located in [`FakeRegionSource::bandung`]
pub fn sample_record() -> ResidentRecord {
    ResidentRecord {
        name: "Rina Kartika".to_string(),
        national_id: "3273015203920001".to_string(),
        family_card_id: "3273011001150003".to_string(),
        age: 32,
        gender: Gender::Female,
        province_id: "32".to_string(),
        regency_id: "3273".to_string(),
        district_id: "3273010".to_string(),
        village_id: "3273010001".to_string(),
        address: "Jl. Sarijadi Raya No. 21".to_string(),
        rt: "002".to_string(),
        rw: "004".to_string(),
        income_before: 7_500_000,
        income_after: 3_250_000,
        reason: "Dirumahkan sementara".to_string(),
    }
}

/// A random valid record in the same region as [`sample_record`]
pub fn fake_record() -> ResidentRecord {
    let digits = || (1_000_000_000_000_000u64..9_999_999_999_999_999u64).fake::<u64>().to_string();
    ResidentRecord {
        name: Name().fake(),
        national_id: digits(),
        family_card_id: digits(),
        age: (25..90u32).fake(),
        gender: if (0..2u8).fake::<u8>() == 0 {
            Gender::Male
        } else {
            Gender::Female
        },
        address: StreetName().fake(),
        rt: format!("{:03}", (1..20u32).fake::<u32>()),
        rw: format!("{:03}", (1..15u32).fake::<u32>()),
        income_before: (1_000_000..20_000_000u64).fake(),
        income_after: (0..20_000_000u64).fake(),
        reason: "Pendapatan menurun".to_string(),
        ..sample_record()
    }
}
