use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The fixed set of fields of a resident record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ResidentField {
    Name,
    NationalId,
    FamilyCardId,
    Age,
    Gender,
    ProvinceId,
    RegencyId,
    DistrictId,
    VillageId,
    Address,
    Rt,
    Rw,
    IncomeBefore,
    IncomeAfter,
    Reason,
}

impl ResidentField {
    /// Form order
    pub const ALL: [ResidentField; 15] = [
        ResidentField::Name,
        ResidentField::NationalId,
        ResidentField::FamilyCardId,
        ResidentField::Age,
        ResidentField::Gender,
        ResidentField::ProvinceId,
        ResidentField::RegencyId,
        ResidentField::DistrictId,
        ResidentField::VillageId,
        ResidentField::Address,
        ResidentField::Rt,
        ResidentField::Rw,
        ResidentField::IncomeBefore,
        ResidentField::IncomeAfter,
        ResidentField::Reason,
    ];

    /// Fields kept out of the resident table; still editable in the form
    pub const HIDDEN_IN_TABLE: [ResidentField; 6] = [
        ResidentField::IncomeBefore,
        ResidentField::IncomeAfter,
        ResidentField::Rt,
        ResidentField::Rw,
        ResidentField::Reason,
        ResidentField::FamilyCardId,
    ];

    pub fn is_listed(self) -> bool {
        !Self::HIDDEN_IN_TABLE.contains(&self)
    }

    /// Columns of the resident table, in form order
    pub fn table_columns() -> Vec<ResidentField> {
        Self::ALL.into_iter().filter(|f| f.is_listed()).collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            ResidentField::Name => "Nama",
            ResidentField::NationalId => "NIK",
            ResidentField::FamilyCardId => "Nomor Kartu Keluarga",
            ResidentField::Age => "Umur",
            ResidentField::Gender => "Jenis Kelamin",
            ResidentField::ProvinceId => "Provinsi",
            ResidentField::RegencyId => "Kab/Kota",
            ResidentField::DistrictId => "Kecamatan",
            ResidentField::VillageId => "Kelurahan",
            ResidentField::Address => "Alamat",
            ResidentField::Rt => "RT",
            ResidentField::Rw => "RW",
            ResidentField::IncomeBefore => "Pendapatan sebelum Pandemi",
            ResidentField::IncomeAfter => "Pendapatan setelah Pandemi",
            ResidentField::Reason => "Alasan",
        }
    }

    /// Struct field name, as reported in validation errors
    pub fn key(self) -> &'static str {
        match self {
            ResidentField::Name => "name",
            ResidentField::NationalId => "national_id",
            ResidentField::FamilyCardId => "family_card_id",
            ResidentField::Age => "age",
            ResidentField::Gender => "gender",
            ResidentField::ProvinceId => "province_id",
            ResidentField::RegencyId => "regency_id",
            ResidentField::DistrictId => "district_id",
            ResidentField::VillageId => "village_id",
            ResidentField::Address => "address",
            ResidentField::Rt => "rt",
            ResidentField::Rw => "rw",
            ResidentField::IncomeBefore => "income_before",
            ResidentField::IncomeAfter => "income_after",
            ResidentField::Reason => "reason",
        }
    }

    /// Accepts both the struct name and its camelCase wire name
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key || f.key().replace('_', "").eq_ignore_ascii_case(key))
    }
}
