use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::residents::models::ResidentField;
use crate::shared::validation::{NOT_BLANK_REGEX, NUMERIC_REGEX};

/// Jenis kelamin, as offered by the census form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "Laki-laki")]
    Male,
    #[serde(rename = "Perempuan")]
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Laki-laki",
            Gender::Female => "Perempuan",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Laki-laki" => Some(Gender::Male),
            "Perempuan" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// A complete census record for one resident.
///
/// Region fields hold the upstream region ids, not names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResidentRecord {
    #[validate(regex(path = *NOT_BLANK_REGEX, message = "Nama wajib diisi"))]
    pub name: String,

    /// NIK
    #[validate(regex(path = *NUMERIC_REGEX, message = "NIK harus berupa angka"))]
    pub national_id: String,

    /// Nomor Kartu Keluarga
    #[validate(regex(
        path = *NUMERIC_REGEX,
        message = "Nomor Kartu Keluarga harus berupa angka"
    ))]
    pub family_card_id: String,

    #[validate(range(min = 25, message = "Umur harus lebih dari atau sama dengan 25"))]
    pub age: u32,

    pub gender: Gender,

    #[validate(regex(path = *NOT_BLANK_REGEX, message = "Provinsi wajib diisi"))]
    pub province_id: String,

    #[validate(regex(path = *NOT_BLANK_REGEX, message = "Kab/Kota wajib diisi"))]
    pub regency_id: String,

    #[validate(regex(path = *NOT_BLANK_REGEX, message = "Kecamatan wajib diisi"))]
    pub district_id: String,

    #[validate(regex(path = *NOT_BLANK_REGEX, message = "Kelurahan wajib diisi"))]
    pub village_id: String,

    #[validate(
        regex(path = *NOT_BLANK_REGEX, message = "Alamat wajib diisi"),
        length(max = 255, message = "Alamat tidak boleh lebih dari 255 karakter")
    )]
    pub address: String,

    /// Rukun Tetangga
    #[validate(regex(path = *NOT_BLANK_REGEX, message = "RT wajib diisi"))]
    pub rt: String,

    /// Rukun Warga
    #[validate(regex(path = *NOT_BLANK_REGEX, message = "RW wajib diisi"))]
    pub rw: String,

    /// Monthly income before the pandemic, in rupiah
    pub income_before: u64,

    /// Monthly income after the pandemic, in rupiah
    pub income_after: u64,

    #[validate(regex(path = *NOT_BLANK_REGEX, message = "Alasan wajib diisi"))]
    pub reason: String,
}

impl ResidentRecord {
    /// Display text of one field, as shown in a table cell or a form input
    pub fn display(&self, field: ResidentField) -> String {
        match field {
            ResidentField::Name => self.name.clone(),
            ResidentField::NationalId => self.national_id.clone(),
            ResidentField::FamilyCardId => self.family_card_id.clone(),
            ResidentField::Age => self.age.to_string(),
            ResidentField::Gender => self.gender.as_str().to_string(),
            ResidentField::ProvinceId => self.province_id.clone(),
            ResidentField::RegencyId => self.regency_id.clone(),
            ResidentField::DistrictId => self.district_id.clone(),
            ResidentField::VillageId => self.village_id.clone(),
            ResidentField::Address => self.address.clone(),
            ResidentField::Rt => self.rt.clone(),
            ResidentField::Rw => self.rw.clone(),
            ResidentField::IncomeBefore => self.income_before.to_string(),
            ResidentField::IncomeAfter => self.income_after.to_string(),
            ResidentField::Reason => self.reason.clone(),
        }
    }
}

/// A stored record with its identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidentEntry {
    pub id: Uuid,
    pub record: ResidentRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResidentEntry {
    pub fn new(record: ResidentRecord) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            record,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_record;

    #[test]
    fn test_sample_record_is_valid() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn test_age_boundary() {
        let mut record = sample_record();
        record.age = 24;
        assert!(record.validate().is_err());
        record.age = 25;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_address_counts_characters() {
        let mut record = sample_record();
        // multi-byte characters must not be counted as bytes
        record.address = "é".repeat(255);
        assert!(record.validate().is_ok());
        record.address.push('x');
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_numeric_ids() {
        let mut record = sample_record();
        record.national_id = "32730A".to_string();
        let errors = record.validate().unwrap_err();
        assert!(errors.to_string().contains("NIK harus berupa angka"));

        let mut record = sample_record();
        record.family_card_id = String::new();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_blank_text_fields_are_rejected() {
        let mut record = sample_record();
        record.name = "   ".to_string();
        record.address = " ".to_string();
        record.reason = "\t".to_string();
        record.village_id = "  ".to_string();

        let errors = record.validate().unwrap_err().to_string();
        assert!(errors.contains("Nama wajib diisi"));
        assert!(errors.contains("Alamat wajib diisi"));
        assert!(errors.contains("Alasan wajib diisi"));
        assert!(errors.contains("Kelurahan wajib diisi"));
    }

    #[test]
    fn test_gender_serde_uses_form_labels() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"Perempuan\"");
        assert_eq!(Gender::parse("Laki-laki"), Some(Gender::Male));
        assert_eq!(Gender::parse("laki-laki"), None);
    }

    #[test]
    fn test_record_json_is_camel_case() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert!(value.get("nationalId").is_some());
        assert!(value.get("incomeBefore").is_some());
        assert_eq!(value["gender"], "Perempuan");
    }
}
