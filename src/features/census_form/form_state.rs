use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::features::census_form::notice::Notice;
use crate::features::residents::models::{Gender, ResidentField, ResidentRecord};
use crate::features::residents::services::ResidentStore;
use crate::shared::constants::{
    NOTICE_CREATE_FAILURE, NOTICE_CREATE_SUCCESS, NOTICE_UPDATE_FAILURE, NOTICE_UPDATE_SUCCESS,
};

pub type FieldErrors = BTreeMap<ResidentField, String>;

/// Raw form input, one text value per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentDraft {
    values: BTreeMap<ResidentField, String>,
}

impl Default for ResidentDraft {
    fn default() -> Self {
        Self {
            values: ResidentField::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        }
    }
}

impl From<&ResidentRecord> for ResidentDraft {
    fn from(record: &ResidentRecord) -> Self {
        Self {
            values: ResidentField::ALL
                .into_iter()
                .map(|field| (field, record.display(field)))
                .collect(),
        }
    }
}

impl ResidentDraft {
    pub fn get(&self, field: ResidentField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: ResidentField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Parse and validate the draft into a record, or report one message per
    /// offending field
    pub fn to_record(&self) -> Result<ResidentRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        for field in ResidentField::ALL {
            if self.get(field).trim().is_empty() {
                errors.insert(field, format!("{} wajib diisi", field.label()));
            }
        }

        let age = self.parse_number::<u32>(ResidentField::Age, &mut errors);
        let income_before = self.parse_number::<u64>(ResidentField::IncomeBefore, &mut errors);
        let income_after = self.parse_number::<u64>(ResidentField::IncomeAfter, &mut errors);
        let gender = Gender::parse(self.get(ResidentField::Gender));
        if gender.is_none() {
            errors
                .entry(ResidentField::Gender)
                .or_insert_with(|| "Jenis Kelamin tidak valid".to_string());
        }

        let (Some(age), Some(income_before), Some(income_after), Some(gender), true) =
            (age, income_before, income_after, gender, errors.is_empty())
        else {
            return Err(errors);
        };

        let text = |field| self.get(field).to_string();
        let record = ResidentRecord {
            name: text(ResidentField::Name),
            national_id: text(ResidentField::NationalId),
            family_card_id: text(ResidentField::FamilyCardId),
            age,
            gender,
            province_id: text(ResidentField::ProvinceId),
            regency_id: text(ResidentField::RegencyId),
            district_id: text(ResidentField::DistrictId),
            village_id: text(ResidentField::VillageId),
            address: text(ResidentField::Address),
            rt: text(ResidentField::Rt),
            rw: text(ResidentField::Rw),
            income_before,
            income_after,
            reason: text(ResidentField::Reason),
        };

        if let Err(validation) = record.validate() {
            for (key, field_errors) in validation.field_errors() {
                let Some(field) = ResidentField::from_key(&key) else {
                    continue;
                };
                let message = field_errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} tidak valid", field.label()));
                errors.insert(field, message);
            }
            return Err(errors);
        }

        Ok(record)
    }

    fn parse_number<T: std::str::FromStr>(
        &self,
        field: ResidentField,
        errors: &mut FieldErrors,
    ) -> Option<T> {
        let raw = self.get(field).trim();
        if raw.is_empty() {
            return None;
        }
        let parsed = raw.parse::<T>().ok();
        if parsed.is_none() {
            errors.insert(field, format!("{} harus berupa angka", field.label()));
        }
        parsed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(Uuid),
}

impl SubmitTarget {
    fn notices(self) -> (&'static str, &'static str) {
        match self {
            SubmitTarget::Create => (NOTICE_CREATE_SUCCESS, NOTICE_CREATE_FAILURE),
            SubmitTarget::Update(_) => (NOTICE_UPDATE_SUCCESS, NOTICE_UPDATE_FAILURE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Form is incomplete or invalid")]
    Invalid,

    #[error("Form has not been confirmed")]
    NotConfirmed,

    #[error("Modal is not open")]
    Closed,
}

/// One resident draft plus its derived validity
#[derive(Debug, Clone, Default)]
pub struct FormState {
    initial: ResidentDraft,
    draft: ResidentDraft,
    record: Option<ResidentRecord>,
    errors: FieldErrors,
    confirmed: bool,
}

impl FormState {
    pub fn new(initial: ResidentDraft) -> Self {
        let mut state = Self::default();
        state.reset(initial);
        state
    }

    pub fn value(&self, field: ResidentField) -> &str {
        self.draft.get(field)
    }

    pub fn draft(&self) -> &ResidentDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: ResidentField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        match self.draft.to_record() {
            Ok(record) => {
                self.record = Some(record);
                self.errors.clear();
            }
            Err(errors) => {
                self.record = None;
                self.errors = errors;
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.record.is_some()
    }

    /// The parsed record, present only while the draft is valid
    pub fn record(&self) -> Option<&ResidentRecord> {
        self.record.as_ref()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: ResidentField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.confirmed
    }

    /// Replace the draft with `initial` and drop the confirmation
    pub fn reset(&mut self, initial: ResidentDraft) {
        self.initial = initial.clone();
        self.draft = initial;
        self.confirmed = false;
        self.revalidate();
    }

    /// Save the record through `store`.
    ///
    /// A rejected save yields a failure notice and keeps the draft; a successful
    /// one resets the form to its initial values.
    pub async fn submit(
        &mut self,
        store: &dyn ResidentStore,
        target: SubmitTarget,
    ) -> Result<Notice, FormError> {
        let Some(record) = self.record.clone() else {
            return Err(FormError::Invalid);
        };
        if !self.confirmed {
            return Err(FormError::NotConfirmed);
        }

        let (success, failure) = target.notices();
        let result = match target {
            SubmitTarget::Create => store.create(record).await,
            SubmitTarget::Update(id) => store.update(id, record).await,
        };

        match result {
            Ok(entry) => {
                tracing::info!("Resident saved: id={}", entry.id);
                self.reset(self.initial.clone());
                Ok(Notice::success(success))
            }
            Err(e) => {
                tracing::warn!("Resident save failed: {}", e);
                Ok(Notice::failure(failure))
            }
        }
    }
}
