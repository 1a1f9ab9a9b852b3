use uuid::Uuid;

use crate::core::error::Result;
use crate::features::census_form::form_state::{
    FormError, FormState, ResidentDraft, SubmitTarget,
};
use crate::features::census_form::notice::Notice;
use crate::features::census_form::region_chain::{
    FetchOutcome, FetchRequest, RegionPath, RegionSelectorChain,
};
use crate::features::regions::models::{RegionLevel, RegionOption};
use crate::features::regions::services::RegionSource;
use crate::features::residents::models::{ResidentEntry, ResidentField, ResidentRecord};
use crate::features::residents::services::ResidentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Add,
    Edit,
}

fn region_level(field: ResidentField) -> Option<RegionLevel> {
    match field {
        ResidentField::ProvinceId => Some(RegionLevel::Province),
        ResidentField::RegencyId => Some(RegionLevel::Regency),
        ResidentField::DistrictId => Some(RegionLevel::District),
        ResidentField::VillageId => Some(RegionLevel::Village),
        _ => None,
    }
}

fn region_field(level: RegionLevel) -> ResidentField {
    match level {
        RegionLevel::Province => ResidentField::ProvinceId,
        RegionLevel::Regency => ResidentField::RegencyId,
        RegionLevel::District => ResidentField::DistrictId,
        RegionLevel::Village => ResidentField::VillageId,
    }
}

fn region_path(record: &ResidentRecord) -> RegionPath {
    RegionPath::new(
        &record.province_id,
        &record.regency_id,
        &record.district_id,
        &record.village_id,
    )
}

/// Add or Edit dialog: a form, its region chain and whether it is showing
#[derive(Debug, Clone)]
pub struct ModalController {
    kind: ModalKind,
    open: bool,
    target: Option<Uuid>,
    form: FormState,
    regions: RegionSelectorChain,
}

impl ModalController {
    pub fn new(kind: ModalKind) -> Self {
        Self {
            kind,
            open: false,
            target: None,
            form: FormState::new(ResidentDraft::default()),
            regions: RegionSelectorChain::new(),
        }
    }

    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Id of the row being edited
    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn regions(&self) -> &RegionSelectorChain {
        &self.regions
    }

    pub fn region_options(&self, level: RegionLevel) -> &[RegionOption] {
        self.regions.options(level)
    }

    /// Show the modal.
    ///
    /// Add starts from an empty draft; Edit copies `entry`. The province list is
    /// fetched first, then the entry's region path is walked level by level.
    pub async fn open(&mut self, entry: Option<&ResidentEntry>, source: &dyn RegionSource) {
        let entry = match self.kind {
            ModalKind::Add => None,
            ModalKind::Edit => entry,
        };

        let initial = entry
            .map(|e| ResidentDraft::from(&e.record))
            .unwrap_or_default();
        self.form.reset(initial);
        self.regions.reset();
        self.target = entry.map(|e| e.id);
        self.open = true;

        tracing::debug!("Opening {:?} modal, target={:?}", self.kind, self.target);

        self.regions.refresh_provinces(source).await;
        if let Some(entry) = entry {
            self.regions.prime(source, &region_path(&entry.record)).await;
        }
    }

    /// Hide the modal, dropping the draft and every region list
    pub fn close(&mut self) {
        self.open = false;
        self.target = None;
        self.form.reset(ResidentDraft::default());
        self.regions.reset();
    }

    /// Update one input.
    ///
    /// Region inputs go through the selector chain: lower region inputs are
    /// emptied and the request for the next level is returned. Re-selecting
    /// the current region changes nothing.
    pub fn set_field(
        &mut self,
        field: ResidentField,
        value: impl Into<String>,
    ) -> Option<FetchRequest> {
        let value = value.into();
        let Some(level) = region_level(field) else {
            self.form.set_field(field, value);
            return None;
        };
        if self.regions.selected(level).unwrap_or_default() == value {
            return None;
        }

        for below in level.descendants() {
            self.form.set_field(region_field(below), "");
        }
        self.form.set_field(field, value.clone());
        self.regions.select(level, value)
    }

    pub fn resolve_fetch(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<RegionOption>>,
    ) -> FetchOutcome {
        self.regions.resolve(request, result)
    }

    /// Select a region and wait for the next level's options
    pub async fn select_region(
        &mut self,
        source: &dyn RegionSource,
        level: RegionLevel,
        id: impl Into<String>,
    ) -> Option<FetchOutcome> {
        let request = self.set_field(region_field(level), id)?;
        let result = request.run(source).await;
        Some(self.resolve_fetch(&request, result))
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.form.set_confirmed(confirmed);
    }

    /// Save the draft; the modal closes only when the save succeeds
    pub async fn submit(&mut self, store: &dyn ResidentStore) -> std::result::Result<Notice, FormError> {
        if !self.open {
            return Err(FormError::Closed);
        }
        let target = match (self.kind, self.target) {
            (ModalKind::Add, _) => SubmitTarget::Create,
            (ModalKind::Edit, Some(id)) => SubmitTarget::Update(id),
            (ModalKind::Edit, None) => return Err(FormError::Closed),
        };

        let notice = self.form.submit(store, target).await?;
        if notice.is_success() {
            self.close();
        }
        Ok(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::residents::services::{
        InMemoryResidentStore, SimulatedResidentStore,
    };
    use crate::features::residents::services::ResidentService;
    use crate::shared::test_helpers::{sample_record, FakeRegionSource};
    use std::sync::Arc;
    use std::time::Duration;

    fn fill(modal: &mut ModalController, record: &ResidentRecord) {
        for field in ResidentField::ALL {
            modal.set_field(field, record.display(field));
        }
    }

    #[tokio::test]
    async fn test_add_opens_empty_with_provinces() {
        let source = FakeRegionSource::bandung();
        let mut modal = ModalController::new(ModalKind::Add);

        modal.open(None, &source).await;

        assert!(modal.is_open());
        assert_eq!(modal.target(), None);
        assert_eq!(modal.form().draft(), &ResidentDraft::default());
        assert_eq!(modal.region_options(RegionLevel::Province).len(), 2);
        assert!(modal.region_options(RegionLevel::Regency).is_empty());
    }

    #[tokio::test]
    async fn test_edit_round_trip_without_changes() {
        let source = FakeRegionSource::bandung();
        let entry = ResidentEntry::new(sample_record());
        let mut modal = ModalController::new(ModalKind::Edit);

        modal.open(Some(&entry), &source).await;

        assert_eq!(modal.target(), Some(entry.id));
        assert_eq!(modal.form().record(), Some(&entry.record));
        assert_eq!(modal.regions().path(), region_path(&entry.record));
        assert_eq!(modal.region_options(RegionLevel::Village).len(), 2);
    }

    #[tokio::test]
    async fn test_region_field_clears_lower_inputs() {
        let source = FakeRegionSource::bandung();
        let entry = ResidentEntry::new(sample_record());
        let mut modal = ModalController::new(ModalKind::Edit);
        modal.open(Some(&entry), &source).await;

        let request = modal
            .set_field(ResidentField::RegencyId, "3204")
            .expect("district request");

        assert_eq!(request.level, RegionLevel::District);
        assert_eq!(modal.form().value(ResidentField::ProvinceId), "32");
        assert_eq!(modal.form().value(ResidentField::RegencyId), "3204");
        assert_eq!(modal.form().value(ResidentField::DistrictId), "");
        assert_eq!(modal.form().value(ResidentField::VillageId), "");
        assert!(!modal.form().is_valid());
        assert!(modal.region_options(RegionLevel::Village).is_empty());
    }

    #[tokio::test]
    async fn test_reselecting_current_region_is_a_no_op() {
        let source = FakeRegionSource::bandung();
        let entry = ResidentEntry::new(sample_record());
        let mut modal = ModalController::new(ModalKind::Edit);
        modal.open(Some(&entry), &source).await;
        let calls_after_open = source.calls().len();
        let token = modal.regions().token(RegionLevel::District);

        assert!(modal.set_field(ResidentField::RegencyId, "3273").is_none());
        assert_eq!(
            modal.select_region(&source, RegionLevel::Province, "32").await,
            None
        );

        assert_eq!(source.calls().len(), calls_after_open);
        assert_eq!(modal.regions().token(RegionLevel::District), token);
        assert_eq!(modal.form().value(ResidentField::DistrictId), "3273010");
        assert_eq!(modal.form().value(ResidentField::VillageId), "3273010001");
        assert_eq!(modal.region_options(RegionLevel::Village).len(), 2);
        assert_eq!(modal.form().record(), Some(&entry.record));
    }

    #[tokio::test]
    async fn test_edit_round_trip_of_row_saved_through_service() {
        let source = FakeRegionSource::bandung();
        let store = Arc::new(InMemoryResidentStore::new());
        let service = ResidentService::new(store.clone());

        let mut record = sample_record();
        record.name = " Rina Kartika ".to_string();
        record.address = "Jl. Sarijadi Raya No. 21 ".to_string();
        let saved = service.create(record).await.unwrap();

        let mut blank = sample_record();
        blank.reason = "  ".to_string();
        assert!(service.create(blank).await.is_err());

        let rows = store.list().await;
        assert_eq!(rows.len(), 1);

        let mut modal = ModalController::new(ModalKind::Edit);
        modal.open(Some(&rows[0]), &source).await;
        assert_eq!(modal.form().record(), Some(&saved.record));
    }

    #[tokio::test]
    async fn test_close_resets_everything() {
        let source = FakeRegionSource::bandung();
        let entry = ResidentEntry::new(sample_record());
        let mut modal = ModalController::new(ModalKind::Edit);
        modal.open(Some(&entry), &source).await;
        modal.set_confirmed(true);

        modal.close();

        assert!(!modal.is_open());
        assert_eq!(modal.target(), None);
        assert!(!modal.form().is_confirmed());
        assert_eq!(modal.form().draft(), &ResidentDraft::default());
        for level in RegionLevel::ALL {
            assert!(modal.region_options(level).is_empty());
            assert_eq!(modal.regions().selected(level), None);
        }
    }

    #[tokio::test]
    async fn test_successful_add_closes_modal() {
        let source = FakeRegionSource::bandung();
        let store = InMemoryResidentStore::new();
        let mut modal = ModalController::new(ModalKind::Add);
        modal.open(None, &source).await;

        fill(&mut modal, &sample_record());
        modal.set_confirmed(true);
        let notice = modal.submit(&store).await.unwrap();

        assert!(notice.is_success());
        assert!(!modal.is_open());
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_edit_keeps_modal_open() {
        let source = FakeRegionSource::bandung();
        let inner = InMemoryResidentStore::with_records([sample_record()]);
        let entry = inner.list().await.remove(0);
        let store = SimulatedResidentStore::new(inner, Duration::ZERO, 1.0);
        let mut modal = ModalController::new(ModalKind::Edit);
        modal.open(Some(&entry), &source).await;

        modal.set_field(ResidentField::Address, "Jl. Setiabudi No. 5");
        modal.set_confirmed(true);
        let notice = modal.submit(&store).await.unwrap();

        assert!(!notice.is_success());
        assert!(modal.is_open());
        assert_eq!(modal.form().value(ResidentField::Address), "Jl. Setiabudi No. 5");
        assert_eq!(store.inner().list().await[0].record, sample_record());
    }

    #[tokio::test]
    async fn test_submit_on_closed_modal() {
        let store = InMemoryResidentStore::new();
        let mut modal = ModalController::new(ModalKind::Add);
        assert_eq!(modal.submit(&store).await, Err(FormError::Closed));
    }
}
