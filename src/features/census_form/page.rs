use std::sync::Arc;

use crate::features::census_form::form_state::FormError;
use crate::features::census_form::modal::{ModalController, ModalKind};
use crate::features::census_form::notice::Notice;
use crate::features::census_form::region_chain::{FetchOutcome, FetchRequest};
use crate::features::census_form::table_view::TableView;
use crate::features::regions::models::RegionLevel;
use crate::features::regions::services::RegionSource;
use crate::features::residents::models::ResidentField;
use crate::features::residents::services::ResidentStore;

/// The census page: resident table, Add and Edit modals and the notice feed.
///
/// At most one modal is open at a time.
pub struct CensusPage {
    store: Arc<dyn ResidentStore>,
    source: Arc<dyn RegionSource>,
    table: TableView,
    add_modal: ModalController,
    edit_modal: ModalController,
    notices: Vec<Notice>,
}

impl CensusPage {
    pub fn new(store: Arc<dyn ResidentStore>, source: Arc<dyn RegionSource>) -> Self {
        Self {
            store,
            source,
            table: TableView::default(),
            add_modal: ModalController::new(ModalKind::Add),
            edit_modal: ModalController::new(ModalKind::Edit),
            notices: Vec::new(),
        }
    }

    /// Build the page with the current dataset loaded
    pub async fn load(store: Arc<dyn ResidentStore>, source: Arc<dyn RegionSource>) -> Self {
        let mut page = Self::new(store, source);
        page.refresh().await;
        page
    }

    pub async fn refresh(&mut self) {
        self.table = TableView::new(self.store.list().await);
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn modal(&self, kind: ModalKind) -> &ModalController {
        match kind {
            ModalKind::Add => &self.add_modal,
            ModalKind::Edit => &self.edit_modal,
        }
    }

    fn modal_mut(&mut self, kind: ModalKind) -> &mut ModalController {
        match kind {
            ModalKind::Add => &mut self.add_modal,
            ModalKind::Edit => &mut self.edit_modal,
        }
    }

    /// The modal currently showing, if any
    pub fn open_modal(&self) -> Option<ModalKind> {
        [ModalKind::Add, ModalKind::Edit]
            .into_iter()
            .find(|kind| self.modal(*kind).is_open())
    }

    /// Open the Add modal; refused while another modal is showing
    pub async fn open_add(&mut self) -> bool {
        if self.open_modal().is_some() {
            return false;
        }
        let source = Arc::clone(&self.source);
        self.add_modal.open(None, source.as_ref()).await;
        true
    }

    /// Open the Edit modal on a copy of row `index`
    pub async fn click_row(&mut self, index: usize) -> bool {
        if self.open_modal().is_some() {
            return false;
        }
        let Some(entry) = self.table.row(index).cloned() else {
            tracing::debug!("No table row at index {}", index);
            return false;
        };
        let source = Arc::clone(&self.source);
        self.edit_modal.open(Some(&entry), source.as_ref()).await;
        true
    }

    pub fn close(&mut self, kind: ModalKind) {
        self.modal_mut(kind).close();
    }

    pub fn set_field(
        &mut self,
        kind: ModalKind,
        field: ResidentField,
        value: impl Into<String>,
    ) -> Option<FetchRequest> {
        self.modal_mut(kind).set_field(field, value)
    }

    /// Run a request handed out by [`set_field`](Self::set_field) and apply it
    pub async fn run_fetch(&mut self, kind: ModalKind, request: &FetchRequest) -> FetchOutcome {
        let result = request.run(self.source.as_ref()).await;
        self.modal_mut(kind).resolve_fetch(request, result)
    }

    pub async fn select_region(
        &mut self,
        kind: ModalKind,
        level: RegionLevel,
        id: impl Into<String>,
    ) -> Option<FetchOutcome> {
        let source = Arc::clone(&self.source);
        self.modal_mut(kind)
            .select_region(source.as_ref(), level, id)
            .await
    }

    pub fn set_confirmed(&mut self, kind: ModalKind, confirmed: bool) {
        self.modal_mut(kind).set_confirmed(confirmed);
    }

    /// Submit a modal; the notice is queued and the table reloaded on success
    pub async fn submit(&mut self, kind: ModalKind) -> Result<Notice, FormError> {
        let store = Arc::clone(&self.store);
        let notice = self.modal_mut(kind).submit(store.as_ref()).await?;
        if notice.is_success() {
            self.refresh().await;
        }
        self.notices.push(notice.clone());
        Ok(notice)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hand over queued notices, leaving the feed empty
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
