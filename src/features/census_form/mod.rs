//! State behind the census page.
//!
//! Nothing here renders anything. The page owns a [`TableView`] of stored
//! residents, an Add and an Edit [`ModalController`], and the [`Notice`]s
//! produced by save attempts. Each modal owns a [`FormState`] and a
//! [`RegionSelectorChain`] fed by a [`RegionSource`](crate::features::regions::RegionSource).

pub mod form_state;
pub mod modal;
pub mod notice;
pub mod page;
pub mod region_chain;
pub mod table_view;

pub use form_state::{FormError, FormState, ResidentDraft, SubmitTarget};
pub use modal::{ModalController, ModalKind};
pub use notice::{Notice, NoticeKind};
pub use page::CensusPage;
pub use region_chain::{FetchOutcome, FetchRequest, RegionPath, RegionSelectorChain};
pub use table_view::TableView;
