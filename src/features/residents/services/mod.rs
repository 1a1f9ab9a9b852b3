mod resident_service;
mod resident_store;
mod simulated_store;

pub use resident_service::ResidentService;
pub use resident_store::{InMemoryResidentStore, ResidentStore, StoreError};
pub use simulated_store::SimulatedResidentStore;
