use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::features::residents::models::{ResidentEntry, ResidentRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Resident {0} not found")]
    NotFound(Uuid),

    #[error("Save rejected: {0}")]
    Rejected(String),
}

/// Persistence collaborator for resident records
#[async_trait]
pub trait ResidentStore: Send + Sync {
    /// All entries in insertion order
    async fn list(&self) -> Vec<ResidentEntry>;

    async fn get(&self, id: Uuid) -> Result<ResidentEntry, StoreError>;

    async fn create(&self, record: ResidentRecord) -> Result<ResidentEntry, StoreError>;

    async fn update(&self, id: Uuid, record: ResidentRecord) -> Result<ResidentEntry, StoreError>;
}

/// Process-local dataset, lost on restart
#[derive(Default)]
pub struct InMemoryResidentStore {
    entries: RwLock<Vec<ResidentEntry>>,
}

impl InMemoryResidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = ResidentRecord>) -> Self {
        Self {
            entries: RwLock::new(records.into_iter().map(ResidentEntry::new).collect()),
        }
    }
}

#[async_trait]
impl ResidentStore for InMemoryResidentStore {
    async fn list(&self) -> Vec<ResidentEntry> {
        self.entries.read().await.clone()
    }

    async fn get(&self, id: Uuid) -> Result<ResidentEntry, StoreError> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, record: ResidentRecord) -> Result<ResidentEntry, StoreError> {
        let entry = ResidentEntry::new(record);
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: Uuid, record: ResidentRecord) -> Result<ResidentEntry, StoreError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;

        entry.record = record;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }
}
