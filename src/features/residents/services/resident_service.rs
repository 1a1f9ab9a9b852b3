use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::residents::models::{ResidentEntry, ResidentRecord};
use crate::features::residents::services::{ResidentStore, StoreError};
use crate::shared::constants::{NOTICE_CREATE_FAILURE, NOTICE_UPDATE_FAILURE};

/// Service for managing the resident dataset
pub struct ResidentService {
    store: Arc<dyn ResidentStore>,
}

impl ResidentService {
    pub fn new(store: Arc<dyn ResidentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<ResidentEntry> {
        self.store.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<ResidentEntry> {
        self.store
            .get(id)
            .await
            .map_err(|e| map_store_error(e, NOTICE_UPDATE_FAILURE))
    }

    pub async fn create(&self, record: ResidentRecord) -> Result<ResidentEntry> {
        record
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let entry = self
            .store
            .create(record)
            .await
            .map_err(|e| map_store_error(e, NOTICE_CREATE_FAILURE))?;

        tracing::info!("Resident created: id={}", entry.id);
        Ok(entry)
    }

    pub async fn update(&self, id: Uuid, record: ResidentRecord) -> Result<ResidentEntry> {
        record
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let entry = self
            .store
            .update(id, record)
            .await
            .map_err(|e| map_store_error(e, NOTICE_UPDATE_FAILURE))?;

        tracing::info!("Resident updated: id={}", entry.id);
        Ok(entry)
    }
}

fn map_store_error(error: StoreError, failure_notice: &str) -> AppError {
    match error {
        StoreError::NotFound(id) => {
            AppError::NotFound(format!("Resident with id '{}' not found", id))
        }
        StoreError::Rejected(reason) => {
            tracing::warn!("Resident save rejected: {}", reason);
            AppError::ExternalServiceError(failure_notice.to_string())
        }
    }
}
