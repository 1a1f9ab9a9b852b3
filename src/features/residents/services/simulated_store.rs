use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use uuid::Uuid;

use crate::features::residents::models::{ResidentEntry, ResidentRecord};
use crate::features::residents::services::{ResidentStore, StoreError};

/// Wraps a store so every write waits a fixed latency and then fails at random.
///
/// Reads pass straight through.
pub struct SimulatedResidentStore<S> {
    inner: S,
    latency: Duration,
    failure_rate: f64,
}

impl<S: ResidentStore> SimulatedResidentStore<S> {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);
    pub const DEFAULT_FAILURE_RATE: f64 = 0.5;

    /// `failure_rate` is clamped to `0.0..=1.0`; NaN never fails.
    pub fn new(inner: S, latency: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            inner,
            latency,
            failure_rate,
        }
    }

    /// One and a half seconds, coin flip
    pub fn with_defaults(inner: S) -> Self {
        Self::new(inner, Self::DEFAULT_LATENCY, Self::DEFAULT_FAILURE_RATE)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn roll(&self, operation: &str) -> Result<(), StoreError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let failed = rand::thread_rng().gen_bool(self.failure_rate);
        if failed {
            tracing::warn!("Simulated {} failure", operation);
            return Err(StoreError::Rejected(format!("simulated {} failure", operation)));
        }
        Ok(())
    }
}

#[async_trait]
impl<S: ResidentStore> ResidentStore for SimulatedResidentStore<S> {
    async fn list(&self) -> Vec<ResidentEntry> {
        self.inner.list().await
    }

    async fn get(&self, id: Uuid) -> Result<ResidentEntry, StoreError> {
        self.inner.get(id).await
    }

    async fn create(&self, record: ResidentRecord) -> Result<ResidentEntry, StoreError> {
        self.roll("create").await?;
        self.inner.create(record).await
    }

    async fn update(&self, id: Uuid, record: ResidentRecord) -> Result<ResidentEntry, StoreError> {
        self.roll("update").await?;
        self.inner.update(id, record).await
    }
}
