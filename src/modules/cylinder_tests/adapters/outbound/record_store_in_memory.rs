// In memory implementation of the TestRecordStore port.
//
// Purpose
// - Support handler tests and local development without a data file.
//
// Responsibilities
// - Keep records in insertion order.
// - Simulate an unavailable backend through toggle_offline.

use crate::modules::cylinder_tests::adapters::outbound::record_store::{
    StoreError, TestRecordStore,
};
use crate::modules::cylinder_tests::core::record::TestRecord;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTestRecordStore {
    records: RwLock<Vec<TestRecord>>,
    is_offline: bool,
}

impl InMemoryTestRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<TestRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TestRecordStore for InMemoryTestRecordStore {
    async fn insert(&self, record: TestRecord) -> Result<TestRecord, StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(StoreError::Duplicate(record.id));
        }
        guard.push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<TestRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    async fn replace(&self, record: TestRecord) -> Result<TestRecord, StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or_else(|| StoreError::Missing(record.id.clone()))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn all(&self) -> Result<Vec<TestRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.clone())
    }
}
