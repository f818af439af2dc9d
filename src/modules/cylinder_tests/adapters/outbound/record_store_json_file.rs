// Durable TestRecordStore backed by a single JSON document on disk.
//
// Responsibilities
// - Load the collection once on open. A missing file is an empty collection.
// - Rewrite the whole collection on every write: serialize, write a sibling temp file, rename over.
// - Only swap the in-memory copy after the file write succeeded, so a failed write changes nothing.

use std::path::PathBuf;

use tokio::sync::RwLock;

use crate::modules::cylinder_tests::adapters::outbound::record_store::{
    StoreError, TestRecordStore,
};
use crate::modules::cylinder_tests::core::record::TestRecord;

pub struct JsonFileTestRecordStore {
    path: PathBuf,
    records: RwLock<Vec<TestRecord>>,
}

impl JsonFileTestRecordStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Backend(format!("cannot parse {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(StoreError::Backend(format!("cannot read {}: {e}", path.display())));
            }
        };
        tracing::debug!(path = %path.display(), count = records.len(), "record store opened");
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    async fn persist(&self, records: &[TestRecord]) -> Result<(), StoreError> {
        let backend = |e: &dyn std::fmt::Display| {
            StoreError::Backend(format!("cannot write {}: {e}", self.path.display()))
        };
        let contents = serde_json::to_vec_pretty(records).map_err(|e| backend(&e))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| backend(&e))?;
        }
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, contents)
            .await
            .map_err(|e| backend(&e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| backend(&e))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl TestRecordStore for JsonFileTestRecordStore {
    async fn insert(&self, record: TestRecord) -> Result<TestRecord, StoreError> {
        let mut guard = self.records.write().await;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(StoreError::Duplicate(record.id));
        }
        let mut next = guard.clone();
        next.push(record.clone());
        self.persist(&next).await?;
        *guard = next;
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<TestRecord>, StoreError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    async fn replace(&self, record: TestRecord) -> Result<TestRecord, StoreError> {
        let mut guard = self.records.write().await;
        let position = guard
            .iter()
            .position(|existing| existing.id == record.id)
            .ok_or_else(|| StoreError::Missing(record.id.clone()))?;
        let mut next = guard.clone();
        next[position] = record.clone();
        self.persist(&next).await?;
        *guard = next;
        Ok(record)
    }

    async fn all(&self) -> Result<Vec<TestRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }
}
