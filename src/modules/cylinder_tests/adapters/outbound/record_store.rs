// Port for the durable collection of test records.
//
// Boundaries
// - Single-record writes only. Queries load the collection and run the pure core pipelines on it.
// - No optimistic concurrency: concurrent replaces of one record are last-write-wins.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::cylinder_tests::core::record::TestRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("test record {0} already exists")]
    Duplicate(String),

    #[error("test record {0} does not exist")]
    Missing(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TestRecordStore: Send + Sync {
    async fn insert(&self, record: TestRecord) -> Result<TestRecord, StoreError>;
    async fn get(&self, id: &str) -> Result<Option<TestRecord>, StoreError>;
    async fn replace(&self, record: TestRecord) -> Result<TestRecord, StoreError>;
    async fn all(&self) -> Result<Vec<TestRecord>, StoreError>;
}
