use std::sync::Arc;

use crate::modules::cylinder_tests::adapters::outbound::record_store::TestRecordStore;
use crate::modules::cylinder_tests::application::errors::ApplicationError;
use crate::modules::cylinder_tests::core::history::{HistoryFilter, query_history};
use crate::modules::cylinder_tests::core::record::TestRecord;

pub struct ListHistoryHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> ListHistoryHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, filter: HistoryFilter) -> Result<Vec<TestRecord>, ApplicationError> {
        let records = self.store.all().await?;
        let listed = query_history(records, &filter);
        tracing::debug!(count = listed.len(), ?filter, "history listed");
        Ok(listed)
    }
}
