use std::sync::Arc;

use crate::modules::cylinder_tests::adapters::outbound::record_store::TestRecordStore;
use crate::modules::cylinder_tests::application::errors::ApplicationError;
use crate::modules::cylinder_tests::core::record::TestRecord;
use crate::modules::cylinder_tests::use_cases::update_test_record::command::UpdateTestRecord;
use crate::modules::cylinder_tests::use_cases::update_test_record::decide::decide_update;
use crate::modules::cylinder_tests::use_cases::update_test_record::decision::Decision;

pub const NOT_FOUND_MESSAGE: &str = "Test not found";

pub struct UpdateTestRecordHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateTestRecordHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UpdateTestRecord) -> Result<TestRecord, ApplicationError> {
        let current = self
            .store
            .get(&command.record_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        match decide_update(current, command.patch, command.received_at) {
            Decision::Accepted { record } => {
                let stored = self.store.replace(*record).await?;
                tracing::info!(record_id = %stored.id, "test record updated");
                Ok(stored)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Validation(reason.to_string())),
        }
    }
}
