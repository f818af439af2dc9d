use chrono::Datelike;
use std::sync::Arc;

use crate::modules::cylinder_tests::adapters::outbound::record_store::TestRecordStore;
use crate::modules::cylinder_tests::application::errors::ApplicationError;
use crate::modules::cylinder_tests::core::record::TestRecord;
use crate::modules::cylinder_tests::core::serial_number::generate_serial_number;
use crate::modules::cylinder_tests::use_cases::add_test_record::command::AddTestRecord;
use crate::modules::cylinder_tests::use_cases::add_test_record::decide::decide_add;
use crate::modules::cylinder_tests::use_cases::add_test_record::decision::Decision;

pub struct AddTestRecordHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> AddTestRecordHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AddTestRecord) -> Result<TestRecord, ApplicationError> {
        let entry_year = command.received_on.year();
        let decision = decide_add(command, || {
            generate_serial_number(entry_year, &mut rand::thread_rng())
        });

        match decision {
            Decision::Accepted { record } => {
                let stored = self.store.insert(*record).await?;
                tracing::info!(
                    record_id = %stored.id,
                    serial_number = %stored.serial_number,
                    next_test_date = ?stored.next_test_date,
                    "test record added"
                );
                Ok(stored)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Validation(reason.to_string())),
        }
    }
}
