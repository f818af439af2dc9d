use chrono::NaiveDate;
use std::sync::Arc;

use crate::modules::cylinder_tests::adapters::outbound::record_store::TestRecordStore;
use crate::modules::cylinder_tests::application::errors::ApplicationError;
use crate::modules::cylinder_tests::core::alerts::derive_alerts;
use crate::modules::cylinder_tests::core::record::TestRecord;
use crate::shared::core::primitives::SearchTerm;

pub struct ListAlertsHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> ListAlertsHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// `today` is the caller's local calendar date; a due date equal to it already alerts.
    pub async fn handle(
        &self,
        today: NaiveDate,
        search: Option<SearchTerm>,
    ) -> Result<Vec<TestRecord>, ApplicationError> {
        let records = self.store.all().await?;
        let scanned = records.len();
        let alerts = derive_alerts(records, today, search.as_ref());
        tracing::debug!(%today, scanned, overdue = alerts.len(), "alerts derived");
        Ok(alerts)
    }
}
