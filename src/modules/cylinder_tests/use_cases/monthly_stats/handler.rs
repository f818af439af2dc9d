use std::sync::Arc;

use crate::modules::cylinder_tests::adapters::outbound::record_store::TestRecordStore;
use crate::modules::cylinder_tests::application::errors::ApplicationError;
use crate::modules::cylinder_tests::core::stats::{MonthlyStats, StatsPeriod, compute_stats};

pub const MISSING_PERIOD_MESSAGE: &str = "Please provide month and year";

pub struct MonthlyStatsHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> MonthlyStatsHandler<TStore>
where
    TStore: TestRecordStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<MonthlyStats, ApplicationError> {
        let (Some(month), Some(year)) = (month, year) else {
            return Err(ApplicationError::InvalidQueryParameters(
                MISSING_PERIOD_MESSAGE.to_string(),
            ));
        };
        let period = StatsPeriod::new(month, year)
            .map_err(|e| ApplicationError::InvalidQueryParameters(e.to_string()))?;

        let records = self.store.all().await?;
        let stats = compute_stats(&records, period);
        tracing::debug!(month, year, total = stats.total_count, "monthly stats computed");
        Ok(stats)
    }
}
