use std::sync::Arc;

use crate::modules::cylinder_tests::adapters::outbound::record_store::TestRecordStore;
use crate::modules::cylinder_tests::use_cases::add_test_record::handler::AddTestRecordHandler;
use crate::modules::cylinder_tests::use_cases::list_alerts::handler::ListAlertsHandler;
use crate::modules::cylinder_tests::use_cases::list_history::handler::ListHistoryHandler;
use crate::modules::cylinder_tests::use_cases::monthly_stats::handler::MonthlyStatsHandler;
use crate::modules::cylinder_tests::use_cases::update_test_record::handler::UpdateTestRecordHandler;

#[derive(Clone)]
pub struct AppState {
    pub add_handler: Arc<AddTestRecordHandler<dyn TestRecordStore>>,
    pub update_handler: Arc<UpdateTestRecordHandler<dyn TestRecordStore>>,
    pub history_handler: Arc<ListHistoryHandler<dyn TestRecordStore>>,
    pub alerts_handler: Arc<ListAlertsHandler<dyn TestRecordStore>>,
    pub stats_handler: Arc<MonthlyStatsHandler<dyn TestRecordStore>>,
    pub auth_token: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn TestRecordStore>, auth_token: impl Into<Arc<str>>) -> Self {
        Self {
            add_handler: Arc::new(AddTestRecordHandler::new(store.clone())),
            update_handler: Arc::new(UpdateTestRecordHandler::new(store.clone())),
            history_handler: Arc::new(ListHistoryHandler::new(store.clone())),
            alerts_handler: Arc::new(ListAlertsHandler::new(store.clone())),
            stats_handler: Arc::new(MonthlyStatsHandler::new(store)),
            auth_token: auth_token.into(),
        }
    }
}
