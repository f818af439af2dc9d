use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::cylinder_tests::use_cases::add_test_record::inbound::graphql::AddTestRecordMutation;
use crate::modules::cylinder_tests::use_cases::list_alerts::inbound::graphql::ListAlertsQuery;
use crate::modules::cylinder_tests::use_cases::list_history::inbound::graphql::ListHistoryQuery;
use crate::modules::cylinder_tests::use_cases::monthly_stats::inbound::graphql::MonthlyStatsQuery;
use crate::modules::cylinder_tests::use_cases::update_test_record::inbound::graphql::UpdateTestRecordMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListHistoryQuery, ListAlertsQuery, MonthlyStatsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AddTestRecordMutation, UpdateTestRecordMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
