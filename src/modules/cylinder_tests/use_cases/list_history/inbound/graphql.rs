use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::cylinder_tests::adapters::inbound::graphql::{GqlTestRecord, to_gql_error};
use crate::modules::cylinder_tests::core::history::HistoryFilter;
use crate::shared::core::primitives::SearchTerm;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListHistoryQuery;

#[Object]
impl ListHistoryQuery {
    async fn history(
        &self,
        context: &Context<'_>,
        search: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> GqlResult<Vec<GqlTestRecord>> {
        let state = context.data_unchecked::<AppState>();
        let filter = HistoryFilter {
            search: SearchTerm::parse(search.as_deref()),
            start_date,
            end_date,
        };
        let records = state
            .history_handler
            .handle(filter)
            .await
            .map_err(to_gql_error)?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
