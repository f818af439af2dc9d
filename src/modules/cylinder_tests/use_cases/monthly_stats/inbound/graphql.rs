use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cylinder_tests::adapters::inbound::graphql::{GqlMonthlyStats, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct MonthlyStatsQuery;

#[Object]
impl MonthlyStatsQuery {
    async fn monthly_stats(
        &self,
        context: &Context<'_>,
        month: Option<u32>,
        year: Option<i32>,
    ) -> GqlResult<GqlMonthlyStats> {
        let state = context.data_unchecked::<AppState>();
        let stats = state
            .stats_handler
            .handle(month, year)
            .await
            .map_err(to_gql_error)?;
        Ok(stats.into())
    }
}
