use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Local;

use crate::modules::cylinder_tests::adapters::inbound::graphql::{GqlTestRecord, to_gql_error};
use crate::shared::core::primitives::SearchTerm;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListAlertsQuery;

#[Object]
impl ListAlertsQuery {
    async fn alerts(
        &self,
        context: &Context<'_>,
        search: Option<String>,
    ) -> GqlResult<Vec<GqlTestRecord>> {
        let state = context.data_unchecked::<AppState>();
        let records = state
            .alerts_handler
            .handle(
                Local::now().date_naive(),
                SearchTerm::parse(search.as_deref()),
            )
            .await
            .map_err(to_gql_error)?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
