use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::cylinder_tests::adapters::inbound::http::error_response;
use crate::modules::cylinder_tests::adapters::inbound::lenient;
use crate::modules::cylinder_tests::core::history::HistoryFilter;
use crate::shared::core::primitives::SearchTerm;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListHistoryParams {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "lenient::calendar_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::calendar_date")]
    pub end_date: Option<NaiveDate>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListHistoryParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let filter = HistoryFilter {
        search: SearchTerm::parse(params.search.as_deref()),
        start_date: params.start_date,
        end_date: params.end_date,
    };

    match state.history_handler.handle(filter).await {
        Ok(records) => Json(records).into_response(),
        Err(error) => error.into_response(),
    }
}
