use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cylinder_tests::adapters::inbound::http::error_response;
use crate::modules::cylinder_tests::adapters::inbound::lenient;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MonthlyStatsParams {
    #[serde(default, deserialize_with = "lenient::text")]
    pub month: Option<u32>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub year: Option<i32>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<MonthlyStatsParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match state.stats_handler.handle(params.month, params.year).await {
        Ok(stats) => Json(stats).into_response(),
        Err(error) => error.into_response(),
    }
}
