use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::cylinder_tests::adapters::inbound::http::error_response;
use crate::modules::cylinder_tests::use_cases::update_test_record::command::{
    TestRecordPatch, UpdateTestRecord,
};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TestRecordPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = UpdateTestRecord {
        record_id: id,
        received_at: Utc::now(),
        patch,
    };

    match state.update_handler.handle(command).await {
        Ok(record) => Json(record).into_response(),
        Err(error) => error.into_response(),
    }
}
