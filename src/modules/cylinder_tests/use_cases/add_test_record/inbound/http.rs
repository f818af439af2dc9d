use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{Local, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::cylinder_tests::adapters::inbound::http::error_response;
use crate::modules::cylinder_tests::adapters::inbound::lenient;
use crate::modules::cylinder_tests::use_cases::add_test_record::command::AddTestRecord;
use crate::shell::state::AppState;

/// Accepts the legacy field names (srNo, date, mode, reference) next to the current ones,
/// numbers sent as text, and dates sent as full timestamps.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTestRecordBody {
    #[serde(default, alias = "srNo")]
    pub serial_number: Option<String>,
    #[serde(default, alias = "date", deserialize_with = "lenient::calendar_date")]
    pub test_date: Option<NaiveDate>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cylinder_quantity: Option<u32>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub amount: Option<f64>,
    #[serde(default, alias = "mode")]
    pub payment_mode: Option<String>,
    #[serde(default, alias = "reference")]
    pub reference_source: Option<String>,
    #[serde(default)]
    pub in_time: Option<String>,
    #[serde(default)]
    pub out_time: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub google_review: bool,
    #[serde(default)]
    pub auto_poster_fixed: bool,
    #[serde(default)]
    pub cng_mini_poster: bool,
    #[serde(default, deserialize_with = "lenient::calendar_date")]
    pub next_test_date: Option<NaiveDate>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddTestRecordBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = AddTestRecord {
        record_id: Uuid::now_v7().to_string(),
        received_at: Utc::now(),
        received_on: Local::now().date_naive(),
        serial_number: body.serial_number,
        test_date: body.test_date,
        customer_name: body.customer_name,
        mobile_number: body.mobile_number,
        vehicle_number: body.vehicle_number,
        vehicle_type: body.vehicle_type,
        cylinder_quantity: body.cylinder_quantity,
        amount: body.amount,
        payment_mode: body.payment_mode,
        reference_source: body.reference_source,
        in_time: body.in_time,
        out_time: body.out_time,
        remarks: body.remarks,
        google_review: body.google_review,
        auto_poster_fixed: body.auto_poster_fixed,
        cng_mini_poster: body.cng_mini_poster,
        next_test_date: body.next_test_date,
    };

    match state.add_handler.handle(command).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => error.into_response(),
    }
}
