use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Local;
use serde::Deserialize;

use crate::modules::cylinder_tests::adapters::inbound::http::error_response;
use crate::shared::core::primitives::SearchTerm;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListAlertsParams {
    pub search: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListAlertsParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let today = Local::now().date_naive();
    let search = SearchTerm::parse(params.search.as_deref());

    match state.alerts_handler.handle(today, search).await {
        Ok(records) => Json(records).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod list_alerts_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use chrono::{Days, Local, NaiveDate};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::cylinder_tests::adapters::outbound::record_store_in_memory::InMemoryTestRecordStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::records::TestRecordBuilder;

    use super::handle;

    fn make_test_state() -> AppState {
        let today = Local::now().date_naive();
        let store = InMemoryTestRecordStore::with_records(vec![
            TestRecordBuilder::new()
                .id("due-today")
                .vehicle_number(Some("MH-01-AA-0001"))
                .next_test_date(Some(today))
                .build(),
            TestRecordBuilder::new()
                .id("long-overdue")
                .customer_name("Pooja Singh")
                .vehicle_number(Some("MH-02-BB-0002"))
                .next_test_date(NaiveDate::from_ymd_opt(2020, 1, 1))
                .build(),
            TestRecordBuilder::new()
                .id("not-yet")
                .vehicle_number(Some("MH-03-CC-0003"))
                .next_test_date(today.checked_add_days(Days::new(1)))
                .build(),
        ]);
        AppState::new(Arc::new(store), "test-token")
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/tests/alerts", get(handle))
            .with_state(state)
    }

    async fn get_ids(uri: &str) -> (StatusCode, Vec<String>) {
        let response = app(make_test_state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let ids = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect();
        (status, ids)
    }

    #[tokio::test]
    async fn it_should_return_overdue_vehicles_most_overdue_first() {
        let (status, ids) = get_ids("/api/tests/alerts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids, vec!["long-overdue", "due-today"]);
    }

    #[tokio::test]
    async fn it_should_narrow_by_search() {
        let (status, ids) = get_ids("/api/tests/alerts?search=pooja").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids, vec!["long-overdue"]);
    }
}
