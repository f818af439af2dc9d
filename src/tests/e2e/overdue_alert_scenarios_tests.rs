use crate::modules::cylinder_tests::adapters::outbound::record_store_in_memory::InMemoryTestRecordStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, Local, Months, NaiveDate};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

const TOKEN: &str = "test-token";

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-auth-token", TOKEN)
        .header("content-type", "application/json")
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_record(
    app: &Router,
    vehicle: &str,
    test_date: NaiveDate,
) -> (StatusCode, serde_json::Value) {
    let body = serde_json::json!({
        "customerName": "Sohan Lal",
        "mobileNumber": "9000000000",
        "vehicleNumber": vehicle,
        "testDate": test_date,
    });
    send(app, "POST", "/api/tests", Some(body.to_string())).await
}

#[tokio::test]
async fn a_recent_retest_silences_the_vehicle_alert() {
    let app = router(AppState::new(Arc::new(InMemoryTestRecordStore::new()), TOKEN));
    let today = Local::now().date_naive();
    let four_years_ago = today.checked_sub_months(Months::new(48)).unwrap();
    let one_year_ago = today.checked_sub_months(Months::new(12)).unwrap();

    let (status, _) = post_record(&app, "MH-04-AB-1234", four_years_ago).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, alerts) = send(&app, "GET", "/api/tests/alerts", None).await;
    assert_eq!(alerts.as_array().unwrap().len(), 1);
    assert_eq!(alerts[0]["vehicleNumber"], "MH-04-AB-1234");

    let (status, _) = post_record(&app, "MH-04-AB-1234", one_year_ago).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, alerts) = send(&app, "GET", "/api/tests/alerts", None).await;
    assert_eq!(alerts, serde_json::json!([]));

    let (_, history) = send(&app, "GET", "/api/tests?search=ab-1234", None).await;
    assert_eq!(history.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn a_generated_serial_carries_the_entry_year() {
    let app = router(AppState::new(Arc::new(InMemoryTestRecordStore::new()), TOKEN));
    let today = Local::now().date_naive();

    let (status, record) = post_record(&app, "MH-12-CD-9999", today).await;

    assert_eq!(status, StatusCode::CREATED);
    let serial = record["serialNumber"].as_str().unwrap();
    assert_eq!(&serial[..6], format!("CNG{:02}-", today.year() % 100));
    assert!(
        serial[6..]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    );

    let (month, year) = (today.month(), today.year());
    let stats_uri = format!("/api/tests/stats?month={month}&year={year}");
    let (_, stats) = send(&app, "GET", &stats_uri, None).await;
    assert_eq!(stats["totalCount"], 1);
}
