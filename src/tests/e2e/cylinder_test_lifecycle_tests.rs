use crate::modules::cylinder_tests::adapters::outbound::record_store::TestRecordStore;
use crate::modules::cylinder_tests::adapters::outbound::record_store_json_file::JsonFileTestRecordStore;
use crate::modules::cylinder_tests::core::history::HistoryFilter;
use crate::modules::cylinder_tests::use_cases::update_test_record::command::{
    TestRecordPatch, UpdateTestRecord,
};
use crate::shared::core::primitives::SearchTerm;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::add_test_record::AddTestRecordBuilder;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn records_survive_a_restart_and_feed_every_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");

    {
        let store: Arc<dyn TestRecordStore> =
            Arc::new(JsonFileTestRecordStore::open(&path).await.unwrap());
        let state = AppState::new(store, "test-token");

        for (id, test_date) in [("first", date(2020, 1, 1)), ("second", date(2020, 1, 20))] {
            state
                .add_handler
                .handle(
                    AddTestRecordBuilder::new()
                        .record_id(id)
                        .vehicle_number(Some(format!("MH-04-{id}").as_str()))
                        .serial_number(None)
                        .test_date(Some(test_date))
                        .build(),
                )
                .await
                .expect("add failed");
        }

        let updated = state
            .update_handler
            .handle(UpdateTestRecord {
                record_id: "second".into(),
                received_at: Utc::now(),
                patch: TestRecordPatch {
                    test_date: Some(date(2020, 1, 22)),
                    out_time: Some("11:50 AM".into()),
                    ..TestRecordPatch::default()
                },
            })
            .await
            .expect("update failed");
        assert_eq!(updated.next_test_date, Some(date(2023, 1, 20)));
    }

    let store: Arc<dyn TestRecordStore> =
        Arc::new(JsonFileTestRecordStore::open(&path).await.unwrap());
    let state = AppState::new(store, "test-token");

    let history = state
        .history_handler
        .handle(HistoryFilter::default())
        .await
        .unwrap();
    let ids: Vec<&str> = history.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["second", "first"]);
    assert_eq!(history[0].out_time.as_deref(), Some("11:50 AM"));

    let alerts = state
        .alerts_handler
        .handle(date(2023, 1, 1), None)
        .await
        .unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, "first");

    let searched = state
        .history_handler
        .handle(HistoryFilter {
            search: SearchTerm::parse(Some(history[1].serial_number.as_str())),
            ..HistoryFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(searched.len(), 1);

    let stats = state
        .stats_handler
        .handle(Some(1), Some(2020))
        .await
        .unwrap();
    assert_eq!(stats.total_count, 2);
    let counts: Vec<usize> = stats.weekly_buckets.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![1, 0, 0, 1, 0]);
}
