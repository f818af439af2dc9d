// Overdue re-test alerts.
//
// Pipeline
// 1. Order the full history latest test first.
// 2. Keep the first record per vehicle: the vehicle's current test. Older tests never alert.
// 3. Keep current tests whose due date is today or earlier.
// 4. Narrow by search over customer name, vehicle number and mobile number.
// 5. Order by due date ascending, most overdue first.
//
// Boundaries
// - Pure functions over an in-memory sequence. No input or output.
// - Records without a vehicle number cannot be attributed to a vehicle and are left out.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::modules::cylinder_tests::core::record::{TestRecord, latest_first};
use crate::shared::core::primitives::SearchTerm;

pub fn derive_alerts(
    records: Vec<TestRecord>,
    today: NaiveDate,
    search: Option<&SearchTerm>,
) -> Vec<TestRecord> {
    let mut alerts: Vec<TestRecord> = current_per_vehicle(records)
        .into_iter()
        .filter(|record| record.is_overdue(today))
        .filter(|record| search.is_none_or(|term| matches_alert_search(term, record)))
        .collect();
    alerts.sort_by(|a, b| {
        a.next_test_date
            .cmp(&b.next_test_date)
            .then_with(|| a.vehicle_key().cmp(&b.vehicle_key()))
    });
    alerts
}

/// Reduce a history to one record per vehicle, the latest test winning. Output stays latest first.
pub fn current_per_vehicle(mut records: Vec<TestRecord>) -> Vec<TestRecord> {
    records.sort_by(latest_first);
    let mut seen: HashSet<String> = HashSet::new();
    records
        .into_iter()
        .filter(|record| match record.vehicle_key() {
            Some(key) => seen.insert(key.to_string()),
            None => false,
        })
        .collect()
}

fn matches_alert_search(term: &SearchTerm, record: &TestRecord) -> bool {
    term.matches_any([
        Some(record.customer_name.as_str()),
        record.vehicle_number.as_deref(),
        Some(record.mobile_number.as_str()),
    ])
}
