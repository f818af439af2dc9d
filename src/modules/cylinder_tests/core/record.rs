// TestRecord is the single persisted entity: one cylinder test performed for one customer visit.
//
// Notes
// - test_date and next_test_date are calendar dates; created_at and updated_at are UTC instants.
// - vehicle_number is the grouping key for re-test alerts. Blank values never group.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_PAYMENT_MODE: &str = "Cash";
pub const DEFAULT_CYLINDER_QUANTITY: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    pub id: String,
    pub serial_number: String,
    pub test_date: NaiveDate,
    pub customer_name: String,
    pub mobile_number: String,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    pub cylinder_quantity: u32,
    #[serde(default)]
    pub amount: Option<f64>,
    pub payment_mode: String,
    #[serde(default)]
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
    #[serde(default)]
    pub next_test_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TestRecord {
    /// The alert grouping key, or None when the vehicle number is absent or blank.
    pub fn vehicle_key(&self) -> Option<&str> {
        self.vehicle_number
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Due today counts as overdue. Records without a due date never are.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.next_test_date.is_some_and(|due| due <= today)
    }
}

/// Most recent test first. Same-day tests fall back to the later write, then the larger id.
pub fn latest_first(a: &TestRecord, b: &TestRecord) -> Ordering {
    b.test_date
        .cmp(&a.test_date)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| b.id.cmp(&a.id))
}

/// Trim optional free text and drop it when nothing is left.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
