use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::modules::cylinder_tests::adapters::inbound::lenient;

/// Partial update. Absent fields keep their stored value.
/// For optional text, a blank value clears it. `amount` and `next_test_date` are cleared by
/// null or blank, which arrives as `Some(None)`.
///
/// There is no field for id or createdAt, so neither can be changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecordPatch {
    #[serde(default, alias = "srNo")]
    pub serial_number: Option<String>,
    #[serde(default, alias = "date", deserialize_with = "lenient::calendar_date")]
    pub test_date: Option<NaiveDate>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cylinder_quantity: Option<u32>,
    #[serde(default, deserialize_with = "lenient::nullable_number")]
    pub amount: Option<Option<f64>>,
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
    pub google_review: Option<bool>,
    #[serde(default)]
    pub auto_poster_fixed: Option<bool>,
    #[serde(default)]
    pub cng_mini_poster: Option<bool>,
    #[serde(default, deserialize_with = "lenient::nullable_calendar_date")]
    pub next_test_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTestRecord {
    pub record_id: String,
    pub received_at: DateTime<Utc>,
    pub patch: TestRecordPatch,
}
