use chrono::{DateTime, NaiveDate, Utc};

/// Everything needed to record one new cylinder test.
/// Optional fields fall back to defaults in decide_add.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTestRecord {
    pub record_id: String,
    pub received_at: DateTime<Utc>,
    /// Local calendar day the request arrived. Used when no test date is given.
    pub received_on: NaiveDate,
    pub serial_number: Option<String>,
    pub test_date: Option<NaiveDate>,
    pub customer_name: String,
    pub mobile_number: String,
    pub vehicle_number: Option<String>,
    pub vehicle_type: Option<String>,
    pub cylinder_quantity: Option<u32>,
    pub amount: Option<f64>,
    pub payment_mode: Option<String>,
    pub reference_source: Option<String>,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub remarks: Option<String>,
    pub google_review: bool,
    pub auto_poster_fixed: bool,
    pub cng_mini_poster: bool,
    pub next_test_date: Option<NaiveDate>,
}
