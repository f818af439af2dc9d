// Builder for stored TestRecord values used across core, adapter and handler tests.
//
// The next test date follows the test date unless a test overrides it.

use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::cylinder_tests::core::due_date::next_test_date;
use crate::modules::cylinder_tests::core::record::{
    DEFAULT_CYLINDER_QUANTITY, DEFAULT_PAYMENT_MODE, TestRecord,
};

const FIXED_INSTANT: &str = "2022-01-01T10:30:00Z";

fn instant(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .unwrap_or_else(|e| panic!("bad fixture instant {raw}: {e}"))
        .with_timezone(&Utc)
}

pub struct TestRecordBuilder {
    inner: TestRecord,
    next_test_date: Option<Option<NaiveDate>>,
}

impl Default for TestRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestRecordBuilder {
    pub fn new() -> Self {
        let created_at = instant(FIXED_INSTANT);
        Self {
            inner: TestRecord {
                id: "rec-0001".to_string(),
                serial_number: "CNG22-AAAAAA".to_string(),
                test_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                customer_name: "Sohan Lal".to_string(),
                mobile_number: "9000000000".to_string(),
                vehicle_number: Some("MH-04-AB-1234".to_string()),
                vehicle_type: None,
                cylinder_quantity: DEFAULT_CYLINDER_QUANTITY,
                amount: None,
                payment_mode: DEFAULT_PAYMENT_MODE.to_string(),
                reference_source: None,
                in_time: None,
                out_time: None,
                remarks: None,
                google_review: false,
                auto_poster_fixed: false,
                cng_mini_poster: false,
                next_test_date: None,
                created_at,
                updated_at: created_at,
            },
            next_test_date: None,
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn serial_number(mut self, v: impl Into<String>) -> Self {
        self.inner.serial_number = v.into();
        self
    }

    pub fn test_date(mut self, v: NaiveDate) -> Self {
        self.inner.test_date = v;
        self
    }

    pub fn next_test_date(mut self, v: Option<NaiveDate>) -> Self {
        self.next_test_date = Some(v);
        self
    }

    pub fn customer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_name = v.into();
        self
    }

    pub fn mobile_number(mut self, v: impl Into<String>) -> Self {
        self.inner.mobile_number = v.into();
        self
    }

    pub fn vehicle_number(mut self, v: Option<&str>) -> Self {
        self.inner.vehicle_number = v.map(str::to_string);
        self
    }

    pub fn amount(mut self, v: Option<f64>) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn created_at(mut self, v: &str) -> Self {
        self.inner.created_at = instant(v);
        self.inner.updated_at = self.inner.created_at;
        self
    }

    pub fn build(self) -> TestRecord {
        let mut record = self.inner;
        record.next_test_date = self
            .next_test_date
            .unwrap_or_else(|| Some(next_test_date(record.test_date)));
        record
    }
}

#[cfg(test)]
mod test_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_derive_the_next_test_date_by_default() {
        let record = TestRecordBuilder::new()
            .test_date(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap())
            .build();
        assert_eq!(record.next_test_date, NaiveDate::from_ymd_opt(2026, 3, 15));
    }

    #[rstest]
    fn it_should_honour_an_explicit_missing_next_test_date() {
        let record = TestRecordBuilder::new().next_test_date(None).build();
        assert_eq!(record.next_test_date, None);
    }

    #[rstest]
    fn it_should_move_updated_at_with_created_at() {
        let record = TestRecordBuilder::new()
            .created_at("2024-05-05T05:05:05Z")
            .build();
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.created_at.to_rfc3339(), "2024-05-05T05:05:05+00:00");
    }
}
