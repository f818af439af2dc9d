// Shared test fixture for the AddTestRecord command.

use crate::modules::cylinder_tests::use_cases::add_test_record::command::AddTestRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AddTestRecordDto {
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
}

pub struct AddTestRecordBuilder {
    inner: AddTestRecord,
}

impl Default for AddTestRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddTestRecordBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/add_test_record.json").unwrap();
        let dto: AddTestRecordDto = serde_json::from_str(&json_str).unwrap();
        let received_at = DateTime::parse_from_rfc3339("2022-01-01T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        Self {
            inner: AddTestRecord {
                record_id: "rec-fixed-0001".to_string(),
                received_at,
                received_on: received_at.date_naive(),
                serial_number: dto.serial_number,
                test_date: dto.test_date,
                customer_name: dto.customer_name,
                mobile_number: dto.mobile_number,
                vehicle_number: dto.vehicle_number,
                vehicle_type: dto.vehicle_type,
                cylinder_quantity: dto.cylinder_quantity,
                amount: dto.amount,
                payment_mode: dto.payment_mode,
                reference_source: dto.reference_source,
                in_time: dto.in_time,
                out_time: dto.out_time,
                remarks: dto.remarks,
                google_review: dto.google_review,
                auto_poster_fixed: dto.auto_poster_fixed,
                cng_mini_poster: dto.cng_mini_poster,
                next_test_date: None,
            },
        }
    }

    pub fn record_id(mut self, v: impl Into<String>) -> Self {
        self.inner.record_id = v.into();
        self
    }

    pub fn received_on(mut self, v: NaiveDate) -> Self {
        self.inner.received_on = v;
        self
    }

    pub fn serial_number(mut self, v: Option<&str>) -> Self {
        self.inner.serial_number = v.map(str::to_string);
        self
    }

    pub fn test_date(mut self, v: Option<NaiveDate>) -> Self {
        self.inner.test_date = v;
        self
    }

    pub fn next_test_date(mut self, v: Option<NaiveDate>) -> Self {
        self.inner.next_test_date = v;
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

    pub fn cylinder_quantity(mut self, v: Option<u32>) -> Self {
        self.inner.cylinder_quantity = v;
        self
    }

    pub fn payment_mode(mut self, v: Option<&str>) -> Self {
        self.inner.payment_mode = v.map(str::to_string);
        self
    }

    pub fn build(self) -> AddTestRecord {
        self.inner
    }
}

#[cfg(test)]
mod add_test_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AddTestRecordBuilder::default().build();
        assert_eq!(built.record_id, "rec-fixed-0001");
        assert_eq!(built.serial_number.as_deref(), Some("CNG22-FIX001"));
        assert_eq!(built.test_date, NaiveDate::from_ymd_opt(2022, 1, 1));
        assert_eq!(built.customer_name, "Sohan Lal");
        assert_eq!(built.vehicle_number.as_deref(), Some("MH-04-AB-1234"));
        assert_eq!(built.payment_mode.as_deref(), Some("UPI"));
        assert_eq!(built.out_time, None);
        assert!(built.auto_poster_fixed);
        assert_eq!(built.next_test_date, None);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = AddTestRecordBuilder::new()
            .record_id("rid-123")
            .customer_name("Pooja Singh")
            .mobile_number("9111111111")
            .vehicle_number(None)
            .cylinder_quantity(Some(2))
            .build();
        assert_eq!(custom.record_id, "rid-123");
        assert_eq!(custom.customer_name, "Pooja Singh");
        assert_eq!(custom.mobile_number, "9111111111");
        assert_eq!(custom.vehicle_number, None);
        assert_eq!(custom.cylinder_quantity, Some(2));
    }
}
