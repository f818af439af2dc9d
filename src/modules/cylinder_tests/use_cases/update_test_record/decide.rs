// Pure merge of a patch into the stored record.
//
// Rules
// - nextTestDate changes only when the patch names it. A new testDate alone leaves it as stored.
// - amount and nextTestDate are cleared when the patch names them without a value.
// - Required text fields may be changed but not blanked.
// - updatedAt moves to the time the update was received.

use crate::modules::cylinder_tests::core::record::{TestRecord, non_blank};
use crate::modules::cylinder_tests::use_cases::update_test_record::command::TestRecordPatch;
use crate::modules::cylinder_tests::use_cases::update_test_record::decision::{
    DecideError, Decision,
};
use chrono::{DateTime, Utc};

fn required(
    value: Option<String>,
    current: String,
    blank: DecideError,
) -> Result<String, DecideError> {
    match value {
        None => Ok(current),
        Some(v) => non_blank(Some(v)).ok_or(blank),
    }
}

fn optional(value: Option<String>, current: Option<String>) -> Option<String> {
    match value {
        None => current,
        Some(v) => non_blank(Some(v)),
    }
}

fn merge(
    current: TestRecord,
    patch: TestRecordPatch,
    received_at: DateTime<Utc>,
) -> Result<TestRecord, DecideError> {
    Ok(TestRecord {
        id: current.id,
        serial_number: required(
            patch.serial_number,
            current.serial_number,
            DecideError::BlankSerialNumber,
        )?,
        test_date: patch.test_date.unwrap_or(current.test_date),
        customer_name: required(
            patch.customer_name,
            current.customer_name,
            DecideError::BlankCustomerName,
        )?,
        mobile_number: required(
            patch.mobile_number,
            current.mobile_number,
            DecideError::BlankMobileNumber,
        )?,
        vehicle_number: optional(patch.vehicle_number, current.vehicle_number),
        vehicle_type: optional(patch.vehicle_type, current.vehicle_type),
        cylinder_quantity: patch.cylinder_quantity.unwrap_or(current.cylinder_quantity),
        amount: patch.amount.unwrap_or(current.amount),
        payment_mode: required(
            patch.payment_mode,
            current.payment_mode,
            DecideError::BlankPaymentMode,
        )?,
        reference_source: optional(patch.reference_source, current.reference_source),
        in_time: optional(patch.in_time, current.in_time),
        out_time: optional(patch.out_time, current.out_time),
        remarks: optional(patch.remarks, current.remarks),
        google_review: patch.google_review.unwrap_or(current.google_review),
        auto_poster_fixed: patch.auto_poster_fixed.unwrap_or(current.auto_poster_fixed),
        cng_mini_poster: patch.cng_mini_poster.unwrap_or(current.cng_mini_poster),
        next_test_date: patch.next_test_date.unwrap_or(current.next_test_date),
        created_at: current.created_at,
        updated_at: received_at,
    })
}

pub fn decide_update(
    current: TestRecord,
    patch: TestRecordPatch,
    received_at: DateTime<Utc>,
) -> Decision {
    match merge(current, patch, received_at) {
        Ok(record) => Decision::Accepted {
            record: Box::new(record),
        },
        Err(reason) => Decision::Rejected { reason },
    }
}
