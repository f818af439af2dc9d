// Pure decision for a new test record.
//
// Rules
// - customerName and mobileNumber must be non-blank after trimming.
// - A blank serial number is replaced by the generator's output.
// - testDate defaults to the day the request was received.
// - nextTestDate is kept when given, otherwise derived from testDate.
//   This is the only place it is derived.

use crate::modules::cylinder_tests::core::due_date::resolve_next_test_date;
use crate::modules::cylinder_tests::core::record::{
    DEFAULT_CYLINDER_QUANTITY, DEFAULT_PAYMENT_MODE, TestRecord, non_blank,
};
use crate::modules::cylinder_tests::use_cases::add_test_record::command::AddTestRecord;
use crate::modules::cylinder_tests::use_cases::add_test_record::decision::{DecideError, Decision};

pub fn decide_add(command: AddTestRecord, generate_serial: impl FnOnce() -> String) -> Decision {
    let Some(customer_name) = non_blank(Some(command.customer_name)) else {
        return Decision::Rejected {
            reason: DecideError::MissingCustomerName,
        };
    };
    let Some(mobile_number) = non_blank(Some(command.mobile_number)) else {
        return Decision::Rejected {
            reason: DecideError::MissingMobileNumber,
        };
    };

    let test_date = command.test_date.unwrap_or(command.received_on);

    Decision::Accepted {
        record: Box::new(TestRecord {
            id: command.record_id,
            serial_number: non_blank(command.serial_number).unwrap_or_else(generate_serial),
            test_date,
            customer_name,
            mobile_number,
            vehicle_number: non_blank(command.vehicle_number),
            vehicle_type: non_blank(command.vehicle_type),
            cylinder_quantity: command
                .cylinder_quantity
                .unwrap_or(DEFAULT_CYLINDER_QUANTITY),
            amount: command.amount,
            payment_mode: non_blank(command.payment_mode)
                .unwrap_or_else(|| DEFAULT_PAYMENT_MODE.to_string()),
            reference_source: non_blank(command.reference_source),
            in_time: non_blank(command.in_time),
            out_time: non_blank(command.out_time),
            remarks: non_blank(command.remarks),
            google_review: command.google_review,
            auto_poster_fixed: command.auto_poster_fixed,
            cng_mini_poster: command.cng_mini_poster,
            next_test_date: Some(resolve_next_test_date(test_date, command.next_test_date)),
            created_at: command.received_at,
            updated_at: command.received_at,
        }),
    }
}
