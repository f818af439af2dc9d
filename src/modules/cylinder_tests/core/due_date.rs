// Re-test due-date calculation.
//
// Rules
// - A cylinder must be re-tested three calendar years after its test date.
// - Feb 29 clamps to Feb 28 when the target year is not a leap year.
// - Computed once when a record is created; edits never recompute it.

use chrono::{Months, NaiveDate};

pub const RETEST_INTERVAL_YEARS: u32 = 3;

pub fn next_test_date(test_date: NaiveDate) -> NaiveDate {
    // checked_add_months clamps to the last valid day of the target month.
    test_date
        .checked_add_months(Months::new(RETEST_INTERVAL_YEARS * 12))
        .unwrap_or(NaiveDate::MAX)
}

/// Keep an explicit due date; otherwise derive it from the test date.
pub fn resolve_next_test_date(test_date: NaiveDate, explicit: Option<NaiveDate>) -> NaiveDate {
    explicit.unwrap_or_else(|| next_test_date(test_date))
}
