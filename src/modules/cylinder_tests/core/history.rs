// History listing: a plain filter-and-sort over every record, no per-vehicle reduction.

use chrono::NaiveDate;

use crate::modules::cylinder_tests::core::record::{TestRecord, latest_first};
use crate::shared::core::primitives::SearchTerm;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub search: Option<SearchTerm>,
    /// Inclusive. None leaves the lower end open.
    pub start_date: Option<NaiveDate>,
    /// Inclusive. None leaves the upper end open.
    pub end_date: Option<NaiveDate>,
}

impl HistoryFilter {
    pub fn accepts(&self, record: &TestRecord) -> bool {
        let after_start = self
            .start_date
            .is_none_or(|start| record.test_date >= start);
        let before_end = self.end_date.is_none_or(|end| record.test_date <= end);
        let matches_search = self.search.as_ref().is_none_or(|term| {
            term.matches_any([
                Some(record.customer_name.as_str()),
                record.vehicle_number.as_deref(),
                Some(record.mobile_number.as_str()),
                Some(record.serial_number.as_str()),
            ])
        });
        after_start && before_end && matches_search
    }
}

pub fn query_history(records: Vec<TestRecord>, filter: &HistoryFilter) -> Vec<TestRecord> {
    let mut matching: Vec<TestRecord> = records
        .into_iter()
        .filter(|record| filter.accepts(record))
        .collect();
    matching.sort_by(latest_first);
    matching
}
