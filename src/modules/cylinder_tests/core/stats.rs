// Monthly statistics: how many tests were done in each week of a calendar month.
//
// Rules
// - Week index is (day_of_month - 1) / 7, so days 29 to 31 land in a fifth, partial week.
// - Always five buckets, empty ones stay at zero.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::modules::cylinder_tests::core::record::TestRecord;

pub const WEEKS_PER_MONTH: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsPeriodError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("year {0} is out of range")]
    InvalidYear(i32),
}

/// A validated calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsPeriod {
    first_day: NaiveDate,
}

impl StatsPeriod {
    pub fn new(month: u32, year: i32) -> Result<Self, StatsPeriodError> {
        if !(1..=12).contains(&month) {
            return Err(StatsPeriodError::InvalidMonth(month));
        }
        let first_day =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(StatsPeriodError::InvalidYear(year))?;
        Ok(Self { first_day })
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day.year() == self.first_day.year() && day.month() == self.first_day.month()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBucket {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub month: u32,
    pub year: i32,
    pub total_count: usize,
    pub weekly_buckets: [WeeklyBucket; WEEKS_PER_MONTH],
}

pub fn week_index(day: NaiveDate) -> usize {
    (day.day0() / 7) as usize
}

pub fn compute_stats(records: &[TestRecord], period: StatsPeriod) -> MonthlyStats {
    let mut weekly_buckets: [WeeklyBucket; WEEKS_PER_MONTH] =
        std::array::from_fn(|index| WeeklyBucket {
            name: format!("Week {}", index + 1),
            count: 0,
        });

    let in_month: Vec<&TestRecord> = records
        .iter()
        .filter(|record| period.contains(record.test_date))
        .collect();
    for record in &in_month {
        if let Some(bucket) = weekly_buckets.get_mut(week_index(record.test_date)) {
            bucket.count += 1;
        }
    }

    MonthlyStats {
        month: period.month(),
        year: period.year(),
        total_count: in_month.len(),
        weekly_buckets,
    }
}
