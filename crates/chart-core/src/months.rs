// File: crates/chart-core/src/months.rs
// Summary: Inclusive month ranges and the short "Sep 21" labels that form the x domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Longest accepted range: one hundred years of months.
pub const MAX_MONTHS: u64 = 1200;

/// Inclusive month range. Months are 0-based (0 = January, 11 = December).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start_year: i32,
    pub start_month: u32,
    pub end_year: i32,
    pub end_month: u32,
}

impl Default for DateRange {
    /// September 2021 through December 2025.
    fn default() -> Self {
        Self { start_year: 2021, start_month: 8, end_year: 2025, end_month: 11 }
    }
}

impl DateRange {
    pub const fn new(start_year: i32, start_month: u32, end_year: i32, end_month: u32) -> Self {
        Self { start_year, start_month, end_year, end_month }
    }

    fn ordinal(year: i32, month: u32) -> i64 {
        year as i64 * 12 + month as i64
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        for month in [self.start_month, self.end_month] {
            if month > 11 {
                return Err(ChartError::InvalidMonth { month });
            }
        }
        if Self::ordinal(self.end_year, self.end_month) < Self::ordinal(self.start_year, self.start_month) {
            return Err(ChartError::InvalidDateRange {
                start_year: self.start_year,
                start_month: self.start_month,
                end_year: self.end_year,
                end_month: self.end_month,
            });
        }
        let months = self.month_count() as u64;
        if months > MAX_MONTHS {
            return Err(ChartError::RangeTooLong { months, max: MAX_MONTHS });
        }
        Ok(())
    }

    /// Number of months in the range, both ends included.
    pub fn month_count(&self) -> usize {
        let span = Self::ordinal(self.end_year, self.end_month)
            - Self::ordinal(self.start_year, self.start_month)
            + 1;
        span.max(0) as usize
    }

    /// `(year, 0-based month)` for every month in order.
    pub fn months(&self) -> impl Iterator<Item = (i32, u32)> {
        let first = Self::ordinal(self.start_year, self.start_month);
        (0..self.month_count() as i64).map(move |k| {
            let o = first + k;
            (o.div_euclid(12) as i32, o.rem_euclid(12) as u32)
        })
    }

    /// Chronological labels such as `"Sep 21"`.
    pub fn labels(&self) -> Vec<String> {
        self.months().map(|(y, m)| month_label(y, m)).collect()
    }
}

/// Abbreviated English month name plus two-digit year.
pub fn month_label(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month + 1, 1) {
        Some(d) => d.format("%b %y").to_string(),
        // chrono's supported year range is far wider than any chart needs
        None => format!("{}/{:02}", month + 1, year.rem_euclid(100)),
    }
}
