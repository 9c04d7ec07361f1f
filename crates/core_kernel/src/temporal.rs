//! Calendar-date helpers
//!
//! Savings goals operate on plain calendar dates: transaction dates,
//! goal due dates, and projection deadlines. This module provides the
//! date arithmetic the domain needs (whole-day countdowns and
//! calendar-month stepping) on top of chrono's NaiveDate.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("Unrepresentable date: {0}")]
    UnrepresentableDate(String),
}

/// Returns the number of whole days from `from` to `to`
///
/// Negative when `to` lies before `from`.
pub fn whole_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Returns the countdown to a deadline, floored at one day
///
/// A deadline on or before `as_of` still counts as a single day so that
/// per-day rate calculations never divide by zero or go negative.
pub fn days_left(as_of: NaiveDate, deadline: NaiveDate) -> i64 {
    whole_days_between(as_of, deadline).max(1)
}

/// Steps a date forward by whole calendar months
///
/// The day of month is clamped when the target month is shorter
/// (Jan 31 + 1 month = Feb 28/29). Falls back to 30-day steps for the
/// far-future dates chrono cannot represent by month arithmetic.
pub fn add_calendar_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .or_else(|| date.checked_add_signed(chrono::Duration::days(30 * months as i64)))
        .unwrap_or(NaiveDate::MAX)
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range; `start` must not be after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the range contains the given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the number of whole days spanned by the range
    pub fn days(&self) -> i64 {
        whole_days_between(self.start, self.end)
    }
}
