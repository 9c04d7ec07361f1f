//! Fixed spending-history source
//!
//! Serves a configured set of records. Used directly in tests and
//! demos, and as the degraded data set behind
//! [`super::FallbackHistorySource`].

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Currency, DomainPort, Money, PortError};

use crate::ports::{SpendingHistorySource, SpendingRecord};

/// A spending-history source backed by a fixed record set
#[derive(Debug, Clone)]
pub struct FixedHistorySource {
    records: Vec<SpendingRecord>,
}

impl FixedHistorySource {
    /// Creates a source serving the given records
    pub fn new(records: Vec<SpendingRecord>) -> Self {
        Self { records }
    }

    /// Creates a source serving the canned demo history
    pub fn seeded() -> Self {
        let record = |y: i32, m: u32, d: u32, amount, category: &str| {
            SpendingRecord::new(
                NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date"),
                Money::new(amount, Currency::INR),
                category,
            )
        };

        Self::new(vec![
            record(2025, 2, 20, dec!(500), "Food"),
            record(2025, 2, 18, dec!(1200), "Shopping"),
            record(2025, 2, 15, dec!(300), "Entertainment"),
            record(2025, 2, 10, dec!(800), "Transportation"),
            record(2025, 2, 5, dec!(1500), "Bills"),
        ])
    }

    /// Returns the records this source serves
    pub fn records(&self) -> &[SpendingRecord] {
        &self.records
    }
}

impl DomainPort for FixedHistorySource {}

impl SpendingHistorySource for FixedHistorySource {
    fn fetch_history(&self) -> Result<Vec<SpendingRecord>, PortError> {
        Ok(self.records.clone())
    }
}
