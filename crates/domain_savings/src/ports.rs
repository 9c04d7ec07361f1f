//! Savings domain ports
//!
//! The projector consumes a spending history that may come from the
//! ledger itself, a remote transaction service, or fixed test data.
//! `SpendingHistorySource` is the port for that history; adapters in
//! [`crate::adapters`] provide the implementations:
//!
//! - a fixed source for tests and demos
//! - a fallback decorator that degrades a live source to fixed data on
//!   transient failure
//!
//! The port is synchronous: projection never suspends, so any real
//! fetch must have resolved before the core consumes the records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{DomainPort, Money, PortError};

/// A single spending data point consumed by the projector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingRecord {
    /// Calendar date of the spend
    pub date: NaiveDate,
    /// Amount spent
    pub amount: Money,
    /// Spending category (e.g. "Food", "Bills")
    pub category: String,
}

impl SpendingRecord {
    /// Creates a new spending record
    pub fn new(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
        }
    }
}

/// Port supplying the spending history used for projection
///
/// Implementations must return the full history they know about; the
/// projector orders and weights the records itself.
pub trait SpendingHistorySource: DomainPort {
    /// Fetches the spending history
    fn fetch_history(&self) -> Result<Vec<SpendingRecord>, PortError>;
}
