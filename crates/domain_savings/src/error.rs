//! Savings domain errors

use core_kernel::{MoneyError, PortError};
use thiserror::Error;

/// Errors that can occur in the savings domain
///
/// Every error is recoverable: it aborts the single requested operation
/// and leaves the ledger exactly as it was before the call.
#[derive(Debug, Error)]
pub enum SavingsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    #[error("No individual goals eligible for allocation")]
    NoEligibleGoals,

    #[error("Projection requires at least one historical transaction")]
    InsufficientHistory,

    #[error("Cannot project completion: monthly savings rate is zero under the current plan")]
    DegenerateProjection,

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("History source error: {0}")]
    Source(#[from] PortError),
}

impl SavingsError {
    pub fn validation(message: impl Into<String>) -> Self {
        SavingsError::Validation(message.into())
    }
}
