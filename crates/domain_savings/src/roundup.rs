//! Round-up calculation
//!
//! A payment is rounded up to the next multiple of a step size and the
//! difference becomes a savings contribution. Small payments round to
//! the nearest 5, larger ones to the nearest 10.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::error::SavingsError;

/// Step size for payments below the threshold
pub const SMALL_STEP: Decimal = dec!(5);

/// Step size for payments at or above the threshold
pub const LARGE_STEP: Decimal = dec!(10);

/// Payment size at which the step switches from 5 to 10
pub const STEP_THRESHOLD: Decimal = dec!(100);

/// Result of rounding a payment up to its step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundUp {
    /// The payment rounded up to the next step multiple
    pub rounded: Money,
    /// Savings contribution: `rounded - amount`, within `[0, step)`
    pub delta: Money,
}

impl RoundUp {
    /// Returns true if the payment was already on a step boundary
    ///
    /// A zero delta is a valid outcome, not an error: nothing is saved
    /// for that payment.
    pub fn is_exact(&self) -> bool {
        self.delta.is_zero()
    }
}

/// Returns the step size applicable to a payment amount
pub fn step_for(amount: Decimal) -> Decimal {
    if amount < STEP_THRESHOLD {
        SMALL_STEP
    } else {
        LARGE_STEP
    }
}

/// Rounds a payment up to the next step multiple
///
/// `rounded = ceil(amount / step) * step`, so an amount already on a
/// step boundary rounds to itself and saves nothing.
///
/// # Errors
///
/// Returns a validation error if the amount is not positive.
pub fn round_up(amount: Money) -> Result<RoundUp, SavingsError> {
    if !amount.is_positive() {
        return Err(SavingsError::validation(format!(
            "Payment amount must be positive, got {}",
            amount
        )));
    }

    let step = step_for(amount.amount());
    let rounded = Money::new(
        (amount.amount() / step).ceil() * step,
        amount.currency(),
    );
    let delta = rounded.checked_sub(&amount)?;

    Ok(RoundUp { rounded, delta })
}
