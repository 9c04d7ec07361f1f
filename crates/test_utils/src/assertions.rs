//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_savings::{AllocationPlan, SavingsLedger};

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more
/// than the tolerance.
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {}",
        money
    );
}

/// Asserts that an allocation plan is internally consistent
///
/// The plan must sum exactly to its delta and carry no negative share.
pub fn assert_plan_consistent(plan: &AllocationPlan) {
    assert_eq!(
        plan.total(),
        plan.delta,
        "Plan shares sum to {} but the delta is {}",
        plan.total(),
        plan.delta
    );
    for share in &plan.shares {
        assert!(
            !share.amount.is_negative(),
            "Share for {} is negative: {}",
            share.goal_name,
            share.amount
        );
    }
}

/// Asserts that the ledger's derived total matches its goals
pub fn assert_total_saved_consistent(ledger: &SavingsLedger) {
    let recomputed = ledger
        .goals()
        .iter()
        .fold(Money::zero(ledger.currency()), |acc, g| acc + g.saved);
    assert_eq!(
        ledger.total_saved(),
        recomputed,
        "Ledger total_saved {} does not match goal sum {}",
        ledger.total_saved(),
        recomputed
    );
}
