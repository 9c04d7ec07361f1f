//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::{Currency, Money};
use domain_savings::{Goal, GoalOwnership, GoalPriority, SpendingRecord};

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::INR),
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
    ]
}

/// Strategy for generating positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..100_000_00i64
}

/// Strategy for generating positive INR Money values
pub fn positive_inr_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|minor| Money::from_minor(minor, Currency::INR))
}

/// Strategy for generating goal priorities
pub fn priority_strategy() -> impl Strategy<Value = GoalPriority> {
    prop_oneof![
        Just(GoalPriority::High),
        Just(GoalPriority::Medium),
        Just(GoalPriority::Low),
    ]
}

/// Strategy for generating individual INR goals with valid invariants
pub fn individual_goal_strategy() -> impl Strategy<Value = Goal> {
    (positive_amount_minor_strategy(), priority_strategy()).prop_map(|(target, priority)| {
        Goal::new(
            "property goal",
            Money::from_minor(target, Currency::INR),
            priority,
            GoalOwnership::Individual,
        )
        .expect("generated goal satisfies invariants")
    })
}

/// Strategy for generating non-empty individual goal sets
pub fn goal_set_strategy() -> impl Strategy<Value = Vec<Goal>> {
    prop::collection::vec(individual_goal_strategy(), 1..8)
}

/// Strategy for generating calendar dates in early 2025
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1u32..=90u32).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(offset as i64 - 1)
    })
}

/// Strategy for generating INR spending records
pub fn spending_record_strategy() -> impl Strategy<Value = SpendingRecord> {
    (date_strategy(), positive_amount_minor_strategy())
        .prop_map(|(date, minor)| {
            SpendingRecord::new(date, Money::from_minor(minor, Currency::INR), "Misc")
        })
}

/// Strategy for generating non-empty spending histories
pub fn spending_history_strategy() -> impl Strategy<Value = Vec<SpendingRecord>> {
    prop::collection::vec(spending_record_strategy(), 1..20)
}
