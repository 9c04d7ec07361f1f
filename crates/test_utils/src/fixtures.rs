//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the
//! savings system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_savings::{
    Goal, GoalOwnership, GoalPriority, SavingsLedger, SpendingRecord, Transaction,
};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A small payment that rounds up by 2 (58 -> 60)
    pub fn inr_payment() -> Money {
        Money::new(dec!(58), Currency::INR)
    }

    /// A large payment that rounds up by 3 (137 -> 140)
    pub fn inr_large_payment() -> Money {
        Money::new(dec!(137), Currency::INR)
    }

    /// A standard INR amount for testing
    pub fn inr_100() -> Money {
        Money::new(dec!(100.00), Currency::INR)
    }

    /// A zero INR amount
    pub fn inr_zero() -> Money {
        Money::zero(Currency::INR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The reference "today" used by deterministic projections
    pub fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    /// A deadline 30 days past [`Self::as_of`]
    pub fn deadline_in_30_days() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
    }

    /// A deadline six months past [`Self::as_of`]
    pub fn deadline_in_6_months() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    /// A date before [`Self::as_of`], for invalid-deadline tests
    pub fn past_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }
}

/// Fixture for goal test data
pub struct GoalFixtures;

impl GoalFixtures {
    /// High-priority individual goal: 2000 target, 1500 saved
    pub fn earphones() -> Goal {
        Goal::new(
            "New Earphones",
            Money::new(dec!(2000), Currency::INR),
            GoalPriority::High,
            GoalOwnership::Individual,
        )
        .unwrap()
        .with_saved(Money::new(dec!(1500), Currency::INR))
        .unwrap()
    }

    /// Medium-priority individual goal: 6000 target, 1800 saved
    pub fn vacation() -> Goal {
        Goal::new(
            "Vacation",
            Money::new(dec!(6000), Currency::INR),
            GoalPriority::Medium,
            GoalOwnership::Individual,
        )
        .unwrap()
        .with_saved(Money::new(dec!(1800), Currency::INR))
        .unwrap()
    }

    /// Low-priority individual goal: 1800 target, 342 saved
    pub fn shirt() -> Goal {
        Goal::new(
            "New Shirt",
            Money::new(dec!(1800), Currency::INR),
            GoalPriority::Low,
            GoalOwnership::Individual,
        )
        .unwrap()
        .with_saved(Money::new(dec!(342), Currency::INR))
        .unwrap()
    }

    /// Collaborative goal, excluded from automatic distribution
    pub fn group_trip() -> Goal {
        Goal::new(
            "Group Trip",
            Money::new(dec!(25000), Currency::INR),
            GoalPriority::Medium,
            GoalOwnership::Collaborative { members: 4 },
        )
        .unwrap()
        .with_saved(Money::new(dec!(5000), Currency::INR))
        .unwrap()
    }

    /// The standard mix: three individual tiers plus one collaborative
    pub fn standard_set() -> Vec<Goal> {
        vec![
            Self::earphones(),
            Self::vacation(),
            Self::shirt(),
            Self::group_trip(),
        ]
    }
}

/// Fixture for ledger test data
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// An empty INR ledger
    pub fn empty() -> SavingsLedger {
        SavingsLedger::new(Currency::INR)
    }

    /// An INR ledger seeded with [`GoalFixtures::standard_set`]
    pub fn seeded() -> SavingsLedger {
        SavingsLedger::with_goals(Currency::INR, GoalFixtures::standard_set()).unwrap()
    }

    /// [`Self::seeded`] with a short transaction history
    pub fn seeded_with_history() -> SavingsLedger {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let inr = |amount| Money::new(amount, Currency::INR);

        let transactions = vec![
            Transaction::expense(inr(dec!(58.99)), "Food & Dining", "Grocery Store", date(2025, 2, 28))
                .unwrap()
                .with_goal_name("New Earphones")
                .with_rounded_savings(inr(dec!(1.01))),
            Transaction::income(inr(dec!(25000.00)), "Salary", "Monthly Salary", date(2025, 2, 25))
                .unwrap(),
            Transaction::expense(inr(dec!(12.50)), "Transportation", "Uber Ride", date(2025, 2, 24))
                .unwrap()
                .with_goal_name("Vacation")
                .with_rounded_savings(inr(dec!(2.50))),
        ];

        Self::seeded().with_transactions(transactions).unwrap()
    }
}

/// Fixture for spending-history test data
pub struct HistoryFixtures;

impl HistoryFixtures {
    /// Five spending records across categories, mixed order
    pub fn spending_records() -> Vec<SpendingRecord> {
        let record = |y: i32, m: u32, d: u32, amount, category: &str| {
            SpendingRecord::new(
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                Money::new(amount, Currency::INR),
                category,
            )
        };

        vec![
            record(2025, 2, 20, dec!(500), "Food"),
            record(2025, 2, 18, dec!(1200), "Shopping"),
            record(2025, 2, 15, dec!(300), "Entertainment"),
            record(2025, 2, 10, dec!(800), "Transportation"),
            record(2025, 2, 5, dec!(1500), "Bills"),
        ]
    }

    /// A single-record history
    pub fn single_record(amount: Money) -> Vec<SpendingRecord> {
        vec![SpendingRecord::new(
            NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
            amount,
            "Misc",
        )]
    }
}
