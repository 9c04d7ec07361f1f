//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_savings::{
    Goal, GoalOwnership, GoalPriority, SavingsLedger, SpendingRecord, Transaction,
    TransactionKind,
};

/// Builder for constructing test goals
pub struct TestGoalBuilder {
    name: String,
    target: Money,
    saved: Money,
    priority: GoalPriority,
    ownership: GoalOwnership,
    due_date: Option<NaiveDate>,
}

impl Default for TestGoalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGoalBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            name: "Test Goal".to_string(),
            target: Money::new(dec!(5000), Currency::INR),
            saved: Money::zero(Currency::INR),
            priority: GoalPriority::Medium,
            ownership: GoalOwnership::Individual,
            due_date: None,
        }
    }

    /// Sets the goal name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the target amount
    pub fn with_target(mut self, target: Money) -> Self {
        self.target = target;
        self
    }

    /// Sets the already-saved amount
    pub fn with_saved(mut self, saved: Money) -> Self {
        self.saved = saved;
        self
    }

    /// Sets the priority tier
    pub fn with_priority(mut self, priority: GoalPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Makes the goal collaborative with the given member count
    pub fn collaborative(mut self, members: u32) -> Self {
        self.ownership = GoalOwnership::Collaborative { members };
        self
    }

    /// Sets the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Builds the goal, panicking on invalid test data
    pub fn build(self) -> Goal {
        let mut goal = Goal::new(self.name, self.target, self.priority, self.ownership)
            .expect("test goal should be valid")
            .with_saved(self.saved)
            .expect("test saved amount should be valid");
        goal.due_date = self.due_date;
        goal
    }
}

/// Builder for constructing test transactions
pub struct TestTransactionBuilder {
    kind: TransactionKind,
    amount: Money,
    category: String,
    description: String,
    date: NaiveDate,
    goal_name: Option<String>,
    rounded_savings: Option<Money>,
}

impl Default for TestTransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTransactionBuilder {
    /// Creates a builder with default values (an expense)
    pub fn new() -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount: Money::new(dec!(58), Currency::INR),
            category: "Food & Dining".to_string(),
            description: "Grocery Store".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
            goal_name: None,
            rounded_savings: None,
        }
    }

    /// Makes the transaction an income entry
    pub fn income(mut self) -> Self {
        self.kind = TransactionKind::Income;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the transaction date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Labels the goal credited
    pub fn with_goal_name(mut self, goal_name: impl Into<String>) -> Self {
        self.goal_name = Some(goal_name.into());
        self
    }

    /// Attaches round-up savings
    pub fn with_rounded_savings(mut self, delta: Money) -> Self {
        self.rounded_savings = Some(delta);
        self
    }

    /// Builds the transaction, panicking on invalid test data
    pub fn build(self) -> Transaction {
        let mut txn = Transaction::new(
            self.kind,
            self.amount,
            self.category,
            self.description,
            self.date,
        )
        .expect("test transaction should be valid");
        if let Some(goal_name) = self.goal_name {
            txn = txn.with_goal_name(goal_name);
        }
        if let Some(delta) = self.rounded_savings {
            txn = txn.with_rounded_savings(delta);
        }
        txn
    }
}

/// Builder for constructing test ledgers
pub struct TestLedgerBuilder {
    currency: Currency,
    goals: Vec<Goal>,
    transactions: Vec<Transaction>,
}

impl Default for TestLedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLedgerBuilder {
    /// Creates a builder for an empty INR ledger
    pub fn new() -> Self {
        Self {
            currency: Currency::INR,
            goals: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Sets the ledger currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Adds a goal
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    /// Adds a transaction (newest first, as supplied)
    pub fn with_transaction(mut self, txn: Transaction) -> Self {
        self.transactions.push(txn);
        self
    }

    /// Builds the ledger, panicking on invalid test data
    pub fn build(self) -> SavingsLedger {
        SavingsLedger::with_goals(self.currency, self.goals)
            .expect("test goals should match the ledger currency")
            .with_transactions(self.transactions)
            .expect("test transactions should match the ledger currency")
    }
}

/// Builder for constructing spending records
pub struct TestSpendingRecordBuilder {
    date: NaiveDate,
    amount: Money,
    category: String,
}

impl Default for TestSpendingRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSpendingRecordBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
            amount: Money::new(dec!(500), Currency::INR),
            category: "Food".to_string(),
        }
    }

    /// Sets the record date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Money::new(amount, Currency::INR);
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builds the record
    pub fn build(self) -> SpendingRecord {
        SpendingRecord::new(self.date, self.amount, self.category)
    }
}
