//! Transaction records
//!
//! This module defines the append-only transaction history entries the
//! ledger keeps: payments with their round-up savings, and transfers
//! into goals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, TransactionId};

use crate::error::SavingsError;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money coming in (salary, manual transfer into savings)
    Income,
    /// Money going out (a payment; may carry round-up savings)
    Expense,
}

/// A single entry in the transaction history
///
/// Entries are immutable once appended. `rounded_savings` is present
/// only on expenses whose payment was rounded up with a positive delta,
/// and `goal_name` labels the goal the savings were credited to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Income or expense
    pub kind: TransactionKind,
    /// Transaction amount, always positive
    pub amount: Money,
    /// Spending category (e.g. "Food & Dining")
    pub category: String,
    /// Free-form description (e.g. "Grocery Store")
    pub description: String,
    /// Calendar date of the transaction
    pub date: NaiveDate,
    /// Label of the goal credited, if any
    pub goal_name: Option<String>,
    /// Round-up delta credited to goals, if any
    pub rounded_savings: Option<Money>,
}

impl Transaction {
    /// Creates a new transaction
    ///
    /// # Errors
    ///
    /// Returns a validation error if the amount is not positive.
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, SavingsError> {
        if !amount.is_positive() {
            return Err(SavingsError::validation(format!(
                "Transaction amount must be positive, got {}",
                amount
            )));
        }

        Ok(Self {
            id: TransactionId::new_v7(),
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date,
            goal_name: None,
            rounded_savings: None,
        })
    }

    /// Creates an expense entry
    pub fn expense(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, SavingsError> {
        Self::new(TransactionKind::Expense, amount, category, description, date)
    }

    /// Creates an income entry
    pub fn income(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, SavingsError> {
        Self::new(TransactionKind::Income, amount, category, description, date)
    }

    /// Labels the goal the savings were credited to
    pub fn with_goal_name(mut self, goal_name: impl Into<String>) -> Self {
        self.goal_name = Some(goal_name.into());
        self
    }

    /// Attaches the round-up delta credited to goals
    pub fn with_rounded_savings(mut self, delta: Money) -> Self {
        self.rounded_savings = Some(delta);
        self
    }

    /// Returns true if this entry carries round-up savings
    pub fn has_savings(&self) -> bool {
        self.rounded_savings.is_some()
    }
}
