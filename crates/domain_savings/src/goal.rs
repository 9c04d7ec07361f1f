//! Savings goal entity
//!
//! This module defines the Goal entity, its priority tiers, and its
//! ownership model. Collaborative goals are shared with other members
//! and sit outside automatic round-up distribution.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{GoalId, Money};

use crate::error::SavingsError;

/// Priority tier of a goal
///
/// The tier maps to a numeric weight used for proportional allocation:
/// High = 3, Medium = 2, Low = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl GoalPriority {
    /// Returns the allocation weight for this tier
    pub fn weight(&self) -> u32 {
        match self {
            GoalPriority::High => 3,
            GoalPriority::Medium => 2,
            GoalPriority::Low => 1,
        }
    }
}

/// Ownership model of a goal
///
/// Only individual goals participate in automatic round-up and
/// priority distribution. A collaborative goal always has at least
/// two members; the invariant is enforced at goal construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoalOwnership {
    /// Owned by a single user
    Individual,
    /// Shared with other members
    Collaborative { members: u32 },
}

/// Lifecycle status of a goal, derived from saved vs. target
///
/// Never stored: a goal is Achieved exactly when `saved >= target`,
/// so the status and the amounts cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    /// Still saving towards the target
    Active,
    /// Saved amount has reached the target
    Achieved,
}

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,
    /// Display label
    pub name: String,
    /// Savings target, always positive
    pub target: Money,
    /// Amount saved so far, never negative, never decreased
    pub saved: Money,
    /// Priority tier for allocation weighting
    pub priority: GoalPriority,
    /// Individual or collaborative
    pub ownership: GoalOwnership,
    /// Optional due date; required for projection
    pub due_date: Option<NaiveDate>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Creates a new goal with zero savings
    ///
    /// # Errors
    ///
    /// - empty (or whitespace-only) name
    /// - non-positive target
    /// - collaborative ownership with fewer than two members
    pub fn new(
        name: impl Into<String>,
        target: Money,
        priority: GoalPriority,
        ownership: GoalOwnership,
    ) -> Result<Self, SavingsError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SavingsError::validation("Goal name must not be empty"));
        }
        if !target.is_positive() {
            return Err(SavingsError::validation(format!(
                "Goal target must be positive, got {}",
                target
            )));
        }
        if let GoalOwnership::Collaborative { members } = ownership {
            if members < 2 {
                return Err(SavingsError::validation(format!(
                    "Collaborative goals need at least 2 members, got {}",
                    members
                )));
            }
        }

        Ok(Self {
            id: GoalId::new_v7(),
            name,
            target,
            saved: Money::zero(target.currency()),
            priority,
            ownership,
            due_date: None,
            created_at: Utc::now(),
        })
    }

    /// Sets the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Seeds an already-saved amount (ledger initialization only)
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or in a different
    /// currency than the target.
    pub fn with_saved(mut self, saved: Money) -> Result<Self, SavingsError> {
        if saved.currency() != self.target.currency() {
            return Err(SavingsError::validation(format!(
                "Saved amount currency {} does not match target currency {}",
                saved.currency(),
                self.target.currency()
            )));
        }
        if saved.is_negative() {
            return Err(SavingsError::validation(format!(
                "Saved amount must not be negative, got {}",
                saved
            )));
        }
        self.saved = saved;
        Ok(self)
    }

    /// Returns true for individually-owned goals
    pub fn is_individual(&self) -> bool {
        matches!(self.ownership, GoalOwnership::Individual)
    }

    /// Returns the allocation weight of this goal's priority tier
    pub fn weight(&self) -> u32 {
        self.priority.weight()
    }

    /// Returns the amount still needed to reach the target
    ///
    /// Negative when the goal has been over-saved.
    pub fn remaining(&self) -> Money {
        self.target - self.saved
    }

    /// Returns progress towards the target as a percentage, capped at 100
    pub fn progress_percent(&self) -> Decimal {
        let pct = self.saved.amount() / self.target.amount() * dec!(100);
        pct.min(dec!(100))
    }

    /// Returns the derived lifecycle status
    pub fn status(&self) -> GoalStatus {
        if self.saved.amount() >= self.target.amount() {
            GoalStatus::Achieved
        } else {
            GoalStatus::Active
        }
    }

    /// Credits an allocation share to this goal
    ///
    /// Savings only ever grow; a negative amount is rejected.
    pub(crate) fn credit(&mut self, amount: &Money) -> Result<(), SavingsError> {
        if amount.is_negative() {
            return Err(SavingsError::validation(format!(
                "Cannot credit a negative amount: {}",
                amount
            )));
        }
        self.saved = self.saved.checked_add(amount)?;
        Ok(())
    }
}

/// Input for creating a goal through the ledger
///
/// Carries the user's form data; defaults match a fresh goal form
/// (medium priority, individual, no due date). Validation happens in
/// [`Goal::new`] when the draft is realised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDraft {
    /// Display label
    pub name: String,
    /// Savings target
    pub target: Money,
    /// Priority tier
    pub priority: GoalPriority,
    /// Ownership model
    pub ownership: GoalOwnership,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
}

impl GoalDraft {
    /// Creates a draft with default priority and ownership
    pub fn new(name: impl Into<String>, target: Money) -> Self {
        Self {
            name: name.into(),
            target,
            priority: GoalPriority::Medium,
            ownership: GoalOwnership::Individual,
            due_date: None,
        }
    }

    /// Sets the priority tier
    pub fn with_priority(mut self, priority: GoalPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Makes the goal collaborative with the given member count
    pub fn with_members(mut self, members: u32) -> Self {
        self.ownership = GoalOwnership::Collaborative { members };
        self
    }

    /// Sets the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Realises the draft into a validated goal
    pub(crate) fn build(self) -> Result<Goal, SavingsError> {
        let mut goal = Goal::new(self.name, self.target, self.priority, self.ownership)?;
        goal.due_date = self.due_date;
        Ok(goal)
    }
}
