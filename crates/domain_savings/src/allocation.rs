//! Priority-weighted allocation
//!
//! Distributes a savings delta across the eligible goals in proportion
//! to their priority weights (High 3, Medium 2, Low 1). The allocator
//! returns a plan; it never mutates goal state itself.
//!
//! Shares are allotted in whole currency units by the largest-remainder
//! method: each goal gets the floor of its exact proportional share,
//! and the leftover units go one each to the goals with the largest
//! fractional remainders (ties broken by higher weight, then encounter
//! order). Any sub-unit fraction of the delta goes to the primary goal.
//! Every plan therefore sums exactly to the delta, with no goal driven
//! negative by independent rounding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{GoalId, Money, MoneyError};

use crate::error::SavingsError;
use crate::goal::Goal;

/// One goal's cut of an allocation plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalShare {
    /// Goal receiving the share
    pub goal_id: GoalId,
    /// Goal label, carried for transaction labelling
    pub goal_name: String,
    /// Amount to credit, never negative
    pub amount: Money,
}

/// A plan for distributing a delta across goals
///
/// Produced by [`allocate`]; applied by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    /// The delta being distributed
    pub delta: Money,
    /// Per-goal shares, in the order the goals were supplied
    pub shares: Vec<GoalShare>,
    /// The highest-priority goal (first encountered on ties), used to
    /// label the resulting transaction. None for a zero-delta plan.
    pub primary: Option<GoalId>,
}

impl AllocationPlan {
    /// A plan that distributes nothing
    fn empty(delta: Money) -> Self {
        Self {
            delta,
            shares: Vec::new(),
            primary: None,
        }
    }

    /// Returns true if the plan credits nothing
    pub fn is_noop(&self) -> bool {
        self.shares.is_empty()
    }

    /// Returns the sum of all shares
    pub fn total(&self) -> Money {
        self.shares
            .iter()
            .fold(Money::zero(self.delta.currency()), |acc, s| acc + s.amount)
    }

    /// Returns the share planned for a goal, if any
    pub fn share_for(&self, goal_id: GoalId) -> Option<&GoalShare> {
        self.shares.iter().find(|s| s.goal_id == goal_id)
    }

    /// Returns the primary goal's share, if any
    pub fn primary_share(&self) -> Option<&GoalShare> {
        self.primary.and_then(|id| self.share_for(id))
    }
}

/// Distributes a delta across the eligible goals by priority weight
///
/// The caller supplies the eligible set (individual goals only); the
/// allocator takes it verbatim.
///
/// # Errors
///
/// - negative delta
/// - positive delta with an empty eligible set (`NoEligibleGoals`)
/// - a goal priced in a different currency than the delta
pub fn allocate(delta: Money, goals: &[Goal]) -> Result<AllocationPlan, SavingsError> {
    if delta.is_negative() {
        return Err(SavingsError::validation(format!(
            "Cannot allocate a negative delta: {}",
            delta
        )));
    }
    if delta.is_zero() {
        // Nothing to distribute; valid regardless of the goal set
        return Ok(AllocationPlan::empty(delta));
    }
    if goals.is_empty() {
        return Err(SavingsError::NoEligibleGoals);
    }
    for goal in goals {
        if goal.target.currency() != delta.currency() {
            return Err(SavingsError::Money(MoneyError::CurrencyMismatch(
                delta.currency().to_string(),
                goal.target.currency().to_string(),
            )));
        }
    }

    let total_weight: u32 = goals.iter().map(Goal::weight).sum();
    let total_weight = Decimal::from(total_weight);

    // Primary: numerically highest weight, first encountered on ties
    let mut primary_idx = 0;
    for (i, goal) in goals.iter().enumerate().skip(1) {
        if goal.weight() > goals[primary_idx].weight() {
            primary_idx = i;
        }
    }

    let exact: Vec<Decimal> = goals
        .iter()
        .map(|g| delta.amount() * Decimal::from(g.weight()) / total_weight)
        .collect();
    let mut units: Vec<Decimal> = exact.iter().map(|q| q.floor()).collect();

    // Hand the leftover whole units to the largest fractional remainders
    let allotted: Decimal = units.iter().copied().sum();
    let mut leftover = (delta.amount().floor() - allotted)
        .to_i64()
        .unwrap_or(0);
    let mut order: Vec<usize> = (0..goals.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - units[a];
        let rb = exact[b] - units[b];
        rb.cmp(&ra)
            .then(goals[b].weight().cmp(&goals[a].weight()))
            .then(a.cmp(&b))
    });
    for &i in &order {
        if leftover <= 0 {
            break;
        }
        units[i] += Decimal::ONE;
        leftover -= 1;
    }

    // The sub-unit fraction of the delta belongs to the primary goal
    units[primary_idx] += delta.amount() - delta.amount().floor();

    let shares = goals
        .iter()
        .zip(units)
        .map(|(goal, amount)| GoalShare {
            goal_id: goal.id,
            goal_name: goal.name.clone(),
            amount: Money::new(amount, delta.currency()),
        })
        .collect();

    Ok(AllocationPlan {
        delta,
        shares,
        primary: Some(goals[primary_idx].id),
    })
}
