//! The savings ledger
//!
//! This module provides the mutable aggregate owning goals and the
//! transaction history. It is the only component permitted to write:
//! the round-up calculator, the allocator, and the projector all hand
//! back values that the ledger applies.
//!
//! # Invariants
//!
//! - `total_saved` always equals the sum of goal `saved` amounts
//! - transactions are append-only, newest first
//! - every operation either fully applies or leaves state untouched
//! - goals and transactions share the ledger's single currency
//!
//! Mutations plan first and commit after validation, so a failed call
//! never leaves a partial allocation behind. Hosts running a ledger
//! across threads must serialize mutations per instance (a mutex or a
//! single-writer task); the derived totals assume no interleaving.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::{Currency, DateRange, GoalId, Money, MoneyError};

use crate::allocation::{allocate, AllocationPlan};
use crate::error::SavingsError;
use crate::goal::{Goal, GoalDraft};
use crate::ports::SpendingRecord;
use crate::projection::{project, GoalProjection};
use crate::roundup::round_up;
use crate::transaction::{Transaction, TransactionKind};

/// Income and expense totals over a transaction view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// Sum of income amounts
    pub income: Money,
    /// Sum of expense amounts
    pub expense: Money,
    /// Income minus expense
    pub balance: Money,
}

/// The savings ledger aggregate
///
/// Owns all goal and transaction state for one user. UI layers hold
/// read-only views of its snapshots; nothing outside the ledger keeps
/// a mutable reference across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsLedger {
    /// Ledger currency; every goal and transaction is priced in it
    currency: Currency,
    /// Goals, in creation order (order carries no meaning beyond display)
    goals: Vec<Goal>,
    /// Transaction history, newest first by insertion
    transactions: Vec<Transaction>,
    /// Derived: sum of goal `saved` amounts, refreshed on every mutation
    total_saved: Money,
}

impl SavingsLedger {
    /// Creates an empty ledger in the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            goals: Vec::new(),
            transactions: Vec::new(),
            total_saved: Money::zero(currency),
        }
    }

    /// Creates a ledger seeded with existing goals
    ///
    /// # Errors
    ///
    /// Returns an error if any goal is priced in a different currency.
    pub fn with_goals(currency: Currency, goals: Vec<Goal>) -> Result<Self, SavingsError> {
        for goal in &goals {
            if goal.target.currency() != currency {
                return Err(SavingsError::Money(MoneyError::CurrencyMismatch(
                    currency.to_string(),
                    goal.target.currency().to_string(),
                )));
            }
        }

        let mut ledger = Self {
            currency,
            goals,
            transactions: Vec::new(),
            total_saved: Money::zero(currency),
        };
        ledger.refresh_total_saved();
        Ok(ledger)
    }

    /// Seeds the transaction history (newest first, as supplied)
    ///
    /// # Errors
    ///
    /// Returns an error if any transaction is priced in a different
    /// currency.
    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Result<Self, SavingsError> {
        for txn in &transactions {
            if txn.amount.currency() != self.currency {
                return Err(SavingsError::Money(MoneyError::CurrencyMismatch(
                    self.currency.to_string(),
                    txn.amount.currency().to_string(),
                )));
            }
        }
        self.transactions = transactions;
        Ok(self)
    }

    /// Returns the ledger currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns all goals
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Returns a goal by id
    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Returns the transaction history, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the total saved across all goals
    pub fn total_saved(&self) -> Money {
        self.total_saved
    }

    /// Returns transactions of one kind, newest first
    pub fn transactions_of_kind(&self, kind: TransactionKind) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.kind == kind).collect()
    }

    /// Returns transactions grouped by calendar date, dates descending
    ///
    /// Within a date, entries keep their insertion order. This is the
    /// grouping history screens render.
    pub fn transactions_by_date(&self) -> Vec<(NaiveDate, Vec<&Transaction>)> {
        let mut grouped: Vec<(NaiveDate, Vec<&Transaction>)> = Vec::new();
        for txn in &self.transactions {
            match grouped.iter_mut().find(|(date, _)| *date == txn.date) {
                Some((_, entries)) => entries.push(txn),
                None => grouped.push((txn.date, vec![txn])),
            }
        }
        grouped.sort_by(|a, b| b.0.cmp(&a.0));
        grouped
    }

    /// Returns transactions dated within the given range, newest first
    pub fn transactions_in_range(&self, range: DateRange) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| range.contains(t.date))
            .collect()
    }

    /// Returns the round-up trail: expenses that credited savings
    pub fn savings_entries(&self) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.has_savings()).collect()
    }

    /// Returns income/expense totals over the whole history
    pub fn summary(&self) -> TransactionSummary {
        let mut income = Money::zero(self.currency);
        let mut expense = Money::zero(self.currency);

        for txn in &self.transactions {
            match txn.kind {
                TransactionKind::Income => income = income + txn.amount,
                TransactionKind::Expense => expense = expense + txn.amount,
            }
        }

        TransactionSummary {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Pays an amount, rounds it up, and spreads the delta across the
    /// individual goals by priority
    ///
    /// Appends an expense transaction; when the delta is positive it
    /// carries the delta as `rounded_savings` and the primary goal's
    /// name. A payment already on a step boundary saves nothing and
    /// appends a plain expense.
    ///
    /// # Errors
    ///
    /// - non-positive amount or currency mismatch
    /// - positive delta with no individual goals (`NoEligibleGoals`)
    ///
    /// State is untouched on every error path.
    pub fn apply_round_up(
        &mut self,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&Transaction, SavingsError> {
        self.check_currency(amount)?;

        let roundup = round_up(amount)?;
        let eligible: Vec<Goal> = self
            .goals
            .iter()
            .filter(|g| g.is_individual())
            .cloned()
            .collect();
        let plan = allocate(roundup.delta, &eligible)?;

        let mut txn = Transaction::expense(amount, category, description, today())?;
        if !roundup.delta.is_zero() {
            txn = txn.with_rounded_savings(roundup.delta);
            if let Some(primary) = plan.primary_share() {
                txn = txn.with_goal_name(primary.goal_name.clone());
            }
        }

        // Commit point: nothing below can fail
        self.apply_plan(&plan);
        info!(
            amount = %amount,
            saved = %roundup.delta,
            goal = txn.goal_name.as_deref().unwrap_or("-"),
            "Applied round-up payment"
        );
        Ok(self.push_transaction(txn))
    }

    /// Transfers an amount into savings
    ///
    /// With a target goal the full amount credits that goal; without
    /// one it spreads across the individual goals by priority. Appends
    /// an income transaction either way.
    ///
    /// # Errors
    ///
    /// - non-positive amount or currency mismatch
    /// - unknown target goal (`GoalNotFound`)
    /// - untargeted transfer with no individual goals (`NoEligibleGoals`)
    ///
    /// State is untouched on every error path.
    pub fn apply_manual_transfer(
        &mut self,
        amount: Money,
        target: Option<GoalId>,
    ) -> Result<&Transaction, SavingsError> {
        self.check_currency(amount)?;
        if !amount.is_positive() {
            return Err(SavingsError::validation(format!(
                "Transfer amount must be positive, got {}",
                amount
            )));
        }

        match target {
            Some(goal_id) => {
                let goal = self
                    .goals
                    .iter_mut()
                    .find(|g| g.id == goal_id)
                    .ok_or_else(|| SavingsError::GoalNotFound(goal_id.to_string()))?;
                let goal_name = goal.name.clone();

                let txn = Transaction::income(
                    amount,
                    "Savings",
                    format!("Transfer to {}", goal_name),
                    today(),
                )?
                .with_goal_name(goal_name.clone());

                // Commit point
                goal.credit(&amount)
                    .expect("validated transfer amount is creditable");
                self.refresh_total_saved();
                info!(amount = %amount, goal = %goal_name, "Applied targeted transfer");
                Ok(self.push_transaction(txn))
            }
            None => {
                let eligible: Vec<Goal> = self
                    .goals
                    .iter()
                    .filter(|g| g.is_individual())
                    .cloned()
                    .collect();
                let plan = allocate(amount, &eligible)?;

                let mut txn = Transaction::income(
                    amount,
                    "Savings",
                    "Transfer across goals",
                    today(),
                )?;
                if let Some(primary) = plan.primary_share() {
                    txn = txn.with_goal_name(primary.goal_name.clone());
                }

                // Commit point
                self.apply_plan(&plan);
                info!(amount = %amount, "Applied spread transfer");
                Ok(self.push_transaction(txn))
            }
        }
    }

    /// Creates a goal from a draft
    ///
    /// # Errors
    ///
    /// Propagates draft validation failures (empty name, non-positive
    /// target, short-handed collaborative goal) and rejects a target
    /// priced in a different currency.
    pub fn create_goal(&mut self, draft: GoalDraft) -> Result<&Goal, SavingsError> {
        self.check_currency(draft.target)?;
        let goal = draft.build()?;

        debug!(goal = %goal.name, target = %goal.target, "Created goal");
        self.goals.push(goal);
        self.refresh_total_saved();
        Ok(&self.goals[self.goals.len() - 1])
    }

    /// Projects a goal against the ledger's own spending history
    ///
    /// Read-only. The history handed to the projector is the expense
    /// side of the ledger; income entries say nothing about spending.
    ///
    /// # Errors
    ///
    /// Unknown goal id, plus all projection errors; see
    /// [`crate::projection::project`].
    pub fn project(&self, goal_id: GoalId, deadline: NaiveDate) -> Result<GoalProjection, SavingsError> {
        self.project_as_of(goal_id, deadline, today())
    }

    /// [`Self::project`] with an explicit "today", for deterministic use
    pub fn project_as_of(
        &self,
        goal_id: GoalId,
        deadline: NaiveDate,
        as_of: NaiveDate,
    ) -> Result<GoalProjection, SavingsError> {
        let goal = self
            .goal(goal_id)
            .ok_or_else(|| SavingsError::GoalNotFound(goal_id.to_string()))?;

        let history: Vec<SpendingRecord> = self
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| SpendingRecord::new(t.date, t.amount, t.category.clone()))
            .collect();

        project(goal, deadline, &history, as_of)
    }

    fn check_currency(&self, amount: Money) -> Result<(), SavingsError> {
        if amount.currency() != self.currency {
            return Err(SavingsError::Money(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                amount.currency().to_string(),
            )));
        }
        Ok(())
    }

    /// Credits every share of a validated plan
    ///
    /// The plan was built from this ledger's goals moments ago, so the
    /// lookups and credits cannot fail.
    fn apply_plan(&mut self, plan: &AllocationPlan) {
        for share in &plan.shares {
            if share.amount.is_zero() {
                continue;
            }
            let goal = self
                .goals
                .iter_mut()
                .find(|g| g.id == share.goal_id)
                .expect("allocated goal exists in the ledger");
            goal.credit(&share.amount)
                .expect("validated share is creditable");
        }
        self.refresh_total_saved();
    }

    fn push_transaction(&mut self, txn: Transaction) -> &Transaction {
        self.transactions.insert(0, txn);
        &self.transactions[0]
    }

    fn refresh_total_saved(&mut self) {
        self.total_saved = self
            .goals
            .iter()
            .fold(Money::zero(self.currency), |acc, g| acc + g.saved);
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Progress towards a target as a capped percentage
///
/// Shared by ledger consumers that render progress bars; mirrors
/// [`Goal::progress_percent`] for ad-hoc pairs of amounts.
pub fn progress_percent(saved: Money, target: Money) -> Decimal {
    if !target.is_positive() {
        return Decimal::ZERO;
    }
    let pct = saved.amount() / target.amount() * Decimal::ONE_HUNDRED;
    pct.min(Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::{GoalOwnership, GoalPriority};
    use rust_decimal_macros::dec;

    fn inr(amount: Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    fn seeded_ledger() -> SavingsLedger {
        let goals = vec![
            Goal::new(
                "New Earphones",
                inr(dec!(2000)),
                GoalPriority::High,
                GoalOwnership::Individual,
            )
            .unwrap()
            .with_saved(inr(dec!(1500)))
            .unwrap(),
            Goal::new(
                "Vacation",
                inr(dec!(6000)),
                GoalPriority::Medium,
                GoalOwnership::Individual,
            )
            .unwrap()
            .with_saved(inr(dec!(1800)))
            .unwrap(),
            Goal::new(
                "New Shirt",
                inr(dec!(1800)),
                GoalPriority::Low,
                GoalOwnership::Individual,
            )
            .unwrap()
            .with_saved(inr(dec!(342)))
            .unwrap(),
            Goal::new(
                "Group Trip",
                inr(dec!(25000)),
                GoalPriority::Medium,
                GoalOwnership::Collaborative { members: 4 },
            )
            .unwrap()
            .with_saved(inr(dec!(5000)))
            .unwrap(),
        ];
        SavingsLedger::with_goals(Currency::INR, goals).unwrap()
    }

    #[test]
    fn test_total_saved_is_derived_at_seed() {
        let ledger = seeded_ledger();
        assert_eq!(ledger.total_saved(), inr(dec!(8642)));
    }

    #[test]
    fn test_round_up_credits_individual_goals_only() {
        let mut ledger = seeded_ledger();
        let group_trip_before = ledger.goals()[3].saved;

        ledger
            .apply_round_up(inr(dec!(58)), "Food & Dining", "Veggies")
            .unwrap();

        // Delta 2 across weights 3/2/1: 1/1/0 by largest remainder
        assert_eq!(ledger.goals()[0].saved, inr(dec!(1501)));
        assert_eq!(ledger.goals()[1].saved, inr(dec!(1801)));
        assert_eq!(ledger.goals()[2].saved, inr(dec!(342)));
        assert_eq!(ledger.goals()[3].saved, group_trip_before);
        assert_eq!(ledger.total_saved(), inr(dec!(8644)));
    }

    #[test]
    fn test_round_up_labels_transaction_with_primary() {
        let mut ledger = seeded_ledger();

        let txn = ledger
            .apply_round_up(inr(dec!(58)), "Food & Dining", "Veggies")
            .unwrap();

        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount, inr(dec!(58)));
        assert_eq!(txn.rounded_savings, Some(inr(dec!(2))));
        assert_eq!(txn.goal_name.as_deref(), Some("New Earphones"));
    }

    #[test]
    fn test_exact_payment_appends_plain_expense() {
        let mut ledger = seeded_ledger();
        let total_before = ledger.total_saved();

        let txn = ledger
            .apply_round_up(inr(dec!(35)), "Food & Dining", "Snacks")
            .unwrap();

        assert!(txn.rounded_savings.is_none());
        assert!(txn.goal_name.is_none());
        assert_eq!(ledger.total_saved(), total_before);
        assert_eq!(ledger.transactions().len(), 1);
    }

    #[test]
    fn test_round_up_without_goals_fails_cleanly() {
        let mut ledger = SavingsLedger::new(Currency::INR);

        let result = ledger.apply_round_up(inr(dec!(58)), "Food & Dining", "Veggies");

        assert!(matches!(result, Err(SavingsError::NoEligibleGoals)));
        assert!(ledger.transactions().is_empty());
        assert!(ledger.total_saved().is_zero());
    }

    #[test]
    fn test_invalid_amount_leaves_state_untouched() {
        let mut ledger = seeded_ledger();
        let goals_before = ledger.goals().to_vec();

        let result = ledger.apply_round_up(inr(dec!(0)), "Food & Dining", "Nothing");

        assert!(matches!(result, Err(SavingsError::Validation(_))));
        assert!(ledger.transactions().is_empty());
        assert_eq!(ledger.goals().len(), goals_before.len());
        assert_eq!(ledger.total_saved(), inr(dec!(8642)));
    }

    #[test]
    fn test_targeted_transfer_credits_one_goal() {
        let mut ledger = seeded_ledger();
        let vacation = ledger.goals()[1].id;

        let txn = ledger.apply_manual_transfer(inr(dec!(200)), Some(vacation)).unwrap();

        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(txn.goal_name.as_deref(), Some("Vacation"));
        assert_eq!(ledger.goals()[1].saved, inr(dec!(2000)));
        assert_eq!(ledger.total_saved(), inr(dec!(8842)));
    }

    #[test]
    fn test_unknown_goal_transfer_mutates_nothing() {
        let mut ledger = seeded_ledger();
        let goals_before = ledger.goals().to_vec();
        let txns_before = ledger.transactions().len();

        let result = ledger.apply_manual_transfer(inr(dec!(200)), Some(GoalId::new()));

        assert!(matches!(result, Err(SavingsError::GoalNotFound(_))));
        assert_eq!(ledger.transactions().len(), txns_before);
        assert_eq!(ledger.goals().len(), goals_before.len());
        for (before, after) in goals_before.iter().zip(ledger.goals()) {
            assert_eq!(before.saved, after.saved);
        }
    }

    #[test]
    fn test_spread_transfer_uses_priority_weights() {
        let mut ledger = seeded_ledger();

        // 60 across weights 3/2/1: 30/20/10
        ledger.apply_manual_transfer(inr(dec!(60)), None).unwrap();

        assert_eq!(ledger.goals()[0].saved, inr(dec!(1530)));
        assert_eq!(ledger.goals()[1].saved, inr(dec!(1820)));
        assert_eq!(ledger.goals()[2].saved, inr(dec!(352)));
        assert_eq!(ledger.goals()[3].saved, inr(dec!(5000)));
    }

    #[test]
    fn test_non_positive_transfer_rejected() {
        let mut ledger = seeded_ledger();

        let result = ledger.apply_manual_transfer(inr(dec!(-5)), None);
        assert!(matches!(result, Err(SavingsError::Validation(_))));
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn test_create_goal_starts_from_zero() {
        let mut ledger = seeded_ledger();

        let goal = ledger
            .create_goal(GoalDraft::new("Computer Mouse", inr(dec!(500))))
            .unwrap();

        assert!(goal.saved.is_zero());
        assert_eq!(ledger.goals().len(), 5);
        assert_eq!(ledger.total_saved(), inr(dec!(8642)));
    }

    #[test]
    fn test_create_goal_validation_propagates() {
        let mut ledger = seeded_ledger();

        let result = ledger.create_goal(GoalDraft::new("  ", inr(dec!(500))));
        assert!(matches!(result, Err(SavingsError::Validation(_))));
        assert_eq!(ledger.goals().len(), 4);
    }

    #[test]
    fn test_transactions_insert_newest_first() {
        let mut ledger = seeded_ledger();

        ledger.apply_round_up(inr(dec!(58)), "Food & Dining", "Veggies").unwrap();
        ledger.apply_round_up(inr(dec!(77)), "Food & Dining", "Milk").unwrap();

        assert_eq!(ledger.transactions()[0].description, "Milk");
        assert_eq!(ledger.transactions()[1].description, "Veggies");
    }

    #[test]
    fn test_summary_totals() {
        let mut ledger = seeded_ledger();

        ledger.apply_round_up(inr(dec!(58)), "Food & Dining", "Veggies").unwrap();
        ledger.apply_manual_transfer(inr(dec!(100)), None).unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.income, inr(dec!(100)));
        assert_eq!(summary.expense, inr(dec!(58)));
        assert_eq!(summary.balance, inr(dec!(42)));
    }

    #[test]
    fn test_savings_entries_trail() {
        let mut ledger = seeded_ledger();

        ledger.apply_round_up(inr(dec!(58)), "Food & Dining", "Veggies").unwrap();
        ledger.apply_round_up(inr(dec!(35)), "Food & Dining", "Snacks").unwrap();

        let trail = ledger.savings_entries();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].description, "Veggies");
    }

    #[test]
    fn test_project_unknown_goal() {
        let ledger = seeded_ledger();
        let deadline = today() + chrono::Duration::days(30);

        let result = ledger.project(GoalId::new(), deadline);
        assert!(matches!(result, Err(SavingsError::GoalNotFound(_))));
    }

    #[test]
    fn test_project_uses_expense_history_only() {
        let mut ledger = seeded_ledger();
        let earphones = ledger.goals()[0].id;
        let as_of = today();
        let deadline = as_of + chrono::Duration::days(30);

        // Income only: still no spending history to project from
        ledger.apply_manual_transfer(inr(dec!(100)), None).unwrap();
        let result = ledger.project_as_of(earphones, deadline, as_of);
        assert!(matches!(result, Err(SavingsError::InsufficientHistory)));

        ledger.apply_round_up(inr(dec!(58)), "Food & Dining", "Veggies").unwrap();
        let projection = ledger.project_as_of(earphones, deadline, as_of).unwrap();
        assert!(matches!(projection, GoalProjection::Plan(_)));
    }

    #[test]
    fn test_progress_percent_helper() {
        assert_eq!(progress_percent(inr(dec!(785)), inr(dec!(500))), dec!(100));
        assert_eq!(progress_percent(inr(dec!(250)), inr(dec!(500))), dec!(50));
        assert_eq!(progress_percent(inr(dec!(1)), inr(dec!(0))), dec!(0));
    }
}
