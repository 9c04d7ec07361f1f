//! Goal projection and savings planning
//!
//! Forecasts whether a goal will be met by a deadline and produces a
//! recommended savings plan. The forecast is a recency-weighted average
//! of past spending: transactions are ranked newest first and each
//! older transaction's weight decays by a constant factor. The decay is
//! over rank, not elapsed time.
//!
//! Projection is pure and read-only: it is a deterministic function of
//! the goal, the deadline, the spending history, and the `as_of` date.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{add_calendar_months, days_left, Money, Rate};

use crate::error::SavingsError;
use crate::goal::Goal;
use crate::ports::SpendingRecord;

/// Weight multiplier applied per rank step into the past
pub const RECENCY_DECAY: Decimal = dec!(0.9);

/// Cut suggestion cap: this percentage of the remaining goal amount
pub const REMAINING_CUT_PERCENT: Decimal = dec!(10);

/// Cut suggestion cap: this percentage of predicted monthly spending
pub const PREDICTED_CUT_PERCENT: Decimal = dec!(20);

const DAYS_PER_WEEK: Decimal = dec!(7);
const DAYS_PER_MONTH: Decimal = dec!(30);

/// A recommended savings plan for reaching a goal by its deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    /// Recency-weighted forecast of monthly spending
    pub predicted_monthly_spending: Money,
    /// Amount to put aside per day
    pub daily_micro_savings: Money,
    /// Amount to put aside per week
    pub weekly_savings: Money,
    /// Amount to put aside per month (30-day convention)
    pub monthly_savings: Money,
    /// Suggested recurring expense cut: the lesser of 10% of the
    /// remaining amount and 20% of predicted spending. The completion
    /// estimate treats it as a per-day saving.
    pub expense_cut_suggestion: Money,
    /// Whole months until completion at the suggested cut rate
    pub months_to_complete: u32,
    /// Date the goal completes at the suggested cut rate
    pub projected_completion: NaiveDate,
    /// The deadline the plan was computed against
    pub deadline: NaiveDate,
    /// True exactly when `projected_completion <= deadline`
    pub will_meet_deadline: bool,
}

/// Outcome of projecting a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GoalProjection {
    /// The goal has already reached its target; no plan is needed
    AlreadyAchieved {
        /// Amount saved beyond the target (zero when exactly met)
        surplus: Money,
    },
    /// A savings plan towards the deadline
    Plan(SavingsPlan),
}

/// Forecasts monthly spending from a transaction history
///
/// Records are sorted by date descending; the most recent has weight 1
/// and each older record's weight decays by [`RECENCY_DECAY`]. The
/// forecast is the weighted mean of the amounts.
///
/// # Errors
///
/// - empty history (`InsufficientHistory`)
/// - records in mixed currencies
pub fn predict_monthly_spending(history: &[SpendingRecord]) -> Result<Money, SavingsError> {
    let first = history.first().ok_or(SavingsError::InsufficientHistory)?;
    let currency = first.amount.currency();

    let mut sorted: Vec<&SpendingRecord> = history.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut weighted_sum = Money::zero(currency);
    let mut total_weight = Decimal::ZERO;
    let mut weight = Decimal::ONE;

    for record in sorted {
        weighted_sum = weighted_sum.checked_add(&record.amount.multiply(weight))?;
        total_weight += weight;
        weight *= RECENCY_DECAY;
    }

    Ok(weighted_sum.divide(total_weight)?)
}

/// Projects whether a goal will be met by a deadline
///
/// `as_of` is the calendar date the projection is computed on; passing
/// it explicitly keeps the function deterministic.
///
/// # Errors
///
/// - deadline not strictly after `as_of`
/// - empty spending history (`InsufficientHistory`)
/// - zero savings rate under the suggested cut (`DegenerateProjection`)
/// - goal and history in different currencies
pub fn project(
    goal: &Goal,
    deadline: NaiveDate,
    history: &[SpendingRecord],
    as_of: NaiveDate,
) -> Result<GoalProjection, SavingsError> {
    if deadline <= as_of {
        return Err(SavingsError::validation(format!(
            "Deadline {} must be after {}",
            deadline, as_of
        )));
    }
    if history.is_empty() {
        return Err(SavingsError::InsufficientHistory);
    }

    let remaining = goal.remaining();
    if !remaining.is_positive() {
        return Ok(GoalProjection::AlreadyAchieved {
            surplus: remaining.abs(),
        });
    }

    let predicted = predict_monthly_spending(history)?;
    let days = Decimal::from(days_left(as_of, deadline));

    let daily = remaining.divide(days)?;
    let weekly = remaining.multiply(DAYS_PER_WEEK).divide(days)?;
    let monthly = remaining.multiply(DAYS_PER_MONTH).divide(days)?;

    // The cut is rounded to the currency before the completion math so
    // the plan the user sees is the plan the verdict is computed from.
    let cut = Rate::from_percentage(REMAINING_CUT_PERCENT)
        .apply(&remaining)
        .checked_min(&Rate::from_percentage(PREDICTED_CUT_PERCENT).apply(&predicted))?
        .round_half_up();

    let monthly_rate = cut.multiply(DAYS_PER_MONTH);
    if !monthly_rate.is_positive() {
        return Err(SavingsError::DegenerateProjection);
    }

    let months_exact = remaining.amount() / monthly_rate.amount();
    let months = months_exact.ceil().to_u32().unwrap_or(u32::MAX);
    let projected_completion = add_calendar_months(as_of, months);

    Ok(GoalProjection::Plan(SavingsPlan {
        predicted_monthly_spending: predicted.round_half_up(),
        daily_micro_savings: daily.round_half_up(),
        weekly_savings: weekly.round_half_up(),
        monthly_savings: monthly.round_half_up(),
        expense_cut_suggestion: cut,
        months_to_complete: months,
        projected_completion,
        deadline,
        will_meet_deadline: projected_completion <= deadline,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::{GoalOwnership, GoalPriority};
    use core_kernel::Currency;

    fn inr(amount: Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(y: i32, m: u32, d: u32, amount: Decimal) -> SpendingRecord {
        SpendingRecord::new(date(y, m, d), inr(amount), "Misc")
    }

    fn goal_with(target: Decimal, saved: Decimal) -> Goal {
        Goal::new(
            "New Earphones",
            inr(target),
            GoalPriority::High,
            GoalOwnership::Individual,
        )
        .unwrap()
        .with_saved(inr(saved))
        .unwrap()
    }

    #[test]
    fn test_prediction_weights_recent_spending_heavier() {
        // Newest 1000 at weight 1, older 100 at weight 0.9
        let history = vec![
            record(2025, 2, 10, dec!(100)),
            record(2025, 2, 20, dec!(1000)),
        ];

        let predicted = predict_monthly_spending(&history).unwrap();
        // (1000*1 + 100*0.9) / 1.9 = 573.68...
        assert_eq!(predicted.round_half_up().amount(), dec!(573.68));
    }

    #[test]
    fn test_prediction_is_order_insensitive() {
        let a = vec![
            record(2025, 2, 10, dec!(100)),
            record(2025, 2, 20, dec!(1000)),
            record(2025, 2, 15, dec!(300)),
        ];
        let mut b = a.clone();
        b.reverse();

        assert_eq!(
            predict_monthly_spending(&a).unwrap(),
            predict_monthly_spending(&b).unwrap()
        );
    }

    #[test]
    fn test_prediction_requires_history() {
        assert!(matches!(
            predict_monthly_spending(&[]),
            Err(SavingsError::InsufficientHistory)
        ));
    }

    #[test]
    fn test_single_record_prediction_is_that_amount() {
        let history = vec![record(2025, 2, 10, dec!(420))];
        assert_eq!(predict_monthly_spending(&history).unwrap(), inr(dec!(420)));
    }

    #[test]
    fn test_thirty_day_plan_cadences() {
        // 2000 target, 1500 saved: 500 remaining over 30 days
        let goal = goal_with(dec!(2000), dec!(1500));
        let history = vec![record(2025, 2, 20, dec!(500))];
        let as_of = date(2025, 3, 1);

        let projection = project(&goal, date(2025, 3, 31), &history, as_of).unwrap();
        let plan = match projection {
            GoalProjection::Plan(plan) => plan,
            other => panic!("Expected a plan, got {:?}", other),
        };

        assert_eq!(plan.daily_micro_savings.amount(), dec!(16.67));
        assert_eq!(plan.weekly_savings.amount(), dec!(116.67));
        assert_eq!(plan.monthly_savings.amount(), dec!(500.00));
    }

    #[test]
    fn test_expense_cut_takes_the_lesser_rule() {
        let goal = goal_with(dec!(2000), dec!(1500)); // remaining 500 -> 10% = 50
        let history = vec![record(2025, 2, 20, dec!(100))]; // predicted 100 -> 20% = 20
        let as_of = date(2025, 3, 1);

        let projection = project(&goal, date(2025, 3, 31), &history, as_of).unwrap();
        let plan = match projection {
            GoalProjection::Plan(plan) => plan,
            other => panic!("Expected a plan, got {:?}", other),
        };

        assert_eq!(plan.expense_cut_suggestion.amount(), dec!(20.00));
        // 500 / (20*30) = 0.83 months -> 1 month
        assert_eq!(plan.months_to_complete, 1);
        assert_eq!(plan.projected_completion, date(2025, 4, 1));
        assert!(!plan.will_meet_deadline); // Apr 1 is past Mar 31
    }

    #[test]
    fn test_verdict_matches_completion_vs_deadline() {
        let goal = goal_with(dec!(2000), dec!(1500));
        let history = vec![record(2025, 2, 20, dec!(5000))]; // cut = 50 (10% of remaining)
        let as_of = date(2025, 3, 1);

        // 500 / (50*30) = 0.33 -> 1 month -> Apr 1
        let projection = project(&goal, date(2025, 4, 1), &history, as_of).unwrap();
        match projection {
            GoalProjection::Plan(plan) => {
                assert_eq!(plan.projected_completion, date(2025, 4, 1));
                assert!(plan.will_meet_deadline);
            }
            other => panic!("Expected a plan, got {:?}", other),
        }
    }

    #[test]
    fn test_achieved_goal_short_circuits() {
        let goal = goal_with(dec!(500), dec!(785));
        let history = vec![record(2025, 2, 20, dec!(100))];

        let projection =
            project(&goal, date(2025, 3, 31), &history, date(2025, 3, 1)).unwrap();
        assert_eq!(
            projection,
            GoalProjection::AlreadyAchieved {
                surplus: inr(dec!(285))
            }
        );
    }

    #[test]
    fn test_exactly_met_goal_has_zero_surplus() {
        let goal = goal_with(dec!(500), dec!(500));
        let history = vec![record(2025, 2, 20, dec!(100))];

        let projection =
            project(&goal, date(2025, 3, 31), &history, date(2025, 3, 1)).unwrap();
        assert_eq!(
            projection,
            GoalProjection::AlreadyAchieved {
                surplus: inr(dec!(0))
            }
        );
    }

    #[test]
    fn test_past_deadline_rejected() {
        let goal = goal_with(dec!(2000), dec!(1500));
        let history = vec![record(2025, 2, 20, dec!(100))];

        let result = project(&goal, date(2025, 3, 1), &history, date(2025, 3, 1));
        assert!(matches!(result, Err(SavingsError::Validation(_))));

        let result = project(&goal, date(2025, 2, 1), &history, date(2025, 3, 1));
        assert!(matches!(result, Err(SavingsError::Validation(_))));
    }

    #[test]
    fn test_empty_history_rejected() {
        let goal = goal_with(dec!(2000), dec!(1500));
        let result = project(&goal, date(2025, 3, 31), &[], date(2025, 3, 1));
        assert!(matches!(result, Err(SavingsError::InsufficientHistory)));
    }

    #[test]
    fn test_negligible_spending_is_degenerate_not_infinite() {
        let goal = goal_with(dec!(2000), dec!(1500));
        // 20% of predicted 0.01 rounds to a zero cut
        let history = vec![record(2025, 2, 20, dec!(0.01))];

        let result = project(&goal, date(2025, 3, 31), &history, date(2025, 3, 1));
        assert!(matches!(result, Err(SavingsError::DegenerateProjection)));
    }

    #[test]
    fn test_projection_is_deterministic() {
        let goal = goal_with(dec!(2000), dec!(1500));
        let history = vec![
            record(2025, 2, 20, dec!(500)),
            record(2025, 2, 18, dec!(1200)),
            record(2025, 2, 15, dec!(300)),
        ];
        let as_of = date(2025, 3, 1);
        let deadline = date(2025, 5, 1);

        let first = project(&goal, deadline, &history, as_of).unwrap();
        let second = project(&goal, deadline, &history, as_of).unwrap();
        assert_eq!(first, second);
    }
}
