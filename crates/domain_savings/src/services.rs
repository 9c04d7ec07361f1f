//! Savings domain services
//!
//! Binds the pure projector to an injected spending-history source so
//! callers whose history lives outside the ledger (a remote transaction
//! service, a fixture) can ask the same questions.

use chrono::NaiveDate;

use crate::error::SavingsError;
use crate::goal::Goal;
use crate::ports::SpendingHistorySource;
use crate::projection::{project, GoalProjection};

/// Projects goals against an injected spending history
///
/// The source is chosen by the caller (live, fallback-wrapped, or
/// fixed) and can be swapped without touching projection logic.
pub struct ProjectionService<S> {
    source: S,
}

impl<S: SpendingHistorySource> ProjectionService<S> {
    /// Creates a service over the given history source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Projects a goal against the source's history
    ///
    /// # Errors
    ///
    /// Propagates source failures and all projection errors; see
    /// [`project`].
    pub fn project_goal(
        &self,
        goal: &Goal,
        deadline: NaiveDate,
        as_of: NaiveDate,
    ) -> Result<GoalProjection, SavingsError> {
        let history = self.source.fetch_history()?;
        project(goal, deadline, &history, as_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedHistorySource;
    use crate::goal::{GoalOwnership, GoalPriority};
    use core_kernel::{Currency, Money};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_projects_with_injected_history() {
        let goal = Goal::new(
            "Vacation",
            Money::new(dec!(6000), Currency::INR),
            GoalPriority::Medium,
            GoalOwnership::Individual,
        )
        .unwrap()
        .with_saved(Money::new(dec!(1800), Currency::INR))
        .unwrap();

        let service = ProjectionService::new(FixedHistorySource::seeded());
        let projection = service
            .project_goal(&goal, date(2025, 9, 1), date(2025, 3, 1))
            .unwrap();

        assert!(matches!(projection, GoalProjection::Plan(_)));
    }

    #[test]
    fn test_empty_source_yields_insufficient_history() {
        let goal = Goal::new(
            "Vacation",
            Money::new(dec!(6000), Currency::INR),
            GoalPriority::Medium,
            GoalOwnership::Individual,
        )
        .unwrap();

        let service = ProjectionService::new(FixedHistorySource::new(Vec::new()));
        let result = service.project_goal(&goal, date(2025, 9, 1), date(2025, 3, 1));

        assert!(matches!(result, Err(SavingsError::InsufficientHistory)));
    }
}
