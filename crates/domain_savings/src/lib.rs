//! Savings Domain
//!
//! This crate implements the round-up savings core: payments are
//! rounded up to the next step, the difference is spread across savings
//! goals by priority, and a projector forecasts whether a goal will be
//! met by a deadline.
//!
//! # Key Concepts
//!
//! - **Round-up**: a payment rounds up to the next multiple of 5
//!   (below 100) or 10 (at or above); the difference is saved
//! - **Priority weight**: High 3, Medium 2, Low 1, the proportions a
//!   savings delta is split by across individual goals
//! - **Projection**: a recency-weighted spending forecast plus a
//!   savings plan and a deadline verdict
//! - **Ledger**: the aggregate owning goals and transactions; the only
//!   component that mutates state
//!
//! The calculators are pure; the ledger applies their results as a
//! single unit, so a failed operation never leaves partial state.

pub mod adapters;
pub mod allocation;
pub mod error;
pub mod goal;
pub mod ledger;
pub mod ports;
pub mod projection;
pub mod roundup;
pub mod services;
pub mod transaction;

pub use allocation::{allocate, AllocationPlan, GoalShare};
pub use error::SavingsError;
pub use goal::{Goal, GoalDraft, GoalOwnership, GoalPriority, GoalStatus};
pub use ledger::{progress_percent, SavingsLedger, TransactionSummary};
pub use ports::{SpendingHistorySource, SpendingRecord};
pub use projection::{predict_monthly_spending, project, GoalProjection, SavingsPlan};
pub use roundup::{round_up, RoundUp};
pub use services::ProjectionService;
pub use transaction::{Transaction, TransactionKind};
