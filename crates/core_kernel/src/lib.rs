//! Core Kernel - Foundational types and utilities for the savings system
//!
//! This crate provides the fundamental building blocks used across the
//! domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar-date helpers for deadlines and projections
//! - Common identifiers and value objects
//! - Port infrastructure for injected data sources

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{GoalId, MemberId, TransactionId};
pub use money::{Currency, Money, MoneyError, Rate};
pub use ports::{DomainPort, PortError};
pub use temporal::{add_calendar_months, days_left, whole_days_between, DateRange, TemporalError};
