//! Fallback spending-history source
//!
//! Decorates a primary (live) source with a fixed fallback: when the
//! primary fails transiently, the fallback records are served instead
//! so projection stays available offline. Non-transient errors (bad
//! data, validation) propagate; degraded data cannot fix those.

use tracing::warn;

use core_kernel::{DomainPort, PortError};

use crate::adapters::FixedHistorySource;
use crate::ports::{SpendingHistorySource, SpendingRecord};

/// A spending-history source that degrades to fixed data on transient
/// failure of its primary
#[derive(Debug, Clone)]
pub struct FallbackHistorySource<P> {
    primary: P,
    fallback: FixedHistorySource,
}

impl<P: SpendingHistorySource> FallbackHistorySource<P> {
    /// Wraps a primary source with the given fallback records
    pub fn new(primary: P, fallback: Vec<SpendingRecord>) -> Self {
        Self {
            primary,
            fallback: FixedHistorySource::new(fallback),
        }
    }

    /// Wraps a primary source with the canned demo fallback
    pub fn with_seeded_fallback(primary: P) -> Self {
        Self {
            primary,
            fallback: FixedHistorySource::seeded(),
        }
    }
}

impl<P: SpendingHistorySource> DomainPort for FallbackHistorySource<P> {}

impl<P: SpendingHistorySource> SpendingHistorySource for FallbackHistorySource<P> {
    fn fetch_history(&self) -> Result<Vec<SpendingRecord>, PortError> {
        match self.primary.fetch_history() {
            Ok(records) => Ok(records),
            Err(error) if error.is_transient() => {
                warn!(%error, "Primary history source failed, serving fixed fallback");
                self.fallback.fetch_history()
            }
            Err(error) => Err(error),
        }
    }
}
