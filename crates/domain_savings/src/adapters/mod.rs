//! Adapters implementing the savings domain ports

mod fallback;
mod fixed;

pub use fallback::FallbackHistorySource;
pub use fixed::FixedHistorySource;
