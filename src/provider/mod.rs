//! Provider abstraction for dashboard data sources.
//!
//! The TUI talks to a `DashboardProvider` and never cares where snapshots
//! come from. The demo binary uses [`MockProvider`]; a real deployment
//! would put an API-backed provider behind the same trait.

mod mock;

pub use mock::MockProvider;

use crate::data::DashboardSnapshot;

/// Error types that can occur while producing a snapshot.
#[derive(Debug, Clone)]
pub enum ProviderError {
    /// The backing dataset could not be parsed.
    Dataset(String),
    /// The data source is unavailable.
    Unavailable(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Dataset(msg) => write!(f, "Dataset error: {}", msg),
            ProviderError::Unavailable(msg) => write!(f, "Source unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Abstraction for dashboard data sources.
///
/// Object-safe; the app holds a `Box<dyn DashboardProvider>`.
pub trait DashboardProvider {
    /// Returns the current snapshot, if one has been produced.
    fn current(&self) -> Option<&DashboardSnapshot>;

    /// Produces a fresh snapshot.
    ///
    /// Returns `None` if the source failed; `last_error()` then carries
    /// the reason.
    fn refresh(&mut self) -> Option<&DashboardSnapshot>;

    /// Unix seconds of the last successful refresh.
    fn last_refreshed(&self) -> Option<i64>;

    /// Last error seen by the provider, if any.
    fn last_error(&self) -> Option<&ProviderError>;

    /// Human-readable source label for the header.
    fn source_name(&self) -> &'static str {
        "demo"
    }
}
