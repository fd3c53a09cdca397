//! Mock provider backed by the embedded demo dataset.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::data::{DashboardSnapshot, load_application_records, mock};

use super::{DashboardProvider, ProviderError};

/// Provider that regenerates the demo dataset on every refresh.
///
/// Placeholder metrics are drawn from a seeded RNG, so two providers built
/// with the same seed produce the same sequence of snapshots.
pub struct MockProvider {
    rng: StdRng,
    current: Option<DashboardSnapshot>,
    last_refreshed: Option<i64>,
    last_error: Option<ProviderError>,
}

impl MockProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            current: None,
            last_refreshed: None,
            last_error: None,
        }
    }

    /// Produces a snapshot stamped with the given time. Split out from the
    /// trait method so tests can control the clock.
    pub fn refresh_at(&mut self, now: i64) -> Option<&DashboardSnapshot> {
        // Surface dataset problems instead of rendering an empty grid.
        if let Err(e) = load_application_records() {
            self.last_error = Some(ProviderError::Dataset(e.to_string()));
            return None;
        }

        let snapshot = mock::snapshot(&mut self.rng, now);
        debug!(timestamp = now, tiles = snapshot.tiles.len(), "refreshed demo snapshot");
        self.last_error = None;
        self.last_refreshed = Some(now);
        self.current = Some(snapshot);
        self.current.as_ref()
    }
}

impl DashboardProvider for MockProvider {
    fn current(&self) -> Option<&DashboardSnapshot> {
        self.current.as_ref()
    }

    fn refresh(&mut self) -> Option<&DashboardSnapshot> {
        self.refresh_at(Utc::now().timestamp())
    }

    fn last_refreshed(&self) -> Option<i64> {
        self.last_refreshed
    }

    fn last_error(&self) -> Option<&ProviderError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_produces_timestamped_snapshot() {
        let mut provider = MockProvider::new(1);
        assert!(provider.current().is_none());
        assert!(provider.last_refreshed().is_none());

        let snapshot = provider.refresh_at(1_700_000_000).expect("snapshot");
        assert_eq!(snapshot.timestamp, 1_700_000_000);
        assert_eq!(provider.last_refreshed(), Some(1_700_000_000));
        assert!(provider.last_error().is_none());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = MockProvider::new(9);
        let mut b = MockProvider::new(9);
        assert_eq!(a.refresh_at(100), b.refresh_at(100));
        assert_eq!(a.refresh_at(200), b.refresh_at(200));
    }

    #[test]
    fn provider_is_object_safe() {
        let mut provider: Box<dyn DashboardProvider> = Box::new(MockProvider::new(2));
        assert!(provider.refresh().is_some());
        assert!(provider.current().is_some());
        assert_eq!(provider.source_name(), "demo");
    }
}
