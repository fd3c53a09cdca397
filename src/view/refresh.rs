//! Refresh countdown state for the workflow header.
//!
//! Shows "Last refreshed: Xs | Auto-refresh in: Ys". The countdown is a
//! visual cue only: it wraps on its own cadence and does not trigger the
//! refresh, so it can drift from the actual refresh schedule. The provider
//! is the one that decides when data is refetched.

/// Default auto-refresh display period in seconds.
pub const REFRESH_PERIOD_SECS: u32 = 15;

/// Elapsed-since-refresh and countdown display state.
#[derive(Debug, Clone)]
pub struct RefreshClock {
    last_refreshed: i64,
    seconds_since_refresh: i64,
    countdown: u32,
    period: u32,
}

impl RefreshClock {
    /// Creates a clock anchored at `last_refreshed` (unix seconds).
    pub fn new(last_refreshed: i64) -> Self {
        Self::with_period(last_refreshed, REFRESH_PERIOD_SECS)
    }

    pub fn with_period(last_refreshed: i64, period: u32) -> Self {
        let period = period.max(1);
        Self {
            last_refreshed,
            seconds_since_refresh: 0,
            countdown: period,
            period,
        }
    }

    pub fn seconds_since_refresh(&self) -> i64 {
        self.seconds_since_refresh
    }

    /// Seconds shown next to "Auto-refresh in". Always in `[1, period]`.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn last_refreshed(&self) -> i64 {
        self.last_refreshed
    }

    /// One second of elapsed time, with the current unix timestamp.
    ///
    /// Recomputes the elapsed display from `now` (saturating at 0 in case
    /// of clock skew) and steps the countdown, wrapping from 1 back to the
    /// full period so the display never shows 0.
    pub fn tick(&mut self, now: i64) {
        self.seconds_since_refresh = now.saturating_sub(self.last_refreshed).max(0);
        self.countdown = if self.countdown <= 1 {
            self.period
        } else {
            self.countdown - 1
        };
    }

    /// Records a completed refresh. The elapsed display resets to track the
    /// new timestamp; the countdown keeps its own free-running cadence.
    pub fn mark_refreshed(&mut self, now: i64) {
        self.last_refreshed = now;
        self.seconds_since_refresh = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_wraps_without_showing_zero() {
        let mut clock = RefreshClock::new(1_700_000_000);
        assert_eq!(clock.countdown(), 15);
        for i in 1..=14 {
            clock.tick(1_700_000_000 + i);
        }
        assert_eq!(clock.countdown(), 1);
        clock.tick(1_700_000_015);
        assert_eq!(clock.countdown(), 15);
    }

    #[test]
    fn countdown_stays_in_range_over_many_ticks() {
        let mut clock = RefreshClock::with_period(0, 15);
        for i in 0..100 {
            clock.tick(i);
            assert!((1..=15).contains(&clock.countdown()));
        }
    }

    #[test]
    fn elapsed_tracks_now_minus_last_refreshed() {
        let mut clock = RefreshClock::new(1_000);
        for i in 1..=5 {
            clock.tick(1_000 + i);
            assert_eq!(clock.seconds_since_refresh(), i);
        }
    }

    #[test]
    fn mark_refreshed_resets_elapsed_but_not_countdown() {
        let mut clock = RefreshClock::new(1_000);
        for i in 1..=7 {
            clock.tick(1_000 + i);
        }
        assert_eq!(clock.seconds_since_refresh(), 7);
        let countdown_before = clock.countdown();

        clock.mark_refreshed(1_007);
        assert_eq!(clock.seconds_since_refresh(), 0);
        assert_eq!(clock.countdown(), countdown_before);

        clock.tick(1_008);
        assert_eq!(clock.seconds_since_refresh(), 1);
    }

    #[test]
    fn clock_skew_saturates_at_zero() {
        let mut clock = RefreshClock::new(2_000);
        clock.tick(1_990);
        assert_eq!(clock.seconds_since_refresh(), 0);
    }
}
