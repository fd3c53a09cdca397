//! Owned periodic task handles.
//!
//! Every recurring action in the dashboard is driven by a [`Ticker`] owned
//! by the component that needs it, never by an ambient registration. A
//! dropped or cancelled ticker delivers no further ticks, so repeated
//! setup/teardown cycles cannot accumulate orphaned timers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// A cancellable periodic tick source backed by a thread.
///
/// The thread produces one message per period until cancelled. Cancellation
/// is idempotent and takes effect before the next scheduled tick can be
/// delivered.
pub struct Ticker {
    cancelled: Arc<AtomicBool>,
}

impl Ticker {
    /// Spawns a timer thread that sends `make()` into `tx` every period.
    ///
    /// The thread also exits when the receiving side is dropped.
    pub fn spawn<T, F>(period: Duration, tx: Sender<T>, mut make: F) -> Self
    where
        T: Send + 'static,
        F: FnMut() -> T + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        thread::spawn(move || {
            loop {
                thread::sleep(period);
                // The flag is checked after the sleep so cancellation wins
                // over a tick that was due at the same instant.
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                if tx.send(make()).is_err() {
                    break;
                }
            }
        });

        Self { cancelled }
    }

    /// Spawns a ticker with its own channel, yielding `()` per period.
    pub fn channel(period: Duration) -> (Self, Receiver<()>) {
        let (tx, rx) = mpsc::channel();
        (Self::spawn(period, tx, || ()), rx)
    }

    /// Stops the timer. Safe to call more than once.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_ticks_periodically() {
        let (_ticker, rx) = Ticker::channel(Duration::from_millis(5));
        assert!(rx.recv_timeout(Duration::from_millis(500)).is_ok());
        assert!(rx.recv_timeout(Duration::from_millis(500)).is_ok());
    }

    #[test]
    fn cancel_is_idempotent_and_stops_delivery() {
        let (ticker, rx) = Ticker::channel(Duration::from_millis(5));
        assert!(rx.recv_timeout(Duration::from_millis(500)).is_ok());

        ticker.cancel();
        ticker.cancel();
        assert!(ticker.is_cancelled());

        // Let any in-flight send land, drain it, then give the thread
        // several periods worth of time: nothing further may arrive.
        thread::sleep(Duration::from_millis(20));
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(50));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drop_cancels() {
        let (ticker, rx) = Ticker::channel(Duration::from_millis(5));
        drop(ticker);
        thread::sleep(Duration::from_millis(20));
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(50));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn custom_messages_reach_the_shared_channel() {
        let (tx, rx) = mpsc::channel();
        let _ticker = Ticker::spawn(Duration::from_millis(5), tx, || 42u32);
        assert_eq!(rx.recv_timeout(Duration::from_millis(500)), Ok(42));
    }
}
