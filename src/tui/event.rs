//! Event handling for the TUI.
//!
//! Merges two sources into one channel: a [`Ticker`] producing the
//! once-per-second tick that drives rotation and the refresh countdown, and
//! a thread polling the terminal for input. Both are released by
//! [`EventHandler::cancel`], which also runs on drop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvError};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

use crate::timer::Ticker;

/// How long the input thread waits for a terminal event before checking
/// whether it has been cancelled.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// One time unit elapsed.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width).
    Resize(u16),
}

/// Event source owning its timer and input threads.
pub struct EventHandler {
    rx: Receiver<Event>,
    ticker: Ticker,
    cancelled: Arc<AtomicBool>,
}

impl EventHandler {
    /// Creates a new event handler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(tick_rate, tx.clone(), || Event::Tick);

        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        thread::spawn(move || {
            loop {
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                if event::poll(INPUT_POLL_TIMEOUT).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Event::Key(key),
                            CrosstermEvent::Resize(w, _) => Event::Resize(w),
                            _ => continue,
                        };
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            rx,
            ticker,
            cancelled,
        }
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }

    /// Stops both source threads. Idempotent.
    pub fn cancel(&self) {
        self.ticker.cancel();
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.cancel();
    }
}
