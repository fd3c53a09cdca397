//! UI-agnostic view state.
//!
//! The controllers here are pure state machines driven by an injected tick.
//! The TUI (or a future web frontend) owns the actual timers and calls
//! `tick()` once per time unit; tests drive the same methods directly.

pub mod refresh;
pub mod rotation;

pub use refresh::{REFRESH_PERIOD_SECS, RefreshClock};
pub use rotation::{ROTATION_PERIOD_SECS, SlideRotation};
