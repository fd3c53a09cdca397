//! Utility modules for finboard.

mod format;

pub use format::{format_age, format_trend, progress_bar};
