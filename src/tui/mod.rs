//! Terminal user interface for the operations dashboard.
//!
//! This module provides an interactive TUI with tabbed views over the
//! provider's snapshots: applications, management board, workflow detail,
//! rotating finance tiles and file preview.

mod app;
mod event;
mod input;
mod render;
mod rows;
mod state;
mod style;
mod table;
mod widgets;

pub use app::App;
pub use state::{AppState, Tab};
