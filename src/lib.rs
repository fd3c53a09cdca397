//! finboard - Financial operations terminal dashboard library.
//!
//! This library provides the building blocks for the `finboard` TUI:
//! - `data` - domain records and the embedded demo dataset
//! - `provider` - data sources producing dashboard snapshots
//! - `view` - UI-agnostic view state (slide rotation, refresh countdown)
//! - `timer` - owned periodic task handles
//! - `tui` - the interactive terminal frontend

pub mod data;
pub mod provider;
pub mod timer;
pub mod tui;
pub mod util;
pub mod view;
