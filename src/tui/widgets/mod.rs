//! TUI widgets for finboard.

mod apps;
mod board;
pub mod common;
mod files;
mod header;
mod help;
mod tiles;
mod workflow;

pub use apps::render_apps;
pub use board::render_board;
pub use files::{render_analysis_popup, render_files};
pub use header::{render_footer, render_header};
pub use help::render_help;
pub use tiles::render_tiles;
pub use workflow::render_workflow;
