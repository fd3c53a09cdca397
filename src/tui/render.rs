//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::{AppState, PopupState, Tab};
use super::widgets::{
    render_analysis_popup, render_apps, render_board, render_files, render_footer, render_header,
    render_help, render_tiles, render_workflow,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState, source: &str) {
    let area = frame.area();

    // Main layout: header, content, footer
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, chunks[0], state, source);

    match state.current_tab {
        Tab::Apps => render_apps(frame, chunks[1], state),
        Tab::Board => render_board(frame, chunks[1], state),
        Tab::Workflow => render_workflow(frame, chunks[1], state),
        Tab::Finance => render_tiles(frame, chunks[1], state),
        Tab::Files => render_files(frame, chunks[1], state),
    }

    render_footer(frame, chunks[2], state);

    // Popups overlay everything, rendered last.
    match state.popup {
        PopupState::Help { .. } => render_help(frame, area, state),
        PopupState::Analysis { .. } => render_analysis_popup(frame, area, state),
        PopupState::None => {}
    }
}
