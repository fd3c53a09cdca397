//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, BoardTab, InputMode, PopupState, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Refresh the provider now.
    Refresh,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.popup.is_open() {
        return handle_popup(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

fn handle_popup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let scroll = match &mut state.popup {
        PopupState::Help { scroll } | PopupState::Analysis { scroll } => scroll,
        PopupState::None => return KeyAction::None,
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.popup = PopupState::None,
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }

        // Manual refresh
        KeyCode::Char('r') => return KeyAction::Refresh,

        // Tab navigation
        KeyCode::Tab => state.switch_tab(state.current_tab.next()),
        KeyCode::BackTab => state.switch_tab(state.current_tab.prev()),
        KeyCode::Char('1') => state.switch_tab(Tab::Apps),
        KeyCode::Char('2') => state.switch_tab(Tab::Board),
        KeyCode::Char('3') => state.switch_tab(Tab::Workflow),
        KeyCode::Char('4') => state.switch_tab(Tab::Finance),
        KeyCode::Char('5') => state.switch_tab(Tab::Files),

        // Help
        KeyCode::Char('?') => state.popup = PopupState::Help { scroll: 0 },

        KeyCode::Esc => state.status_message = None,

        _ => return handle_tab_key(state, key),
    }
    KeyAction::None
}

/// Keys whose meaning depends on the current tab.
fn handle_tab_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.current_tab {
        Tab::Apps => handle_apps_key(state, key),
        Tab::Board => handle_board_key(state, key),
        Tab::Workflow => handle_workflow_key(state, key),
        Tab::Finance => handle_finance_key(state, key),
        Tab::Files => handle_files_key(state, key),
    }
    KeyAction::None
}

fn handle_apps_key(state: &mut AppState, key: KeyEvent) {
    let count = state
        .snapshot
        .as_ref()
        .map(|s| s.applications.len())
        .unwrap_or(0);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected_app = state.selected_app.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected_app + 1 < count {
                state.selected_app += 1;
            }
        }
        _ => {}
    }
}

fn handle_board_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => state.board_tab = state.board_tab.prev(),
        KeyCode::Right | KeyCode::Char('l') => state.board_tab = state.board_tab.next(),
        _ if state.board_tab == BoardTab::Approvals => match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.approvals.select_up(),
            KeyCode::Down | KeyCode::Char('j') => state.approvals.select_down(),
            KeyCode::Char('s') => state.approvals.next_sort_column(),
            KeyCode::Char('d') => state.approvals.toggle_sort_direction(),
            KeyCode::Char('/') => {
                state.input_mode = InputMode::Filter;
                state.filter_input = state.approvals.filter.clone().unwrap_or_default();
            }
            KeyCode::Enter => {
                if let Some(row) = state.approvals.selected_item() {
                    state.status_message =
                        Some(format!("{} ({}, due {})", row.title, row.assignee, row.due));
                }
            }
            _ => {}
        },
        _ => {}
    }
}

fn handle_workflow_key(state: &mut AppState, key: KeyEvent) {
    let stage_count = state
        .snapshot
        .as_ref()
        .map(|s| s.workflow.stages.len())
        .unwrap_or(0);
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            state.selected_stage = state.selected_stage.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if state.selected_stage + 1 < stage_count {
                state.selected_stage += 1;
            }
        }
        KeyCode::Char('u') => {
            state.workflow_locked = !state.workflow_locked;
            state.status_message = Some(
                if state.workflow_locked {
                    "Workflow locked"
                } else {
                    "Workflow unlocked"
                }
                .to_string(),
            );
        }
        _ => {}
    }
}

fn handle_finance_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected_tile = state.selected_tile.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected_tile + 1 < state.tile_count() {
                state.selected_tile += 1;
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(rotation) = state.selected_rotation_mut() {
                rotation.prev();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(rotation) = state.selected_rotation_mut() {
                rotation.next();
            }
        }
        KeyCode::Char('p') => {
            if let Some(rotation) = state.selected_rotation_mut() {
                rotation.toggle_pin();
            }
        }
        _ => {}
    }
}

fn handle_files_key(state: &mut AppState, key: KeyEvent) {
    let sheet_count = state
        .snapshot
        .as_ref()
        .and_then(|s| s.files.first())
        .map(|f| f.sheets.len())
        .unwrap_or(0);
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            state.selected_sheet = state.selected_sheet.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if state.selected_sheet + 1 < sheet_count {
                state.selected_sheet += 1;
            }
        }
        KeyCode::Char('a') => state.start_analysis(),
        _ => {}
    }
}

/// Handles keys while typing the approvals filter.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => {
            let filter = state.filter_input.trim().to_string();
            state
                .approvals
                .set_filter(if filter.is_empty() { None } else { Some(filter) });
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            state.filter_input.clear();
            state.approvals.set_filter(None);
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Char(c) => state.filter_input.push(c),
        _ => {}
    }
    KeyAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> AppState {
        let mut state = AppState::new(15, 15);
        state.apply_snapshot(mock::snapshot(&mut StdRng::seed_from_u64(5), 1_000));
        state
    }

    #[test]
    fn q_quits_and_r_refreshes() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('r'))), KeyAction::Refresh);
    }

    #[test]
    fn tab_keys_switch_tabs() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Board);
        handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current_tab, Tab::Apps);
        handle_key(&mut state, key(KeyCode::Char('4')));
        assert_eq!(state.current_tab, Tab::Finance);
    }

    #[test]
    fn finance_keys_drive_selected_tile_rotation() {
        let mut state = state();
        state.switch_tab(Tab::Finance);
        // Select a tile with more than one slide.
        state.selected_tile = (0..state.tile_count())
            .find(|&i| state.rotation(i).unwrap().len() > 1)
            .unwrap();

        handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.rotation(state.selected_tile).unwrap().index(), 1);
        handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.rotation(state.selected_tile).unwrap().index(), 0);

        handle_key(&mut state, key(KeyCode::Char('p')));
        assert!(state.rotation(state.selected_tile).unwrap().is_pinned());
        handle_key(&mut state, key(KeyCode::Char('p')));
        assert!(!state.rotation(state.selected_tile).unwrap().is_pinned());
    }

    #[test]
    fn popup_captures_navigation_until_closed() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert!(state.popup.is_open());

        handle_key(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });
        // Tab switching is inert while the popup is open.
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Apps);

        handle_key(&mut state, key(KeyCode::Esc));
        assert!(!state.popup.is_open());
    }

    #[test]
    fn filter_mode_applies_and_clears() {
        let mut state = state();
        state.switch_tab(Tab::Board);
        state.board_tab = BoardTab::Approvals;
        handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.input_mode, InputMode::Filter);

        for c in "jane".chars() {
            handle_key(&mut state, key(KeyCode::Char(c)));
        }
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.approvals.filter.as_deref(), Some("jane"));
        assert_eq!(state.approvals.filtered_items().len(), 1);

        handle_key(&mut state, key(KeyCode::Char('/')));
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(state.approvals.filter.is_none());
    }

    #[test]
    fn workflow_lock_toggle() {
        let mut state = state();
        state.switch_tab(Tab::Workflow);
        handle_key(&mut state, key(KeyCode::Char('u')));
        assert!(state.workflow_locked);
        handle_key(&mut state, key(KeyCode::Char('u')));
        assert!(!state.workflow_locked);
    }

    #[test]
    fn files_keys_select_sheets_and_start_analysis() {
        let mut state = state();
        state.switch_tab(Tab::Files);
        handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.selected_sheet, 1);
        handle_key(&mut state, key(KeyCode::Char('a')));
        assert!(matches!(
            state.analysis,
            crate::tui::state::AnalysisState::Running { .. }
        ));
    }

    #[test]
    fn selection_keys_clamp_at_bounds() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.selected_app, 0);
        let count = state.snapshot.as_ref().unwrap().applications.len();
        for _ in 0..count + 5 {
            handle_key(&mut state, key(KeyCode::Down));
        }
        assert_eq!(state.selected_app, count - 1);
    }
}
