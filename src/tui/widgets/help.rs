//! Scrollable help popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::{AppState, PopupState};
use crate::tui::style::Styles;

use super::common::{clamp_scroll, popup_area};

const BINDINGS: &[(&str, &str)] = &[
    ("q, Ctrl-C", "quit"),
    ("Tab / Shift-Tab", "next / previous tab"),
    ("1-5", "jump to tab"),
    ("r", "refresh now"),
    ("?", "toggle this help"),
    ("", ""),
    ("Apps", ""),
    ("j/k", "select application"),
    ("", ""),
    ("Board", ""),
    ("h/l", "switch section"),
    ("j/k", "select approval"),
    ("s", "cycle sort column"),
    ("d", "toggle sort direction"),
    ("/", "filter approvals"),
    ("", ""),
    ("Workflow", ""),
    ("h/l", "select stage"),
    ("u", "toggle lock"),
    ("", ""),
    ("Finance", ""),
    ("j/k", "select tile"),
    ("h/l", "previous / next slide"),
    ("p", "pin / unpin rotation"),
    ("", ""),
    ("Files", ""),
    ("h/l", "select sheet"),
    ("a", "analyze file"),
];

/// Renders the help popup with key bindings.
pub fn render_help(frame: &mut Frame, area: Rect, state: &AppState) {
    let scroll = match state.popup {
        PopupState::Help { scroll } => scroll,
        _ => return,
    };

    let popup = popup_area(area, 46, 22);
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            if action.is_empty() {
                Line::from(Span::styled(*key, Styles::section_header()))
            } else {
                Line::from(vec![
                    Span::styled(format!("{key:<16}"), Styles::help_key()),
                    Span::styled(*action, Styles::help()),
                ])
            }
        })
        .collect();

    let scroll = clamp_scroll(scroll, lines.len(), inner.height as usize);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll)
        .take(inner.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(visible), inner);
}
