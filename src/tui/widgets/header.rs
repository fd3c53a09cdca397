//! Top header bar and bottom status line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;
use crate::util::format_age;

/// Renders the header: app name, tab bar and refresh status.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, source: &str) {
    let chunks =
        Layout::horizontal([Constraint::Min(30), Constraint::Length(42)]).split(area);

    let mut spans = vec![
        Span::styled(" finboard ", Styles::header()),
        Span::raw(" "),
    ];
    for (i, tab) in Tab::all().iter().enumerate() {
        let style = if *tab == state.current_tab {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, tab.name()), style));
    }
    spans.push(Span::styled(format!(" [{}]", source), Styles::dim()));
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    // "Last refreshed: Xs | Auto-refresh in: Ys"
    let refresh_text = match &state.refresh_clock {
        Some(clock) => format!(
            "Last refreshed: {} | Auto-refresh in: {}s ",
            format_age(clock.seconds_since_refresh()),
            clock.countdown()
        ),
        None => "Waiting for first refresh... ".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(refresh_text, Styles::dim()))
            .right_aligned(),
        chunks[1],
    );
}

/// Renders the bottom line: filter input, status message or key hints.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.input_mode == InputMode::Filter {
        Line::from(vec![
            Span::styled("/", Styles::help_key()),
            Span::styled(state.filter_input.clone(), Styles::filter_input()),
            Span::styled("  Enter:apply Esc:clear", Styles::help()),
        ])
    } else if let Some(message) = &state.status_message {
        Line::from(Span::styled(message.clone(), Styles::warning()))
    } else {
        let hint = match state.current_tab {
            Tab::Apps => "j/k:select  r:refresh  ?:help  q:quit",
            Tab::Board => "h/l:section  j/k:select  s:sort  d:direction  /:filter  ?:help",
            Tab::Workflow => "h/l:stage  u:lock  r:refresh  ?:help",
            Tab::Finance => "j/k:tile  h/l:slide  p:pin  ?:help",
            Tab::Files => "h/l:sheet  a:analyze  ?:help",
        };
        Line::from(Span::styled(hint, Styles::help()))
    };
    frame.render_widget(Paragraph::new(line), area);
}
