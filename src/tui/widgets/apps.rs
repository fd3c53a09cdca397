//! Applications grid for the Apps tab.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data::Application;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::util::progress_bar;

const CARD_HEIGHT: u16 = 6;

/// Renders the application cards in a two-column grid.
pub fn render_apps(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(snapshot) = &state.snapshot else {
        render_empty(frame, area);
        return;
    };
    if snapshot.applications.is_empty() {
        render_empty(frame, area);
        return;
    }

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let rows_per_column = (area.height / CARD_HEIGHT).max(1) as usize;

    for (i, app) in snapshot.applications.iter().enumerate() {
        let column = i / rows_per_column;
        let row = i % rows_per_column;
        if column > 1 {
            break; // Out of screen space; remaining cards are not shown.
        }
        let card_area = Rect::new(
            columns[column].x,
            columns[column].y + (row as u16) * CARD_HEIGHT,
            columns[column].width,
            CARD_HEIGHT.min(columns[column].height.saturating_sub((row as u16) * CARD_HEIGHT)),
        );
        if card_area.height < 3 {
            continue;
        }
        render_card(frame, card_area, app, i == state.selected_app);
    }
}

fn render_card(frame: &mut Frame, area: Rect, app: &Application, selected: bool) {
    let border_style = if selected {
        Styles::tab_active()
    } else {
        Styles::dim()
    };
    let status = if app.active {
        Span::styled("● active", Styles::ok())
    } else {
        Span::styled("○ inactive", Styles::dim())
    };

    let counts = app.task_counts;
    let lines = vec![
        Line::from(Span::styled(app.description.clone(), Styles::dim())),
        Line::from(vec![
            Span::raw(progress_bar(app.progress, 20)),
            Span::raw(format!(" {:>3}%  ", app.progress)),
            status,
        ]),
        Line::from(vec![
            Span::styled(format!("✓ {}", counts.completed), Styles::ok()),
            Span::raw("  "),
            Span::styled(format!("▶ {}", counts.processing), Styles::default()),
            Span::raw("  "),
            Span::styled(format!("… {}", counts.pending), Styles::warning()),
            Span::raw("  "),
            Span::styled(format!("✗ {}", counts.failed_total()), Styles::critical()),
        ]),
        Line::from(Span::styled(app.eligible_roles.join(", "), Styles::dim())),
    ];

    let block = Block::default()
        .title(format!(" {} ", app.title))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Applications ")
        .borders(Borders::ALL)
        .style(Styles::default());
    frame.render_widget(Paragraph::new("No data available").block(block), area);
}
