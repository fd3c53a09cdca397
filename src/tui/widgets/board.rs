//! Management board: performance stats, compliance, approvals.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Row, Table};

use crate::data::{PerformanceStats, StatCard};
use crate::tui::state::{AppState, BoardTab};
use crate::tui::style::Styles;
use crate::tui::table::{DiffStatus, TableRow};
use crate::util::format_trend;

/// Renders the management board with its sub-tab bar.
pub fn render_board(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(5)]).split(area);

    let mut spans = Vec::new();
    for tab in BoardTab::all() {
        let style = if *tab == state.board_tab {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} ", tab.name()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let Some(snapshot) = &state.snapshot else {
        let block = Block::default()
            .title(" Management Board ")
            .borders(Borders::ALL)
            .style(Styles::default());
        frame.render_widget(Paragraph::new("No data available").block(block), chunks[1]);
        return;
    };

    match state.board_tab {
        BoardTab::Performance => render_performance(frame, chunks[1], &snapshot.stats),
        BoardTab::Compliance => render_compliance(frame, chunks[1], &snapshot.stats),
        BoardTab::Approvals => render_approvals(frame, chunks[1], state),
    }
}

fn render_performance(frame: &mut Frame, area: Rect, stats: &PerformanceStats) {
    let block = Block::default()
        .title(" Performance Overview (Period: Current) ")
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if stats.cards.is_empty() {
        frame.render_widget(Paragraph::new("No data available"), inner);
        return;
    }

    let constraints: Vec<Constraint> = stats
        .cards
        .iter()
        .map(|_| Constraint::Ratio(1, stats.cards.len() as u32))
        .collect();
    let columns = Layout::horizontal(constraints).split(inner);
    for (card, cell) in stats.cards.iter().zip(columns.iter()) {
        render_stat_card(frame, *cell, card);
    }
}

fn render_stat_card(frame: &mut Frame, area: Rect, card: &StatCard) {
    let trend_style = if card.trend_positive {
        Styles::ok()
    } else {
        Styles::critical()
    };
    let lines = vec![
        Line::from(Span::styled(card.title.clone(), Styles::section_header())),
        Line::from(Span::styled(
            card.value.clone(),
            Styles::default().add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(card.description.clone(), Styles::dim())),
        Line::from(Span::styled(
            format_trend(card.trend_pct, card.trend_positive),
            trend_style,
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(Styles::dim())),
        area,
    );
}

fn render_compliance(frame: &mut Frame, area: Rect, stats: &PerformanceStats) {
    let block = Block::default()
        .title(" Compliance ")
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .split(inner);
    frame.render_widget(
        Paragraph::new(Span::styled("Regulatory adherence", Styles::dim())),
        chunks[0],
    );

    let rate = stats.compliance_rate.min(100);
    let gauge_style = if rate >= 90 {
        Styles::ok()
    } else if rate >= 75 {
        Styles::warning()
    } else {
        Styles::critical()
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(gauge_style)
            .percent(rate as u16)
            .label(format!("{}%", rate)),
        chunks[1],
    );
}

fn render_approvals(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows_data = state.approvals.filtered_items();

    let title = match &state.approvals.filter {
        Some(filter) => format!(
            " Pending Approvals (filter: {}) [{} rows] ",
            filter,
            rows_data.len()
        ),
        None => format!(" Pending Approvals [{} rows] ", rows_data.len()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Styles::default());

    if rows_data.is_empty() {
        frame.render_widget(Paragraph::new("No data available").block(block), area);
        return;
    }

    // Header with sort indicator
    let headers: Vec<Span> = crate::tui::rows::ApprovalRow::headers()
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let indicator = if i == state.approvals.sort_column {
                if state.approvals.sort_ascending { "▲" } else { "▼" }
            } else {
                ""
            };
            Span::styled(format!("{}{}", h, indicator), Styles::table_header())
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let rows: Vec<Row> = rows_data
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let style = if idx == state.approvals.selected {
                Styles::selected()
            } else {
                match state.approvals.diff_status.get(&r.id()) {
                    Some(DiffStatus::New) => Styles::new_item(),
                    Some(DiffStatus::Modified) => Styles::modified_item(),
                    _ => Styles::default(),
                }
            };
            Row::new(vec![
                Span::styled(r.priority.label(), Styles::priority(r.priority)),
                Span::raw(r.title.clone()),
                Span::raw(r.due.clone()),
                Span::raw(r.assignee.clone()),
            ])
            .style(style)
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);

    frame.render_widget(table, area);
}
