//! File preview tab and the analysis report popup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};

use crate::data::{AnalysisReport, Sheet};
use crate::tui::state::{AnalysisState, AppState, PopupState};
use crate::tui::style::Styles;

use super::common::{clamp_scroll, popup_area};

/// Renders the file preview: sheet tab bar, sheet grid and analysis status.
pub fn render_files(frame: &mut Frame, area: Rect, state: &AppState) {
    let file = state.snapshot.as_ref().and_then(|s| s.files.first());
    let Some(file) = file else {
        let block = Block::default()
            .title(" Files ")
            .borders(Borders::ALL)
            .style(Styles::default());
        frame.render_widget(Paragraph::new("No data available").block(block), area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    // Sheet tab bar.
    let mut spans = vec![Span::styled(format!(" {} ", file.name), Styles::section_header())];
    for (i, sheet) in file.sheets.iter().enumerate() {
        let style = if i == state.selected_sheet {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} ", sheet.name), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    match file.sheet(state.selected_sheet) {
        Some(sheet) => render_sheet(frame, chunks[1], sheet),
        None => frame.render_widget(Paragraph::new("No data available"), chunks[1]),
    }

    let status = match &state.analysis {
        AnalysisState::Idle => Span::styled("a:analyze", Styles::help()),
        AnalysisState::Running { .. } => Span::styled("Analyzing...", Styles::warning()),
        AnalysisState::Ready(_) => Span::styled("Analysis ready (a:reopen)", Styles::ok()),
    };
    frame.render_widget(Paragraph::new(status), chunks[2]);
}

fn render_sheet(frame: &mut Frame, area: Rect, sheet: &Sheet) {
    let block = Block::default()
        .title(format!(" {} [{} rows] ", sheet.name, sheet.rows.len()))
        .borders(Borders::ALL)
        .style(Styles::default());

    if sheet.rows.is_empty() {
        frame.render_widget(Paragraph::new("No data available").block(block), area);
        return;
    }

    let header = Row::new(
        sheet
            .headers
            .iter()
            .map(|h| Span::styled(h.clone(), Styles::table_header())),
    )
    .height(1);
    let rows: Vec<Row> = sheet
        .rows
        .iter()
        .map(|cells| Row::new(cells.iter().map(|c| Span::raw(c.clone()))).height(1))
        .collect();
    let widths: Vec<Constraint> = sheet.headers.iter().map(|_| Constraint::Fill(1)).collect();

    frame.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1),
        area,
    );
}

/// Renders the analysis report popup over the current tab.
pub fn render_analysis_popup(frame: &mut Frame, area: Rect, state: &AppState) {
    let AnalysisState::Ready(report) = &state.analysis else {
        return;
    };
    let scroll = match state.popup {
        PopupState::Analysis { scroll } => scroll,
        _ => return,
    };

    let popup = popup_area(area, 70, 20);
    let block = Block::default()
        .title(format!(" Analysis: {} ", report.title))
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let lines = report_lines(report);
    let scroll = clamp_scroll(scroll, lines.len(), inner.height as usize);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll)
        .take(inner.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(visible), inner);
}

fn report_lines(report: &AnalysisReport) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Insights",
        Styles::section_header(),
    ))];
    for insight in &report.insights {
        lines.push(Line::from(vec![
            Span::styled("• ", Styles::sentiment(insight.sentiment)),
            Span::raw(insight.text.clone()),
            Span::styled(format!("  {}", insight.value), Styles::dim()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Recommendations",
        Styles::section_header(),
    )));
    for rec in &report.recommendations {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", rec.priority.label()), Styles::priority(rec.priority)),
            Span::raw(rec.text.clone()),
        ]));
    }

    if !report.anomalies.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Anomalies",
            Styles::section_header(),
        )));
        for anomaly in &report.anomalies {
            lines.push(Line::from(vec![
                Span::styled("! ", Styles::warning()),
                Span::raw(anomaly.clone()),
            ]));
        }
    }

    lines.push(Line::from(""));
    let quality_style = if report.quality_score >= 90 {
        Styles::ok()
    } else if report.quality_score >= 70 {
        Styles::warning()
    } else {
        Styles::critical()
    };
    lines.push(Line::from(vec![
        Span::styled("Data quality: ", Styles::section_header()),
        Span::styled(format!("{}%", report.quality_score), quality_style),
        Span::styled(format!("  {}", report.quality_details), Styles::dim()),
    ]));
    lines.push(Line::from(Span::styled(
        "j/k:scroll  Esc:close",
        Styles::help(),
    )));
    lines
}
