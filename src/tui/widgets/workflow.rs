//! Workflow header card and stages bar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data::WorkflowSummary;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::util::progress_bar;

/// Renders the workflow tab: summary card on top, stage details below.
pub fn render_workflow(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(snapshot) = &state.snapshot else {
        let block = Block::default()
            .title(" Workflow ")
            .borders(Borders::ALL)
            .style(Styles::default());
        frame.render_widget(Paragraph::new("No data available").block(block), area);
        return;
    };

    let chunks = Layout::vertical([Constraint::Length(7), Constraint::Min(3)]).split(area);
    render_summary(frame, chunks[0], &snapshot.workflow, state.workflow_locked);
    render_stages(frame, chunks[1], &snapshot.workflow, state.selected_stage);
}

fn render_summary(frame: &mut Frame, area: Rect, workflow: &WorkflowSummary, locked: bool) {
    let status_style = match workflow.status.as_str() {
        "running" => Styles::ok(),
        "blocked" => Styles::critical(),
        _ => Styles::dim(),
    };
    let mut title_spans = vec![
        Span::styled("●", status_style),
        Span::raw(format!(" {} ", workflow.title)),
    ];
    if locked {
        title_spans.push(Span::styled("[locked] ", Styles::warning()));
    }
    let block = Block::default()
        .title(Line::from(title_spans))
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Hierarchy path with per-node progress.
    let mut path = Vec::new();
    for (i, node) in workflow.hierarchy.iter().enumerate() {
        if i > 0 {
            path.push(Span::styled(" > ", Styles::dim()));
        }
        path.push(Span::raw(node.name.clone()));
        path.push(Span::styled(format!(" ({}%)", node.progress), Styles::dim()));
    }

    let counts = workflow.task_counts;
    let lines = vec![
        Line::from(path),
        Line::from(vec![
            Span::raw(progress_bar(workflow.progress, 30)),
            Span::raw(format!(" {:>3}%  ", workflow.progress)),
            Span::styled(workflow.status.clone(), status_style),
        ]),
        Line::from(vec![
            Span::styled(format!("✓ {}", counts.completed), Styles::ok()),
            Span::raw("  "),
            Span::styled(format!("▶ {}", counts.processing), Styles::default()),
            Span::raw("  "),
            Span::styled(format!("… {}", counts.pending), Styles::warning()),
            Span::raw("  "),
            Span::styled(format!("✗ {}", counts.failed_total()), Styles::critical()),
            Span::raw("  "),
            Span::styled(format!("Σ {}", counts.total()), Styles::dim()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_stages(frame: &mut Frame, area: Rect, workflow: &WorkflowSummary, selected: usize) {
    let block = Block::default()
        .title(" Stages ")
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if workflow.stages.is_empty() {
        frame.render_widget(Paragraph::new("No data available"), inner);
        return;
    }

    let mut lines = Vec::new();
    for (i, stage) in workflow.stages.iter().enumerate() {
        let marker = if i == workflow.active_stage {
            Span::styled("▶ ", Styles::tab_active())
        } else if stage.completion >= 100 {
            Span::styled("✓ ", Styles::ok())
        } else {
            Span::styled("  ", Styles::dim())
        };
        let name_style = if i == selected {
            Styles::selected()
        } else if i == workflow.active_stage {
            Styles::tab_active()
        } else {
            Styles::default()
        };
        lines.push(Line::from(vec![
            marker,
            Span::styled(format!("{:<24}", stage.name), name_style),
            Span::raw(progress_bar(stage.completion, 20)),
            Span::styled(format!(" {:>3}%", stage.completion), Styles::dim()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
