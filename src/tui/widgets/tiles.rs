//! Finance tiles with rotating slide decks.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data::{Tile, TileSlide};
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::SlideRotation;

const TILE_HEIGHT: u16 = 9;

/// Renders the finance tile grid, two tiles per row.
pub fn render_tiles(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(snapshot) = &state.snapshot else {
        render_empty(frame, area);
        return;
    };
    if snapshot.tiles.is_empty() {
        render_empty(frame, area);
        return;
    }

    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    let rows_per_column = (area.height / TILE_HEIGHT).max(1) as usize;

    for (i, tile) in snapshot.tiles.iter().enumerate() {
        let column = i % 2;
        let row = i / 2;
        if row >= rows_per_column {
            break;
        }
        let tile_area = Rect::new(
            columns[column].x,
            columns[column].y + (row as u16) * TILE_HEIGHT,
            columns[column].width,
            TILE_HEIGHT.min(
                columns[column]
                    .height
                    .saturating_sub((row as u16) * TILE_HEIGHT),
            ),
        );
        if tile_area.height < 4 {
            continue;
        }
        render_tile(
            frame,
            tile_area,
            tile,
            state.rotation(i),
            i == state.selected_tile,
        );
    }
}

fn render_tile(
    frame: &mut Frame,
    area: Rect,
    tile: &Tile,
    rotation: Option<&SlideRotation<TileSlide>>,
    selected: bool,
) {
    let border_style = if selected {
        Styles::tab_active()
    } else if tile.alert {
        Styles::critical()
    } else {
        Styles::dim()
    };

    let mut title_spans = vec![
        Span::styled("●", Styles::status(tile.status)),
        Span::raw(format!(" {} ", tile.title)),
    ];
    if rotation.map(|r| r.is_pinned()).unwrap_or(false) {
        title_spans.push(Span::styled("[pinned] ", Styles::warning()));
    }
    let block = Block::default()
        .title(Line::from(title_spans))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    match rotation.and_then(|r| r.current()) {
        Some(slide) => {
            lines.push(Line::from(Span::styled(
                slide.title.clone(),
                Styles::section_header(),
            )));
            for (label, value) in &slide.lines {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}: "), Styles::dim()),
                    Span::raw(value.clone()),
                ]));
            }
            if let Some(source) = &slide.source {
                lines.push(Line::from(Span::styled(
                    format!("source: {source}"),
                    Styles::dim(),
                )));
            }
        }
        None => lines.push(Line::from("No data available")),
    }

    // Slide position dots plus the refresh stamp.
    let mut footer = Vec::new();
    if let Some(rotation) = rotation {
        if rotation.len() > 1 {
            for i in 0..rotation.len() {
                footer.push(Span::styled(
                    if i == rotation.index() { "● " } else { "○ " },
                    if i == rotation.index() {
                        Styles::tab_active()
                    } else {
                        Styles::dim()
                    },
                ));
            }
        }
    }
    footer.push(Span::styled(
        format!("updated {}", tile.last_updated),
        Styles::dim(),
    ));

    let body_height = inner.height.saturating_sub(1);
    let chunks =
        Layout::vertical([Constraint::Length(body_height), Constraint::Length(1)]).split(inner);
    frame.render_widget(Paragraph::new(lines), chunks[0]);
    frame.render_widget(Paragraph::new(Line::from(footer)), chunks[1]);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Finance ")
        .borders(Borders::ALL)
        .style(Styles::default());
    frame.render_widget(Paragraph::new("No data available").block(block), area);
}
