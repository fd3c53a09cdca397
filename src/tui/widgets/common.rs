//! Shared widget helpers.

use ratatui::layout::Rect;

/// Centers a popup of the given size within `area`, clamped to fit.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Clamps a scroll offset so the last page stays filled.
pub fn clamp_scroll(scroll: usize, content_lines: usize, visible_lines: usize) -> usize {
    scroll.min(content_lines.saturating_sub(visible_lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = popup_area(area, 60, 20);
        assert_eq!(popup, Rect::new(20, 10, 60, 20));

        let oversized = popup_area(area, 200, 80);
        assert_eq!(oversized, area);
    }

    #[test]
    fn scroll_clamps_to_content() {
        assert_eq!(clamp_scroll(0, 100, 20), 0);
        assert_eq!(clamp_scroll(1000, 100, 20), 80);
        assert_eq!(clamp_scroll(5, 10, 20), 0);
    }
}
