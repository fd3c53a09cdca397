//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::data::{Priority, Sentiment, TileStatus};

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;

    pub const OK: Color = Color::Green;
    pub const WARN: Color = Color::Yellow;
    pub const CRIT: Color = Color::Red;
    pub const INFO: Color = Color::Blue;

    pub const HIGHLIGHT_NEW: Color = Color::Green;
    pub const HIGHLIGHT_MODIFIED: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Top header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row or card style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Rows added by the last refresh (green).
    pub fn new_item() -> Style {
        Style::default().fg(Theme::HIGHLIGHT_NEW)
    }

    /// Rows changed by the last refresh (yellow).
    pub fn modified_item() -> Style {
        Style::default().fg(Theme::HIGHLIGHT_MODIFIED)
    }

    pub fn ok() -> Style {
        Style::default().fg(Theme::OK)
    }

    pub fn warning() -> Style {
        Style::default().fg(Theme::WARN)
    }

    pub fn critical() -> Style {
        Style::default().fg(Theme::CRIT).add_modifier(Modifier::BOLD)
    }

    /// Section header style for popups and cards.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Highlighted keys in the help line.
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Filter input style.
    pub fn filter_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style of a tile/workflow status dot.
    pub fn status(status: TileStatus) -> Style {
        match status {
            TileStatus::Success => Self::ok(),
            TileStatus::Warning => Self::warning(),
            TileStatus::Error => Self::critical(),
            TileStatus::Info => Style::default().fg(Theme::INFO),
        }
    }

    /// Style of an approval priority cell.
    pub fn priority(priority: Priority) -> Style {
        match priority {
            Priority::High => Self::critical(),
            Priority::Medium => Self::warning(),
            Priority::Low => Self::dim(),
        }
    }

    /// Style of an analysis insight.
    pub fn sentiment(sentiment: Sentiment) -> Style {
        match sentiment {
            Sentiment::Positive => Self::ok(),
            Sentiment::Neutral => Self::dim(),
            Sentiment::Negative => Self::critical(),
        }
    }
}
