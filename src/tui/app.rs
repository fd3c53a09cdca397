//! Main TUI application.

use std::io;
use std::time::Duration;

use chrono::Utc;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::provider::DashboardProvider;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    provider: Box<dyn DashboardProvider>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App with the given provider.
    pub fn new(provider: Box<dyn DashboardProvider>, refresh_period: u32, rotation_period: u32) -> Self {
        Self {
            provider,
            state: AppState::new(refresh_period, rotation_period),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler
        let events = EventHandler::new(tick_rate);

        // Initial data fetch
        self.refresh();

        // Main loop
        loop {
            let source = self.provider.source_name();
            terminal.draw(|frame| render(frame, &self.state, source))?;

            match events.next() {
                Ok(Event::Tick) => {
                    let effects = self.state.on_tick(Utc::now().timestamp());
                    if effects.analysis_completed {
                        debug!("file analysis completed");
                    }
                    if effects.refresh_due {
                        self.refresh();
                    }
                }
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Refresh => self.refresh(),
                    KeyAction::None => {}
                },
                Ok(Event::Resize(_)) => {
                    // Layout is recomputed on every draw.
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        events.cancel();

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Pulls a fresh snapshot from the provider into the view state.
    fn refresh(&mut self) {
        match self.provider.refresh() {
            Some(snapshot) => {
                let snapshot = snapshot.clone();
                self.state.apply_snapshot(snapshot);
                self.state.mark_refreshed(Utc::now().timestamp());
                debug!("snapshot refreshed");
            }
            None => {
                let message = self
                    .provider
                    .last_error()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "Refresh failed".to_string());
                self.state.status_message = Some(message);
            }
        }
    }
}
