//! Application state management.

use crate::data::{AnalysisReport, DashboardSnapshot, TileSlide, mock};
use crate::view::{RefreshClock, SlideRotation};

use super::rows::ApprovalRow;
use super::table::TableState;

/// Ticks between the analysis request and its result, standing in for the
/// upstream service latency.
pub const ANALYSIS_DELAY_TICKS: u8 = 2;

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Apps,
    Board,
    Workflow,
    Finance,
    Files,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Apps, Tab::Board, Tab::Workflow, Tab::Finance, Tab::Files]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Apps => "Apps",
            Tab::Board => "Board",
            Tab::Workflow => "Workflow",
            Tab::Finance => "Finance",
            Tab::Files => "Files",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Apps => Tab::Board,
            Tab::Board => Tab::Workflow,
            Tab::Workflow => Tab::Finance,
            Tab::Finance => Tab::Files,
            Tab::Files => Tab::Apps,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Apps => Tab::Files,
            Tab::Board => Tab::Apps,
            Tab::Workflow => Tab::Board,
            Tab::Finance => Tab::Workflow,
            Tab::Files => Tab::Finance,
        }
    }
}

/// Sub-tabs of the management board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardTab {
    #[default]
    Performance,
    Compliance,
    Approvals,
}

impl BoardTab {
    pub fn all() -> &'static [BoardTab] {
        &[BoardTab::Performance, BoardTab::Compliance, BoardTab::Approvals]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoardTab::Performance => "Performance",
            BoardTab::Compliance => "Compliance",
            BoardTab::Approvals => "Approvals",
        }
    }

    pub fn next(&self) -> BoardTab {
        match self {
            BoardTab::Performance => BoardTab::Compliance,
            BoardTab::Compliance => BoardTab::Approvals,
            BoardTab::Approvals => BoardTab::Performance,
        }
    }

    pub fn prev(&self) -> BoardTab {
        match self {
            BoardTab::Performance => BoardTab::Approvals,
            BoardTab::Compliance => BoardTab::Performance,
            BoardTab::Approvals => BoardTab::Compliance,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the approvals filter.
    Filter,
}

/// Active popup. Only one can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Analysis report popup with scroll offset.
    Analysis { scroll: usize },
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Lifecycle of the simulated file analysis.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    /// Request in flight; completes when the countdown reaches zero.
    Running { remaining_ticks: u8 },
    Ready(AnalysisReport),
}

/// What a tick asks the app loop to do next.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TickEffects {
    /// The auto-refresh cadence elapsed; the provider should refresh.
    pub refresh_due: bool,
    /// The simulated analysis finished on this tick.
    pub analysis_completed: bool,
}

/// Full TUI state.
pub struct AppState {
    pub current_tab: Tab,
    pub board_tab: BoardTab,
    pub input_mode: InputMode,
    pub popup: PopupState,

    pub snapshot: Option<DashboardSnapshot>,
    /// Header display state; created on the first successful refresh.
    pub refresh_clock: Option<RefreshClock>,

    /// Per-tile rotation state, parallel to `snapshot.tiles`.
    rotations: Vec<(String, SlideRotation<TileSlide>)>,
    rotation_period: u32,

    /// Ticks until the next automatic provider refresh. Deliberately
    /// independent from the header countdown, which is display only.
    refresh_in: u32,
    refresh_period: u32,

    pub selected_app: usize,
    pub selected_tile: usize,
    pub selected_stage: usize,
    pub selected_sheet: usize,
    pub approvals: TableState<ApprovalRow>,
    pub filter_input: String,

    pub analysis: AnalysisState,
    pub workflow_locked: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(refresh_period: u32, rotation_period: u32) -> Self {
        let refresh_period = refresh_period.max(1);
        Self {
            current_tab: Tab::default(),
            board_tab: BoardTab::default(),
            input_mode: InputMode::default(),
            popup: PopupState::default(),
            snapshot: None,
            refresh_clock: None,
            rotations: Vec::new(),
            rotation_period: rotation_period.max(1),
            refresh_in: refresh_period,
            refresh_period,
            selected_app: 0,
            selected_tile: 0,
            selected_stage: 0,
            selected_sheet: 0,
            approvals: TableState::new(),
            filter_input: String::new(),
            analysis: AnalysisState::default(),
            workflow_locked: false,
            status_message: None,
        }
    }

    /// Installs a fresh snapshot: updates the approvals table, rebuilds the
    /// tile rotations (keeping pin state and index for tiles that survive
    /// the refresh), and clamps every selection.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.approvals
            .update(snapshot.approvals.iter().map(ApprovalRow::from).collect());

        let mut old: Vec<(String, SlideRotation<TileSlide>)> =
            std::mem::take(&mut self.rotations);
        self.rotations = snapshot
            .tiles
            .iter()
            .map(|tile| {
                let rotation = match old.iter().position(|(id, _)| *id == tile.id) {
                    Some(pos) => {
                        let (_, mut rotation) = old.swap_remove(pos);
                        rotation.set_items(tile.slides.clone());
                        rotation
                    }
                    None => SlideRotation::with_period(tile.slides.clone(), self.rotation_period),
                };
                (tile.id.clone(), rotation)
            })
            .collect();

        self.selected_app = self
            .selected_app
            .min(snapshot.applications.len().saturating_sub(1));
        self.selected_tile = self.selected_tile.min(snapshot.tiles.len().saturating_sub(1));
        if self.snapshot.is_none() {
            self.selected_stage = snapshot.workflow.active_stage;
        }
        self.selected_stage = self
            .selected_stage
            .min(snapshot.workflow.stages.len().saturating_sub(1));
        if let Some(file) = snapshot.files.first() {
            self.selected_sheet = self.selected_sheet.min(file.sheets.len().saturating_sub(1));
        }

        self.snapshot = Some(snapshot);
    }

    /// Records a completed refresh at `now` and re-arms the auto-refresh
    /// cadence.
    pub fn mark_refreshed(&mut self, now: i64) {
        match &mut self.refresh_clock {
            Some(clock) => clock.mark_refreshed(now),
            None => self.refresh_clock = Some(RefreshClock::new(now)),
        }
        self.refresh_in = self.refresh_period;
    }

    /// One second of elapsed time for every view-state controller.
    pub fn on_tick(&mut self, now: i64) -> TickEffects {
        let mut effects = TickEffects::default();

        for (_, rotation) in &mut self.rotations {
            rotation.tick();
        }

        if let Some(clock) = &mut self.refresh_clock {
            clock.tick(now);
        }

        self.refresh_in = self.refresh_in.saturating_sub(1);
        if self.refresh_in == 0 {
            effects.refresh_due = true;
            self.refresh_in = self.refresh_period;
        }

        if let AnalysisState::Running { remaining_ticks } = &mut self.analysis {
            *remaining_ticks = remaining_ticks.saturating_sub(1);
            if *remaining_ticks == 0 {
                let report = self
                    .snapshot
                    .as_ref()
                    .and_then(|s| s.files.first())
                    .map(|f| mock::analysis_report(&f.name, now));
                match report {
                    Some(report) => {
                        self.analysis = AnalysisState::Ready(report);
                        self.popup = PopupState::Analysis { scroll: 0 };
                        effects.analysis_completed = true;
                    }
                    None => self.analysis = AnalysisState::Idle,
                }
            }
        }

        effects
    }

    /// Requests the simulated analysis for the previewed file.
    pub fn start_analysis(&mut self) {
        let has_file = self
            .snapshot
            .as_ref()
            .map(|s| !s.files.is_empty())
            .unwrap_or(false);
        if !has_file {
            self.status_message = Some("No file data available".to_string());
            return;
        }
        if matches!(self.analysis, AnalysisState::Running { .. }) {
            return;
        }
        self.analysis = AnalysisState::Running {
            remaining_ticks: ANALYSIS_DELAY_TICKS,
        };
    }

    /// Rotation state of the tile at `index`, if it exists.
    pub fn rotation(&self, index: usize) -> Option<&SlideRotation<TileSlide>> {
        self.rotations.get(index).map(|(_, r)| r)
    }

    pub fn selected_rotation_mut(&mut self) -> Option<&mut SlideRotation<TileSlide>> {
        self.rotations.get_mut(self.selected_tile).map(|(_, r)| r)
    }

    pub fn tile_count(&self) -> usize {
        self.rotations.len()
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state_with_snapshot() -> AppState {
        let mut state = AppState::new(15, 15);
        let snapshot = mock::snapshot(&mut StdRng::seed_from_u64(3), 1_000);
        state.apply_snapshot(snapshot);
        state.mark_refreshed(1_000);
        state
    }

    #[test]
    fn tab_cycle_is_closed() {
        let mut tab = Tab::Apps;
        for _ in 0..Tab::all().len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Apps);
        assert_eq!(Tab::Apps.prev().next(), Tab::Apps);
    }

    #[test]
    fn apply_snapshot_builds_rotations_per_tile() {
        let state = state_with_snapshot();
        let snapshot = state.snapshot.as_ref().unwrap();
        assert_eq!(state.tile_count(), snapshot.tiles.len());
        // The empty-deck tile reports the no-data sentinel.
        let empty_idx = snapshot.tiles.iter().position(|t| t.slides.is_empty()).unwrap();
        assert!(state.rotation(empty_idx).unwrap().current().is_none());
    }

    #[test]
    fn reapplying_snapshot_preserves_pin_state() {
        let mut state = state_with_snapshot();
        state.selected_tile = 0;
        state.selected_rotation_mut().unwrap().pin();

        let snapshot = mock::snapshot(&mut StdRng::seed_from_u64(4), 2_000);
        state.apply_snapshot(snapshot);
        assert!(state.rotation(0).unwrap().is_pinned());
    }

    #[test]
    fn auto_refresh_due_every_period() {
        let mut state = state_with_snapshot();
        for i in 1..15 {
            assert!(!state.on_tick(1_000 + i).refresh_due);
        }
        assert!(state.on_tick(1_015).refresh_due);
        // Cadence re-arms afterwards.
        for i in 16..30 {
            assert!(!state.on_tick(1_000 + i).refresh_due);
        }
        assert!(state.on_tick(1_030).refresh_due);
    }

    #[test]
    fn header_countdown_keeps_cadence_across_manual_refresh() {
        let mut state = state_with_snapshot();
        state.on_tick(1_001);
        state.on_tick(1_002);
        let countdown = state.refresh_clock.as_ref().unwrap().countdown();

        // Manual refresh does not reset the display countdown.
        state.mark_refreshed(1_002);
        assert_eq!(state.refresh_clock.as_ref().unwrap().countdown(), countdown);
        assert_eq!(state.refresh_clock.as_ref().unwrap().seconds_since_refresh(), 0);
    }

    #[test]
    fn analysis_completes_after_fixed_latency() {
        let mut state = state_with_snapshot();
        state.start_analysis();
        assert!(matches!(state.analysis, AnalysisState::Running { .. }));

        assert!(!state.on_tick(1_001).analysis_completed);
        let effects = state.on_tick(1_002);
        assert!(effects.analysis_completed);
        assert!(matches!(state.analysis, AnalysisState::Ready(_)));
        assert!(matches!(state.popup, PopupState::Analysis { .. }));
    }

    #[test]
    fn analysis_without_snapshot_degrades_to_message() {
        let mut state = AppState::new(15, 15);
        state.start_analysis();
        assert_eq!(state.analysis, AnalysisState::Idle);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn rotations_advance_on_state_tick() {
        let mut state = state_with_snapshot();
        let rotating = (0..state.tile_count())
            .find(|&i| state.rotation(i).unwrap().len() > 1)
            .unwrap();
        assert_eq!(state.rotation(rotating).unwrap().index(), 0);
        for i in 0..15 {
            state.on_tick(1_001 + i);
        }
        assert_eq!(state.rotation(rotating).unwrap().index(), 1);
    }
}
