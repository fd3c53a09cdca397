//! Domain records for the dashboard.
//!
//! Everything here is display data: records parsed from the embedded demo
//! dataset or built by the mock generators. No persistence, no wire format.

mod applications;
pub mod mock;

pub use applications::{ApplicationRecord, load_application_records};

use serde::{Deserialize, Serialize};

/// Per-workflow task counters shown in headers and cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub completed: u32,
    pub failed: u32,
    pub rejected: u32,
    pub pending: u32,
    pub processing: u32,
}

impl TaskCounts {
    pub fn total(&self) -> u32 {
        self.completed + self.failed + self.rejected + self.pending + self.processing
    }

    /// Failed and rejected are displayed as one bucket.
    pub fn failed_total(&self) -> u32 {
        self.failed + self.rejected
    }
}

/// An application card on the Apps tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Overall progress, 0..=100.
    pub progress: u8,
    pub active: bool,
    pub task_counts: TaskCounts,
    pub eligible_roles: Vec<String>,
}

/// One node of the workflow hierarchy path (application > level > workflow).
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub id: String,
    pub name: String,
    pub progress: u8,
}

/// One stage button in the workflow stages bar.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowStage {
    pub id: String,
    pub name: String,
    pub completion: u8,
}

/// Header-level summary of the selected workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowSummary {
    pub id: String,
    pub title: String,
    pub status: String,
    pub progress: u8,
    pub hierarchy: Vec<HierarchyNode>,
    pub stages: Vec<WorkflowStage>,
    pub active_stage: usize,
    pub task_counts: TaskCounts,
}

/// Approval priority. Ordering is by urgency, high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Sort rank, lower is more urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// A pending approval row on the management board.
#[derive(Debug, Clone, PartialEq)]
pub struct Approval {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub due: String,
    pub assignee: String,
}

/// Status dot color of a finance tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStatus {
    Success,
    Warning,
    Error,
    Info,
}

/// One unit of rotating content inside a tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSlide {
    pub title: String,
    /// Label/value pairs rendered as the slide body.
    pub lines: Vec<(String, String)>,
    pub source: Option<String>,
}

/// A finance tile with its slide deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TileStatus,
    pub alert: bool,
    pub last_updated: String,
    pub slides: Vec<TileSlide>,
}

/// One stat card on the performance board.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub description: String,
    /// Trend percentage, displayed with an up/down arrow.
    pub trend_pct: f64,
    pub trend_positive: bool,
}

/// Management board numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceStats {
    pub cards: Vec<StatCard>,
    /// Regulatory adherence, 0..=100.
    pub compliance_rate: u8,
}

/// One sheet of a previewed workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A previewable file with its sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct FileData {
    pub id: String,
    pub name: String,
    pub sheets: Vec<Sheet>,
}

impl FileData {
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }
}

/// Sentiment marker for an analysis insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub text: String,
    pub value: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub text: String,
    pub priority: Priority,
}

/// Result of the simulated file analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub title: String,
    pub timestamp: i64,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
    pub anomalies: Vec<String>,
    /// Data quality, 0..=100.
    pub quality_score: u8,
    pub quality_details: String,
}

/// Everything the dashboard shows for one refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// Unix seconds when this snapshot was produced.
    pub timestamp: i64,
    pub applications: Vec<Application>,
    pub workflow: WorkflowSummary,
    pub tiles: Vec<Tile>,
    pub approvals: Vec<Approval>,
    pub stats: PerformanceStats,
    pub files: Vec<FileData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_counts_totals() {
        let counts = TaskCounts {
            completed: 3,
            failed: 1,
            rejected: 2,
            pending: 4,
            processing: 5,
        };
        assert_eq!(counts.total(), 15);
        assert_eq!(counts.failed_total(), 3);
    }

    #[test]
    fn priority_ordering_is_by_urgency() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(Priority::High.rank(), 0);
    }
}
