//! Mock dataset builders.
//!
//! Pre-built demo content for the dashboard: applications transformed from
//! the embedded dataset, plus approvals, tiles, workbook sheets and the
//! analysis report. Placeholder metrics come from a caller-supplied RNG so
//! a seeded run is reproducible.

use rand::Rng;

use super::{
    AnalysisReport, Application, Approval, DashboardSnapshot, FileData, HierarchyNode, Insight,
    PerformanceStats, Priority, Recommendation, Sentiment, Sheet, StatCard, TaskCounts, Tile,
    TileSlide, TileStatus, WorkflowStage, WorkflowSummary, load_application_records,
};

/// Roles granted by default when the dataset carries none.
const DEFAULT_ROLES: &[&str] = &["PNL Manager", "Finance Analyst", "Compliance Officer"];

/// Placeholder task counts. Ranges match the upstream mock generator.
pub fn random_task_counts<R: Rng>(rng: &mut R) -> TaskCounts {
    TaskCounts {
        completed: rng.gen_range(5..20),
        failed: rng.gen_range(0..3),
        rejected: rng.gen_range(0..2),
        pending: rng.gen_range(2..12),
        processing: rng.gen_range(1..6),
    }
}

/// Transforms the embedded records into application cards.
pub fn applications<R: Rng>(rng: &mut R) -> Vec<Application> {
    let records = load_application_records().unwrap_or_default();
    records
        .into_iter()
        .map(|r| Application {
            id: format!("app-{}", r.app_id),
            title: r.name,
            description: r.description,
            progress: rng.gen_range(10..90),
            active: r.is_active,
            task_counts: random_task_counts(rng),
            eligible_roles: DEFAULT_ROLES.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

pub fn workflow_summary<R: Rng>(rng: &mut R) -> WorkflowSummary {
    WorkflowSummary {
        id: "wf-pnl-daily".to_string(),
        title: "Daily Named PNL".to_string(),
        status: "Active".to_string(),
        progress: 54,
        hierarchy: vec![
            HierarchyNode {
                id: "app-101".to_string(),
                name: "Daily Named PNL".to_string(),
                progress: 54,
            },
            HierarchyNode {
                id: "grp-emea".to_string(),
                name: "EMEA Rates".to_string(),
                progress: 68,
            },
            HierarchyNode {
                id: "wf-pnl-daily".to_string(),
                name: "2026-08-29 Run".to_string(),
                progress: 41,
            },
        ],
        stages: vec![
            WorkflowStage {
                id: "stage-capture".to_string(),
                name: "Capture".to_string(),
                completion: 100,
            },
            WorkflowStage {
                id: "stage-enrich".to_string(),
                name: "Enrichment".to_string(),
                completion: 80,
            },
            WorkflowStage {
                id: "stage-review".to_string(),
                name: "Desk Review".to_string(),
                completion: 35,
            },
            WorkflowStage {
                id: "stage-signoff".to_string(),
                name: "Sign-off".to_string(),
                completion: 0,
            },
        ],
        active_stage: 2,
        task_counts: random_task_counts(rng),
    }
}

pub fn approvals() -> Vec<Approval> {
    let items = [
        ("approval-1", "Daily Named PNL Approval", Priority::High, "Today", "John Doe"),
        ("approval-2", "Monthly Regulatory Report", Priority::High, "Tomorrow", "Jane Smith"),
        ("approval-3", "Risk Assessment Update", Priority::Medium, "In 2 days", "Mike Johnson"),
        ("approval-4", "Compliance Documentation", Priority::Medium, "In 3 days", "Sarah Williams"),
        ("approval-5", "Quarterly Review", Priority::Low, "Next week", "Robert Brown"),
    ];
    items
        .into_iter()
        .map(|(id, title, priority, due, assignee)| Approval {
            id: id.to_string(),
            title: title.to_string(),
            priority,
            due: due.to_string(),
            assignee: assignee.to_string(),
        })
        .collect()
}

pub fn performance_stats(applications: &[Application]) -> PerformanceStats {
    let active = applications.iter().filter(|a| a.active).count();
    let in_progress = applications
        .iter()
        .filter(|a| a.active && a.progress < 100)
        .count();
    let completed = applications.iter().filter(|a| a.progress >= 100).count();

    PerformanceStats {
        cards: vec![
            StatCard {
                title: "Total Applications".to_string(),
                value: applications.len().to_string(),
                description: format!("{} active applications", active),
                trend_pct: 5.2,
                trend_positive: true,
            },
            StatCard {
                title: "In Progress".to_string(),
                value: in_progress.to_string(),
                description: "Current processes".to_string(),
                trend_pct: 2.4,
                trend_positive: true,
            },
            StatCard {
                title: "Completed".to_string(),
                value: completed.to_string(),
                description: "Finished processes".to_string(),
                trend_pct: 12.5,
                trend_positive: true,
            },
            StatCard {
                title: "Compliance Rate".to_string(),
                value: "94%".to_string(),
                description: "Regulatory adherence".to_string(),
                trend_pct: 0.8,
                trend_positive: false,
            },
        ],
        compliance_rate: 94,
    }
}

pub fn tiles(updated: &str) -> Vec<Tile> {
    vec![
        Tile {
            id: "tile-pnl".to_string(),
            title: "Desk PNL".to_string(),
            description: "Profit and loss by desk".to_string(),
            status: TileStatus::Success,
            alert: false,
            last_updated: updated.to_string(),
            slides: vec![
                TileSlide {
                    title: "EMEA Rates".to_string(),
                    lines: vec![
                        ("Day PNL".to_string(), "+2.4M".to_string()),
                        ("MTD".to_string(), "+11.8M".to_string()),
                        ("Unexplained".to_string(), "0.1M".to_string()),
                    ],
                    source: Some("ledger".to_string()),
                },
                TileSlide {
                    title: "US Credit".to_string(),
                    lines: vec![
                        ("Day PNL".to_string(), "-0.6M".to_string()),
                        ("MTD".to_string(), "+3.2M".to_string()),
                        ("Unexplained".to_string(), "0.4M".to_string()),
                    ],
                    source: Some("ledger".to_string()),
                },
                TileSlide {
                    title: "APAC FX".to_string(),
                    lines: vec![
                        ("Day PNL".to_string(), "+0.9M".to_string()),
                        ("MTD".to_string(), "+5.1M".to_string()),
                        ("Unexplained".to_string(), "0.0M".to_string()),
                    ],
                    source: Some("ledger".to_string()),
                },
            ],
        },
        Tile {
            id: "tile-breaks".to_string(),
            title: "Reconciliation Breaks".to_string(),
            description: "Open breaks by age bucket".to_string(),
            status: TileStatus::Warning,
            alert: true,
            last_updated: updated.to_string(),
            slides: vec![
                TileSlide {
                    title: "By Age".to_string(),
                    lines: vec![
                        ("< 1 day".to_string(), "12".to_string()),
                        ("1-5 days".to_string(), "7".to_string()),
                        ("> 5 days".to_string(), "3".to_string()),
                    ],
                    source: Some("recon".to_string()),
                },
                TileSlide {
                    title: "By Desk".to_string(),
                    lines: vec![
                        ("EMEA Rates".to_string(), "9".to_string()),
                        ("US Credit".to_string(), "8".to_string()),
                        ("APAC FX".to_string(), "5".to_string()),
                    ],
                    source: Some("recon".to_string()),
                },
            ],
        },
        Tile {
            id: "tile-signoff".to_string(),
            title: "Sign-off Status".to_string(),
            description: "Daily attestation progress".to_string(),
            status: TileStatus::Info,
            alert: false,
            last_updated: updated.to_string(),
            slides: vec![TileSlide {
                title: "Today".to_string(),
                lines: vec![
                    ("Signed".to_string(), "14 / 20".to_string()),
                    ("Pending".to_string(), "6".to_string()),
                ],
                source: None,
            }],
        },
        // A tile with no slide deck yet; the UI shows its no-data state.
        Tile {
            id: "tile-limits".to_string(),
            title: "Limit Utilization".to_string(),
            description: "Desk limit usage".to_string(),
            status: TileStatus::Error,
            alert: true,
            last_updated: updated.to_string(),
            slides: Vec::new(),
        },
    ]
}

pub fn demo_file() -> FileData {
    FileData {
        id: "file-1".to_string(),
        name: "regional_sales.xlsx".to_string(),
        sheets: vec![
            Sheet {
                name: "Sheet1".to_string(),
                headers: ["Date", "Region", "Product", "Sales", "Profit"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                rows: vec![
                    row(&["2023-01-01", "North", "Widget A", "1200", "240"]),
                    row(&["2023-01-02", "South", "Widget B", "950", "190"]),
                    row(&["2023-01-03", "East", "Widget A", "1100", "220"]),
                    row(&["2023-01-04", "West", "Widget C", "1300", "260"]),
                    row(&["2023-01-05", "North", "Widget B", "1000", "200"]),
                ],
            },
            Sheet {
                name: "Details".to_string(),
                headers: ["Property", "Value", "Description"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                rows: vec![
                    row(&["File Type", "Excel", "Microsoft Excel Spreadsheet"]),
                    row(&["Created Date", "2023-01-15", "Date the file was created"]),
                    row(&["Modified Date", "2023-05-10", "Last modification date"]),
                    row(&["Owner", "John Smith", "File owner"]),
                    row(&["Size", "256 KB", "File size in kilobytes"]),
                ],
            },
            Sheet {
                name: "Logs".to_string(),
                headers: ["Timestamp", "User", "Action", "Details"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                rows: vec![
                    row(&["2023-05-10 14:32:45", "jsmith", "EDIT", "Updated sales figures"]),
                    row(&["2023-05-09 11:15:22", "agarcia", "VIEW", "Viewed file contents"]),
                    row(&["2023-05-08 09:45:11", "jsmith", "EDIT", "Added new product data"]),
                    row(&["2023-05-07 16:20:33", "bwilson", "VIEW", "Viewed file contents"]),
                    row(&["2023-05-06 10:05:17", "jsmith", "CREATE", "Created initial file"]),
                ],
            },
        ],
    }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

/// Canned analysis output for the file preview.
pub fn analysis_report(file_name: &str, timestamp: i64) -> AnalysisReport {
    AnalysisReport {
        title: format!("File Analysis: {}", file_name),
        timestamp,
        insights: vec![
            Insight {
                text: "Sales are trending upward in the North and West regions".to_string(),
                value: "+15%".to_string(),
                sentiment: Sentiment::Positive,
            },
            Insight {
                text: "Widget A is the top-performing product by volume".to_string(),
                value: "42%".to_string(),
                sentiment: Sentiment::Positive,
            },
            Insight {
                text: "Profit margins are consistent across products".to_string(),
                value: "~20%".to_string(),
                sentiment: Sentiment::Neutral,
            },
        ],
        recommendations: vec![
            Recommendation {
                text: "Increase marketing efforts in the South region to boost sales".to_string(),
                priority: Priority::High,
            },
            Recommendation {
                text: "Consider expanding the Widget A product line given its popularity"
                    .to_string(),
                priority: Priority::Medium,
            },
            Recommendation {
                text: "Investigate opportunities to improve profit margins across all products"
                    .to_string(),
                priority: Priority::Medium,
            },
        ],
        anomalies: vec!["No significant anomalies detected in the current dataset".to_string()],
        quality_score: 92,
        quality_details: "High quality data with consistent formatting and no missing values"
            .to_string(),
    }
}

/// Builds a full snapshot for one refresh cycle.
pub fn snapshot<R: Rng>(rng: &mut R, timestamp: i64) -> DashboardSnapshot {
    let applications = applications(rng);
    let stats = performance_stats(&applications);
    let updated = chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    DashboardSnapshot {
        timestamp,
        workflow: workflow_summary(rng),
        tiles: tiles(&updated),
        approvals: approvals(),
        stats,
        files: vec![demo_file()],
        applications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn task_counts_stay_in_generator_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let c = random_task_counts(&mut rng);
            assert!((5..20).contains(&c.completed));
            assert!(c.failed < 3);
            assert!(c.rejected < 2);
            assert!((2..12).contains(&c.pending));
            assert!((1..6).contains(&c.processing));
        }
    }

    #[test]
    fn seeded_snapshot_is_reproducible() {
        let a = snapshot(&mut StdRng::seed_from_u64(42), 1_700_000_000);
        let b = snapshot(&mut StdRng::seed_from_u64(42), 1_700_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn snapshot_carries_all_sections() {
        let s = snapshot(&mut StdRng::seed_from_u64(1), 1_700_000_000);
        assert!(!s.applications.is_empty());
        assert!(!s.tiles.is_empty());
        assert!(!s.approvals.is_empty());
        assert_eq!(s.stats.compliance_rate, 94);
        assert!(!s.files.is_empty());
        assert!(!s.workflow.stages.is_empty());
        assert!(s.workflow.active_stage < s.workflow.stages.len());
    }

    #[test]
    fn tile_set_includes_an_empty_deck() {
        let tiles = tiles("12:00:00");
        assert!(tiles.iter().any(|t| t.slides.is_empty()));
        assert!(tiles.iter().any(|t| t.slides.len() > 1));
    }

    #[test]
    fn analysis_report_shape() {
        let report = analysis_report("regional_sales.xlsx", 123);
        assert!(report.title.contains("regional_sales.xlsx"));
        assert_eq!(report.quality_score, 92);
        assert_eq!(report.insights.len(), 3);
        assert_eq!(report.recommendations.len(), 3);
    }
}
