//! Table row models for the management board.

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::data::{Approval, Priority};

use super::table::{SortKey, TableRow};

/// One pending approval in the board's Approvals tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalRow {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub due: String,
    pub assignee: String,
}

impl From<&Approval> for ApprovalRow {
    fn from(a: &Approval) -> Self {
        Self {
            id: a.id.clone(),
            title: a.title.clone(),
            priority: a.priority,
            due: a.due.clone(),
            assignee: a.assignee.clone(),
        }
    }
}

impl TableRow for ApprovalRow {
    fn id(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.id.hash(&mut hasher);
        hasher.finish()
    }

    fn column_count() -> usize {
        4
    }

    fn headers() -> Vec<&'static str> {
        vec!["PRIORITY", "TITLE", "DUE", "ASSIGNEE"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.priority.label().to_string(),
            self.title.clone(),
            self.due.clone(),
            self.assignee.clone(),
        ]
    }

    fn sort_key(&self, column: usize) -> SortKey {
        match column {
            0 => SortKey::Integer(self.priority.rank() as i64),
            1 => SortKey::String(self.title.clone()),
            2 => SortKey::String(self.due.clone()),
            _ => SortKey::String(self.assignee.clone()),
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.title.to_lowercase().contains(&f)
            || self.assignee.to_lowercase().contains(&f)
            || self.priority.label().to_lowercase().contains(&f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Priority;

    fn approval(id: &str, title: &str, priority: Priority) -> Approval {
        Approval {
            id: id.to_string(),
            title: title.to_string(),
            priority,
            due: "Today".to_string(),
            assignee: "John Doe".to_string(),
        }
    }

    #[test]
    fn row_ids_are_stable_per_approval() {
        let row_a = ApprovalRow::from(&approval("approval-1", "A", Priority::High));
        let row_b = ApprovalRow::from(&approval("approval-1", "B", Priority::Low));
        let row_c = ApprovalRow::from(&approval("approval-2", "A", Priority::High));
        assert_eq!(row_a.id(), row_b.id());
        assert_ne!(row_a.id(), row_c.id());
    }

    #[test]
    fn priority_sorts_high_first_ascending() {
        let high = ApprovalRow::from(&approval("1", "x", Priority::High));
        let low = ApprovalRow::from(&approval("2", "y", Priority::Low));
        assert!(high.sort_key(0) < low.sort_key(0));
    }

    #[test]
    fn filter_matches_title_assignee_and_priority() {
        let row = ApprovalRow::from(&approval("1", "Quarterly Review", Priority::Medium));
        assert!(row.matches_filter("quarterly"));
        assert!(row.matches_filter("john"));
        assert!(row.matches_filter("medium"));
        assert!(!row.matches_filter("nothing"));
    }
}
