//! Generic table widget state: sorting, filtering, diff tracking.

use std::collections::HashMap;

/// Sort key types for table columns.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Integer(i64),
    String(String),
}

/// Diff status for highlighting rows changed by a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiffStatus {
    /// Row appeared with the last refresh (green).
    New,
    /// Row content changed (yellow).
    Modified,
    /// No changes.
    #[default]
    Unchanged,
}

/// Trait for table row items.
pub trait TableRow: Clone {
    /// Stable identifier for diff tracking across refreshes.
    fn id(&self) -> u64;

    /// Number of columns.
    fn column_count() -> usize;

    /// Column headers.
    fn headers() -> Vec<&'static str>;

    /// Cell values as strings.
    fn cells(&self) -> Vec<String>;

    /// Sort key for the specified column.
    fn sort_key(&self, column: usize) -> SortKey;

    /// Check if item matches the filter.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// State for a sortable, filterable table widget.
#[derive(Debug, Clone)]
pub struct TableState<T: TableRow> {
    /// All items (unfiltered), in sort order.
    pub items: Vec<T>,
    /// Selected row index (in filtered view).
    pub selected: usize,
    /// Sort column index.
    pub sort_column: usize,
    /// Sort direction (true = ascending).
    pub sort_ascending: bool,
    /// Filter string.
    pub filter: Option<String>,
    /// Previous items for diff tracking.
    previous: HashMap<u64, T>,
    /// Diff status per item id, rebuilt on every update.
    pub diff_status: HashMap<u64, DiffStatus>,
}

impl<T: TableRow> Default for TableState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableRow> TableState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            sort_column: 0,
            sort_ascending: true,
            filter: None,
            previous: HashMap::new(),
            diff_status: HashMap::new(),
        }
    }

    /// Replaces items (on refresh) and computes diff status against the
    /// previous generation.
    pub fn update(&mut self, new_items: Vec<T>) {
        self.diff_status.clear();
        for item in &new_items {
            let id = item.id();
            let status = match self.previous.get(&id) {
                Some(prev) if prev.cells() == item.cells() => DiffStatus::Unchanged,
                Some(_) => DiffStatus::Modified,
                None => DiffStatus::New,
            };
            self.diff_status.insert(id, status);
        }

        self.previous.clear();
        for item in &new_items {
            self.previous.insert(item.id(), item.clone());
        }

        self.items = new_items;
        self.apply_sort();
        self.clamp_selection();
    }

    /// Returns filtered items in current sort order.
    pub fn filtered_items(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| {
                self.filter
                    .as_ref()
                    .map(|f| item.matches_filter(f))
                    .unwrap_or(true)
            })
            .collect()
    }

    /// Currently selected item, if any row is visible.
    pub fn selected_item(&self) -> Option<&T> {
        self.filtered_items().get(self.selected).copied()
    }

    fn apply_sort(&mut self) {
        let col = self.sort_column;
        let asc = self.sort_ascending;
        self.items.sort_by(|a, b| {
            let cmp = a.sort_key(col).cmp(&b.sort_key(col));
            if asc { cmp } else { cmp.reverse() }
        });
    }

    /// Cycles to the next sort column.
    pub fn next_sort_column(&mut self) {
        self.sort_column = (self.sort_column + 1) % T::column_count();
        self.apply_sort();
    }

    /// Toggles sort direction.
    pub fn toggle_sort_direction(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        self.apply_sort();
    }

    /// Sets the filter string and resets the selection.
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter.filter(|f| !f.is_empty());
        self.selected = 0;
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let max = self.filtered_items().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered_items().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u64,
        name: String,
        rank: i64,
    }

    impl TableRow for Item {
        fn id(&self) -> u64 {
            self.id
        }

        fn column_count() -> usize {
            2
        }

        fn headers() -> Vec<&'static str> {
            vec!["NAME", "RANK"]
        }

        fn cells(&self) -> Vec<String> {
            vec![self.name.clone(), self.rank.to_string()]
        }

        fn sort_key(&self, column: usize) -> SortKey {
            match column {
                0 => SortKey::String(self.name.clone()),
                _ => SortKey::Integer(self.rank),
            }
        }

        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    fn item(id: u64, name: &str, rank: i64) -> Item {
        Item {
            id,
            name: name.to_string(),
            rank,
        }
    }

    #[test]
    fn update_sorts_and_tracks_diffs() {
        let mut table = TableState::new();
        table.update(vec![item(1, "beta", 2), item(2, "alpha", 1)]);
        assert_eq!(table.items[0].name, "alpha");
        assert_eq!(table.diff_status[&1], DiffStatus::New);

        // Second generation: item 1 changed, item 2 unchanged, item 3 new.
        table.update(vec![item(1, "beta", 5), item(2, "alpha", 1), item(3, "gamma", 3)]);
        assert_eq!(table.diff_status[&1], DiffStatus::Modified);
        assert_eq!(table.diff_status[&2], DiffStatus::Unchanged);
        assert_eq!(table.diff_status[&3], DiffStatus::New);
    }

    #[test]
    fn filter_restricts_rows_and_resets_selection() {
        let mut table = TableState::new();
        table.update(vec![item(1, "alpha", 1), item(2, "beta", 2), item(3, "betamax", 3)]);
        table.selected = 2;
        table.set_filter(Some("beta".to_string()));
        assert_eq!(table.filtered_items().len(), 2);
        assert_eq!(table.selected, 0);

        table.set_filter(Some(String::new()));
        assert!(table.filter.is_none());
    }

    #[test]
    fn sort_direction_and_column_cycling() {
        let mut table = TableState::new();
        table.update(vec![item(1, "alpha", 3), item(2, "beta", 1)]);
        table.next_sort_column(); // rank column
        assert_eq!(table.items[0].rank, 1);
        table.toggle_sort_direction();
        assert_eq!(table.items[0].rank, 3);
        table.next_sort_column(); // wraps back to name
        assert_eq!(table.sort_column, 0);
    }

    #[test]
    fn selection_stays_in_bounds_when_items_shrink() {
        let mut table = TableState::new();
        table.update(vec![item(1, "a", 1), item(2, "b", 2), item(3, "c", 3)]);
        table.selected = 2;
        table.update(vec![item(1, "a", 1)]);
        assert_eq!(table.selected, 0);
        assert!(table.selected_item().is_some());

        table.update(Vec::new());
        assert!(table.selected_item().is_none());
    }

    #[test]
    fn select_navigation_clamps_at_edges() {
        let mut table = TableState::new();
        table.update(vec![item(1, "a", 1), item(2, "b", 2)]);
        table.select_up();
        assert_eq!(table.selected, 0);
        table.select_down();
        table.select_down();
        assert_eq!(table.selected, 1);
    }
}
