//! TableBrowser
//!
//! Searchable, sortable, paginated view over a `RecordSet`. Owns the view
//! state for one table instance and memoizes the filter and sort passes.

use ahash::AHashMap;
use tracing::{debug, info};

use super::column::Column;
use super::pipeline::{PageWindow, filter_indices, sort_indices};
use super::record::{Record, RecordSet};
use super::state::{PageSize, SortSpec, ViewState, total_pages};
use super::view::{
    HeaderCell, NavButton, PageSizeSelector, PaginationView, RowView, SearchBox, TableBody,
    TableView,
};
use crate::constants::{DEFAULT_KEY_FIELD, NO_RESULTS_MESSAGE, SEARCH_PLACEHOLDER};

/// Caller configuration for a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Field holding each record's unique identity
    pub key_field: String,
    /// Show the search box
    pub searchable: bool,
    /// Slice rows into pages
    pub pagination: bool,
    /// Show the loading placeholder instead of rows
    pub loading: bool,
    /// Rows per page on first display
    pub page_size: PageSize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            key_field: DEFAULT_KEY_FIELD.to_string(),
            searchable: true,
            pagination: true,
            loading: false,
            page_size: PageSize::default(),
        }
    }
}

impl TableOptions {
    /// Use another key field
    pub fn key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = key_field.into();
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// How often the expensive passes actually ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub filter_runs: u64,
    pub sort_runs: u64,
}

struct FilterMemo {
    revision: u64,
    query: String,
    stamp: u64,
    indices: Vec<usize>,
}

struct SortMemo {
    filter_stamp: u64,
    sort: Option<SortSpec>,
    indices: Vec<usize>,
}

type RowClickFn<R> = Box<dyn FnMut(&R)>;

/// Tabular data browser over caller-owned records
pub struct TableBrowser<R> {
    records: RecordSet<R>,
    columns: Vec<Column<R>>,
    options: TableOptions,
    state: ViewState,
    on_row_click: Option<RowClickFn<R>>,
    filter_memo: Option<FilterMemo>,
    sort_memo: Option<SortMemo>,
    key_index: Option<(u64, AHashMap<String, usize>)>,
    next_stamp: u64,
    stats: MemoStats,
}

impl<R: Record + 'static> TableBrowser<R> {
    /// Create a browser with fresh view state
    pub fn new(records: RecordSet<R>, columns: Vec<Column<R>>, options: TableOptions) -> Self {
        let state = ViewState::new(options.page_size);
        Self {
            records,
            columns,
            options,
            state,
            on_row_click: None,
            filter_memo: None,
            sort_memo: None,
            key_index: None,
            next_stamp: 0,
            stats: MemoStats::default(),
        }
    }

    /// Set the row click handler
    pub fn on_row_click(mut self, handler: impl FnMut(&R) + 'static) -> Self {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    // ==================== Getters ====================

    pub fn records(&self) -> &RecordSet<R> {
        &self.records
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Whether rows react to clicks
    pub fn has_row_click_handler(&self) -> bool {
        self.on_row_click.is_some()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    // ==================== Setters ====================

    /// Swap in new records. View state is kept; caches are rebuilt lazily.
    pub fn set_records(&mut self, records: RecordSet<R>) {
        info!(
            rows = records.len(),
            revision = records.revision(),
            "Table records replaced"
        );
        self.records = records;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.options.loading = loading;
    }

    /// Update the search query. Ignored when the table is not searchable.
    pub fn set_search(&mut self, query: &str) {
        if !self.options.searchable {
            debug!("Search ignored on non-searchable table");
            return;
        }
        if self.state.set_search_query(query) {
            debug!(query, "Search query changed");
        }
    }

    /// Header click on `key`. Returns false if the column is unknown or not sortable.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|column| column.key == key && column.sortable);
        if !sortable {
            debug!(key, "Sort ignored on non-sortable column");
            return false;
        }

        self.state.toggle_sort(key);
        if let Some(spec) = self.state.sort() {
            debug!(field = %spec.field, direction = ?spec.direction, "Sort changed");
        }
        true
    }

    /// Pick a new page size; always returns to page 1
    pub fn set_page_size(&mut self, size: PageSize) {
        debug!(size = size.get(), "Page size changed");
        self.state.set_page_size(size);
    }

    /// Jump to a page, bounded to the valid range
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.state.set_page(page, total);
    }

    /// Press a navigation button. Returns false when it is disabled.
    pub fn navigate(&mut self, button: NavButton) -> bool {
        let Some(footer) = self.pagination_view() else {
            return false;
        };
        if !footer.is_enabled(button) {
            return false;
        }
        self.state.set_page(footer.target(button), footer.window.total_pages);
        true
    }

    pub fn first_page(&mut self) -> bool {
        self.navigate(NavButton::First)
    }

    pub fn previous_page(&mut self) -> bool {
        self.navigate(NavButton::Previous)
    }

    pub fn next_page(&mut self) -> bool {
        self.navigate(NavButton::Next)
    }

    pub fn last_page(&mut self) -> bool {
        self.navigate(NavButton::Last)
    }

    // ==================== Derived views ====================

    /// Rows surviving the search filter
    pub fn filtered_len(&mut self) -> usize {
        self.ensure_filtered();
        self.filter_memo.as_ref().map_or(0, |memo| memo.indices.len())
    }

    /// Pages at the current page size
    pub fn total_pages(&mut self) -> usize {
        let len = self.filtered_len();
        total_pages(len, self.state.page_size())
    }

    /// Rows on the current page (every sorted row when pagination is off)
    pub fn visible_rows(&mut self) -> Vec<&R> {
        let range = self.visible_range();
        let indices = self.sort_memo.as_ref().map_or(&[][..], |memo| &memo.indices[range]);
        indices.iter().filter_map(|&index| self.records.get(index)).collect()
    }

    /// Build the render model for the current state
    pub fn view(&mut self) -> TableView {
        if self.options.loading {
            return TableView {
                search: None,
                page_size: None,
                headers: Vec::new(),
                body: TableBody::Loading,
                pagination: None,
            };
        }

        let range = self.visible_range();
        let pagination = self.pagination_view();

        let rows: Vec<RowView> = self
            .sort_memo
            .as_ref()
            .map_or(&[][..], |memo| &memo.indices[range])
            .iter()
            .filter_map(|&index| self.records.get(index))
            .map(|record| RowView {
                key: self.row_key(record),
                cells: self
                    .columns
                    .iter()
                    .map(|column| column.render_cell(record))
                    .collect(),
            })
            .collect();

        let body = if rows.is_empty() {
            TableBody::Empty {
                colspan: self.columns.len(),
                message: NO_RESULTS_MESSAGE,
            }
        } else {
            TableBody::Rows(rows)
        };

        let active = self.state.sort();
        let headers = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.header.clone(),
                sortable: column.sortable,
                sort_indicator: active
                    .filter(|spec| column.sortable && spec.field == column.key)
                    .map(|spec| spec.direction),
            })
            .collect();

        TableView {
            search: self.options.searchable.then(|| SearchBox {
                query: self.state.search_query().to_string(),
                placeholder: SEARCH_PLACEHOLDER,
            }),
            page_size: self.options.pagination.then(|| PageSizeSelector {
                current: self.state.page_size(),
                options: PageSize::ALL,
            }),
            headers,
            body,
            pagination,
        }
    }

    // ==================== Row identity ====================

    /// Find a record by its key field's display text
    pub fn row_by_key(&mut self, key: &str) -> Option<&R> {
        self.ensure_key_index();
        let index = self
            .key_index
            .as_ref()
            .and_then(|(_, map)| map.get(key).copied())?;
        self.records.get(index)
    }

    /// Dispatch a row click to the handler. Returns false if nothing was called.
    pub fn click_row(&mut self, key: &str) -> bool {
        self.ensure_key_index();
        let Some(index) = self
            .key_index
            .as_ref()
            .and_then(|(_, map)| map.get(key).copied())
        else {
            debug!(key, "Row click on unknown key");
            return false;
        };

        match (self.on_row_click.as_mut(), self.records.get(index)) {
            (Some(handler), Some(record)) => {
                handler(record);
                true
            }
            _ => false,
        }
    }

    fn row_key(&self, record: &R) -> String {
        record
            .field(&self.options.key_field)
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    fn ensure_key_index(&mut self) {
        let revision = self.records.revision();
        if self.key_index.as_ref().is_some_and(|(rev, _)| *rev == revision) {
            return;
        }

        // Duplicate keys: the later record wins
        let map: AHashMap<String, usize> = self
            .records
            .all()
            .iter()
            .enumerate()
            .map(|(index, record)| (self.row_key(record), index))
            .collect();
        self.key_index = Some((revision, map));
    }

    // ==================== Memoized passes ====================

    fn ensure_filtered(&mut self) {
        let revision = self.records.revision();
        let query = self.state.search_query();
        let fresh = self
            .filter_memo
            .as_ref()
            .is_some_and(|memo| memo.revision == revision && memo.query == query);
        if fresh {
            return;
        }

        let indices = filter_indices(self.records.all(), query);
        debug!(query, matched = indices.len(), total = self.records.len(), "Filter pass");

        self.next_stamp += 1;
        self.stats.filter_runs += 1;
        self.filter_memo = Some(FilterMemo {
            revision,
            query: query.to_string(),
            stamp: self.next_stamp,
            indices,
        });
    }

    fn ensure_sorted(&mut self) {
        self.ensure_filtered();
        let Some(filtered) = self.filter_memo.as_ref() else {
            return;
        };

        let sort = self.state.sort().cloned();
        let fresh = self
            .sort_memo
            .as_ref()
            .is_some_and(|memo| memo.filter_stamp == filtered.stamp && memo.sort == sort);
        if fresh {
            return;
        }

        let filter_stamp = filtered.stamp;
        let mut indices = filtered.indices.clone();
        if let Some(spec) = &sort {
            let column = self.columns.iter().find(|column| column.key == spec.field);
            sort_indices(self.records.all(), &mut indices, column, spec);
            self.stats.sort_runs += 1;
        }

        self.sort_memo = Some(SortMemo {
            filter_stamp,
            sort,
            indices,
        });
    }

    /// Sort, clamp the page, and return the slice bounds to show
    fn visible_range(&mut self) -> std::ops::Range<usize> {
        self.ensure_sorted();
        let len = self.sort_memo.as_ref().map_or(0, |memo| memo.indices.len());
        if !self.options.pagination {
            return 0..len;
        }

        let pages = total_pages(len, self.state.page_size());
        let before = self.state.page();
        if self.state.clamp_page(pages) {
            debug!(from = before, to = self.state.page(), "Page clamped to result range");
        }
        PageWindow::new(len, self.state.page(), self.state.page_size()).range()
    }

    fn pagination_view(&mut self) -> Option<PaginationView> {
        if !self.options.pagination {
            return None;
        }
        self.visible_range();
        let len = self.sort_memo.as_ref().map_or(0, |memo| memo.indices.len());
        Some(PaginationView {
            window: PageWindow::new(len, self.state.page(), self.state.page_size()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::state::SortDirection;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("stock", "Stock").sortable(),
            Column::new("note", "Note"),
        ]
    }

    fn numbered(count: i64) -> RecordSet<Value> {
        (1..=count)
            .map(|id| json!({"id": id, "name": format!("Item {id}"), "stock": id % 4}))
            .collect()
    }

    fn browser(records: RecordSet<Value>) -> TableBrowser<Value> {
        TableBrowser::new(records, columns(), TableOptions::default())
    }

    fn visible_ids(browser: &mut TableBrowser<Value>) -> Vec<i64> {
        browser
            .visible_rows()
            .iter()
            .map(|row| row["id"].as_i64().unwrap_or(-1))
            .collect()
    }

    #[test]
    fn scenario_search_narrows_rows() {
        let records = RecordSet::new(vec![
            json!({"id": 1, "name": "Aspirin", "stock": 10}),
            json!({"id": 2, "name": "Ibuprofen", "stock": 0}),
        ]);
        let mut table = browser(records);
        table.set_search("ibu");
        assert_eq!(visible_ids(&mut table), vec![2]);
    }

    #[test]
    fn scenario_second_page_of_twelve() {
        let mut table = browser(numbered(12));
        table.go_to_page(2);

        assert_eq!(visible_ids(&mut table), vec![11, 12]);
        assert_eq!(table.total_pages(), 2);

        let view = table.view();
        let footer = view.pagination.expect("pagination on");
        assert!(footer.is_enabled(NavButton::Previous));
        assert!(!footer.is_enabled(NavButton::Next));
    }

    #[test]
    fn scenario_stable_sort_on_stock() {
        let records = RecordSet::new(vec![
            json!({"id": 1, "stock": 5}),
            json!({"id": 2, "stock": 5}),
            json!({"id": 3, "stock": 1}),
        ]);
        let mut table = browser(records);
        assert!(table.toggle_sort("stock"));
        assert_eq!(visible_ids(&mut table), vec![3, 1, 2]);
    }

    #[test]
    fn scenario_empty_records() {
        let mut table = browser(RecordSet::default());
        let view = table.view();

        assert_eq!(
            view.body,
            TableBody::Empty {
                colspan: 3,
                message: NO_RESULTS_MESSAGE
            }
        );
        let footer = view.pagination.expect("pagination on");
        assert_eq!(footer.range_text(), "Showing 0 to 0 of 0 results");
        assert!(NavButton::ALL.iter().all(|b| !footer.is_enabled(*b)));
    }

    #[test]
    fn test_loading_skips_derivation() {
        let mut table = TableBrowser::new(numbered(5), columns(), TableOptions::default().loading(true));
        let view = table.view();
        assert!(view.is_loading());
        assert!(view.pagination.is_none());
        assert_eq!(table.stats(), MemoStats::default());

        table.set_loading(false);
        assert_eq!(table.view().body.row_count(), 5);
    }

    #[test]
    fn test_toggle_reverses_distinct_order() {
        let records: RecordSet<Value> = [4, 9, 1, 7, 3]
            .iter()
            .map(|n| json!({"id": n, "stock": n}))
            .collect();
        let mut table = TableBrowser::new(records, columns(), TableOptions::default().pagination(false));
        table.toggle_sort("stock");
        let mut ascending = visible_ids(&mut table);
        table.toggle_sort("stock");
        let descending = visible_ids(&mut table);

        assert_eq!(ascending, vec![1, 3, 4, 7, 9]);
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_non_sortable_and_unknown_columns_ignored() {
        let mut table = browser(numbered(3));
        assert!(!table.toggle_sort("note"));
        assert!(!table.toggle_sort("nope"));
        assert!(table.state().sort().is_none());
    }

    #[test]
    fn test_header_indicator_follows_sort() {
        let mut table = browser(numbered(3));
        table.toggle_sort("name");
        table.toggle_sort("name");
        let view = table.view();
        let indicators: Vec<_> = view.headers.iter().map(|h| h.sort_indicator).collect();
        assert_eq!(indicators, vec![Some(SortDirection::Descending), None, None]);
        assert!(!view.headers[2].sortable);
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let mut table = browser(numbered(30));
        table.go_to_page(3);
        assert_eq!(table.state().page(), 3);
        table.set_page_size(PageSize::Twenty);
        assert_eq!(table.state().page(), 1);
        assert_eq!(table.total_pages(), 2);
    }

    #[test]
    fn test_page_clamped_after_records_shrink() {
        let mut table = browser(numbered(25));
        table.go_to_page(3);
        table.set_records(numbered(8));
        table.view();
        assert_eq!(table.state().page(), 1);
        assert_eq!(visible_ids(&mut table).len(), 8);
    }

    #[test]
    fn test_search_keeps_in_range_page() {
        let mut table = browser(numbered(30));
        table.go_to_page(2);
        table.set_search("item");
        let footer = table.view().pagination.expect("pagination on");
        assert_eq!(footer.window.total_pages, 3);
        assert_eq!(table.state().page(), 2);
        assert_eq!(visible_ids(&mut table), (11..=20).collect::<Vec<i64>>());
    }

    #[test]
    fn test_search_clamps_out_of_range_page() {
        let mut table = browser(numbered(25));
        table.last_page();
        assert_eq!(table.state().page(), 3);
        table.set_search("item 1");
        // Item 1, Item 10..Item 19
        assert_eq!(table.filtered_len(), 11);
        table.view();
        assert_eq!(table.state().page(), 2);
        assert_eq!(visible_ids(&mut table), vec![19]);
    }

    #[test]
    fn test_navigation_buttons() {
        let mut table = browser(numbered(23));
        assert!(!table.previous_page());
        assert!(table.next_page());
        assert!(table.last_page());
        assert_eq!(table.state().page(), 3);
        assert!(!table.next_page());
        assert!(table.first_page());
        assert_eq!(table.state().page(), 1);
    }

    #[test]
    fn test_pagination_off_shows_everything() {
        let mut table = TableBrowser::new(numbered(37), columns(), TableOptions::default().pagination(false));
        let view = table.view();
        assert_eq!(view.body.row_count(), 37);
        assert!(view.pagination.is_none());
        assert!(view.page_size.is_none());
    }

    #[test]
    fn test_non_searchable_ignores_query() {
        let mut table = TableBrowser::new(numbered(4), columns(), TableOptions::default().searchable(false));
        table.set_search("zzz");
        let view = table.view();
        assert!(view.search.is_none());
        assert_eq!(view.body.row_count(), 4);
    }

    #[test]
    fn test_cells_follow_column_order() {
        let mut table = browser(RecordSet::new(vec![json!({"id": "a1", "name": "Aspirin", "stock": 3})]));
        let TableBody::Rows(rows) = table.view().body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].key, "a1");
        assert_eq!(rows[0].cells, vec!["Aspirin", "3", ""]);
    }

    #[test]
    fn test_memoized_passes_run_once() {
        let mut table = browser(numbered(50));
        table.toggle_sort("stock");
        let first = table.view();
        let second = table.view();
        assert_eq!(first, second);
        assert_eq!(table.stats(), MemoStats { filter_runs: 1, sort_runs: 1 });

        table.go_to_page(2);
        table.view();
        assert_eq!(table.stats(), MemoStats { filter_runs: 1, sort_runs: 1 });

        table.set_search("item");
        table.view();
        assert_eq!(table.stats(), MemoStats { filter_runs: 2, sort_runs: 2 });
    }

    #[test]
    fn test_row_click_dispatch() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicked);
        let mut table = browser(numbered(3)).on_row_click(move |row: &Value| {
            sink.borrow_mut().push(row["name"].as_str().unwrap_or_default().to_string());
        });

        assert!(table.click_row("2"));
        assert!(!table.click_row("99"));
        assert_eq!(*clicked.borrow(), vec!["Item 2".to_string()]);
    }

    #[test]
    fn test_rows_without_handler_are_inert() {
        let mut table = browser(numbered(3));
        assert!(!table.has_row_click_handler());
        assert!(!table.click_row("2"));

        let table = table.on_row_click(|_: &Value| {});
        assert!(table.has_row_click_handler());
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let records = RecordSet::new(vec![
            json!({"id": 1, "name": "first"}),
            json!({"id": 1, "name": "second"}),
        ]);
        let mut table = browser(records);
        let row = table.row_by_key("1").expect("row exists");
        assert_eq!(row["name"], "second");
    }

    #[test]
    fn test_custom_key_field() {
        let records = RecordSet::new(vec![json!({"sku": "P-1", "name": "Aspirin"})]);
        let mut table = TableBrowser::new(records, columns(), TableOptions::default().key_field("sku"));
        assert_eq!(table.view().body.row_keys(), vec!["P-1"]);
        assert!(table.row_by_key("P-1").is_some());
    }

    #[test]
    fn test_records_are_not_mutated() {
        let records = numbered(6);
        let shared = records.shared();
        let mut table = browser(records);
        table.toggle_sort("stock");
        table.set_search("item");
        table.view();
        let ids: Vec<i64> = shared.iter().map(|r| r["id"].as_i64().unwrap_or(-1)).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
