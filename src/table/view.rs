//! Render model
//!
//! What a front end draws for one table: controls, header, body and
//! pagination. Produced by `TableBrowser::view`, consumed by the GPUI layer
//! and by tests.

use super::pipeline::PageWindow;
use super::state::{PageSize, SortDirection};

/// Search box contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub query: String,
    pub placeholder: &'static str,
}

/// Rows-per-page selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeSelector {
    pub current: PageSize,
    pub options: [PageSize; 5],
}

/// One header cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// Clickable when true
    pub sortable: bool,
    /// Direction icon when this column is the active sort
    pub sort_indicator: Option<SortDirection>,
}

/// One body row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Display text of the record's key field; used for click dispatch
    pub key: String,
    pub cells: Vec<String>,
}

/// Table body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    /// A single placeholder row spanning every column
    Empty { colspan: usize, message: &'static str },
    Rows(Vec<RowView>),
}

impl TableBody {
    /// Rows shown, zero for the placeholder states
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            _ => 0,
        }
    }

    /// Keys of the rows shown, in display order
    pub fn row_keys(&self) -> Vec<&str> {
        match self {
            TableBody::Rows(rows) => rows.iter().map(|row| row.key.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Navigation buttons under the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    First,
    Previous,
    Next,
    Last,
}

impl NavButton {
    pub const ALL: [NavButton; 4] = [
        NavButton::First,
        NavButton::Previous,
        NavButton::Next,
        NavButton::Last,
    ];

    /// Glyph drawn on the button
    pub fn glyph(self) -> &'static str {
        match self {
            NavButton::First => "«",
            NavButton::Previous => "‹",
            NavButton::Next => "›",
            NavButton::Last => "»",
        }
    }
}

/// Pagination footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub window: PageWindow,
}

impl PaginationView {
    /// "Showing X to Y of Z results"
    pub fn range_text(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.window.showing_from(),
            self.window.showing_to(),
            self.window.total_rows
        )
    }

    /// "Page N of M"
    pub fn page_text(&self) -> String {
        format!("Page {} of {}", self.window.page, self.window.last_page())
    }

    /// Whether a navigation button can be pressed
    pub fn is_enabled(&self, button: NavButton) -> bool {
        if self.window.total_rows == 0 {
            return false;
        }
        match button {
            NavButton::First | NavButton::Previous => !self.window.is_first(),
            NavButton::Next | NavButton::Last => !self.window.is_last(),
        }
    }

    /// Page a navigation button leads to
    pub fn target(&self, button: NavButton) -> usize {
        match button {
            NavButton::First => 1,
            NavButton::Previous => self.window.page.saturating_sub(1).max(1),
            NavButton::Next => (self.window.page + 1).min(self.window.last_page()),
            NavButton::Last => self.window.last_page(),
        }
    }
}

/// Everything a front end needs to draw one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub search: Option<SearchBox>,
    pub page_size: Option<PageSizeSelector>,
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    pub pagination: Option<PaginationView>,
}

impl TableView {
    /// Whether the loading placeholder is shown
    pub fn is_loading(&self) -> bool {
        matches!(self.body, TableBody::Loading)
    }
}
