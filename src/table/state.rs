//! View State
//!
//! The transient, per-table state: search query, sort, page and page size.

use serde::{Deserialize, Serialize};

use crate::constants::PAGE_SIZE_OPTIONS;
use crate::error::Error;

/// Sort direction for the active column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort: which field and which way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Rows per page, restricted to the selector's options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// All selectable sizes, smallest first
    pub const ALL: [PageSize; 5] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    /// Number of rows
    pub fn get(self) -> usize {
        match self {
            PageSize::Five => PAGE_SIZE_OPTIONS[0],
            PageSize::Ten => PAGE_SIZE_OPTIONS[1],
            PageSize::Twenty => PAGE_SIZE_OPTIONS[2],
            PageSize::Fifty => PAGE_SIZE_OPTIONS[3],
            PageSize::Hundred => PAGE_SIZE_OPTIONS[4],
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|candidate| candidate.get() == size)
            .ok_or(Error::InvalidPageSize { size })
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Number of pages needed for `len` rows
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// Per-table view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_query: String,
    sort: Option<SortSpec>,
    page: usize,
    page_size: PageSize,
}

impl ViewState {
    /// Create a fresh state with the given page size
    pub fn new(page_size: PageSize) -> Self {
        Self {
            search_query: String::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    // ==================== Getters ====================

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    // ==================== Setters ====================

    /// Replace the search query. Returns false when nothing changed.
    ///
    /// The page is left alone; the browser clamps it once the result set is known.
    pub fn set_search_query(&mut self, query: &str) -> bool {
        if self.search_query == query {
            return false;
        }
        self.search_query = query.to_string();
        true
    }

    /// Sort by `field`, flipping direction if it is already the active field
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(match self.sort.take() {
            Some(spec) if spec.field == field => SortSpec {
                direction: spec.direction.flipped(),
                ..spec
            },
            _ => SortSpec {
                field: field.to_string(),
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Change rows per page, starting over at page 1
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 1;
    }

    /// Move to `page`, bounded to `[1, max(1, total_pages)]`
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Pull the page back into range. Returns true if it moved.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        let last = total_pages.max(1);
        if self.page > last {
            self.page = last;
            return true;
        }
        false
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PAGE_SIZE;

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert_eq!(state.search_query(), "");
        assert_eq!(state.sort(), None);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size().get(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_toggle_sort_same_field_flips() {
        let mut state = ViewState::default();
        state.toggle_sort("stock");
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Ascending));
        state.toggle_sort("stock");
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Descending));
        state.toggle_sort("stock");
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_toggle_sort_new_field_resets_to_ascending() {
        let mut state = ViewState::default();
        state.toggle_sort("stock");
        state.toggle_sort("stock");
        state.toggle_sort("name");
        let spec = state.sort().expect("sort set");
        assert_eq!(spec.field, "name");
        assert_eq!(spec.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = ViewState::default();
        state.set_page(3, 5);
        state.set_page_size(PageSize::Fifty);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), PageSize::Fifty);
    }

    #[test]
    fn test_search_keeps_page() {
        let mut state = ViewState::default();
        state.set_page(2, 4);
        assert!(!state.set_search_query(""));
        assert!(state.set_search_query("ibu"));
        assert_eq!(state.search_query(), "ibu");
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_set_page_is_bounded() {
        let mut state = ViewState::default();
        state.set_page(0, 3);
        assert_eq!(state.page(), 1);
        state.set_page(9, 3);
        assert_eq!(state.page(), 3);
        state.set_page(2, 0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_clamp_page() {
        let mut state = ViewState::default();
        state.set_page(4, 4);
        assert!(state.clamp_page(2));
        assert_eq!(state.page(), 2);
        assert!(!state.clamp_page(2));
        assert!(state.clamp_page(0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_size_try_from() {
        assert_eq!(PageSize::try_from(20).ok(), Some(PageSize::Twenty));
        assert!(matches!(PageSize::try_from(7), Err(Error::InvalidPageSize { size: 7 })));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, PageSize::Ten), 0);
        assert_eq!(total_pages(10, PageSize::Ten), 1);
        assert_eq!(total_pages(12, PageSize::Ten), 2);
        assert_eq!(total_pages(3, PageSize::Hundred), 1);
    }
}
