//! Table Constants
//!
//! Centralized constants for the record tables and their front ends.

/// Page sizes offered by the rows-per-page selector
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];

/// Rows per page before the user picks another size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Field used as row identity when the caller does not name one
pub const DEFAULT_KEY_FIELD: &str = "id";

/// Body text for an empty page
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Placeholder shown in the search box
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "pharma-desk.toml";

/// Log file prefix for the rolling appender
pub const LOG_FILE_PREFIX: &str = "pharma-desk.log";

/// Stock at or below this count is reported as low stock
pub const LOW_STOCK_THRESHOLD: i64 = 20;

/// Table geometry (pixels)
pub const TABLE_ROW_HEIGHT: f32 = 36.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;
pub const DEFAULT_COLUMN_WIDTH: f32 = 140.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 750.0;
