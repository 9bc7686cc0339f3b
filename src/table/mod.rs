//! Table Engine
//!
//! Headless search, sort and pagination over in-memory records. Front ends
//! drive a `TableBrowser` and draw the `TableView` it produces.

pub mod browser;
pub mod column;
pub mod pipeline;
pub mod record;
pub mod state;
pub mod value;
pub mod view;

pub use browser::{MemoStats, TableBrowser, TableOptions};
pub use column::{Column, ColumnWidth};
pub use record::{Record, RecordSet};
pub use state::{PageSize, SortDirection, SortSpec, ViewState};
pub use value::CellValue;
pub use view::{NavButton, TableBody, TableView};
