//! Column Definition
//!
//! Defines table columns with their properties, value accessors and cell renderers.

use super::record::Record;
use super::value::CellValue;

type ValueFn<R> = Box<dyn Fn(&R) -> CellValue + Send + Sync>;
type CellFn<R> = Box<dyn Fn(&R) -> String + Send + Sync>;

/// Column definition for the table
pub struct Column<R> {
    /// Field name this column reads
    pub key: String,
    /// Column header label
    pub header: String,
    /// Column width (presentation only)
    pub width: ColumnWidth,
    /// Whether the column is sortable
    pub sortable: bool,
    value: Option<ValueFn<R>>,
    cell: Option<CellFn<R>>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: ColumnWidth::default(),
            sortable: false,
            value: None,
            cell: None,
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Read the column's value with a typed accessor instead of a field lookup
    pub fn value(mut self, accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static) -> Self {
        self.value = Some(Box::new(accessor));
        self
    }

    /// Render cells with a custom formatter instead of the raw value
    pub fn cell(mut self, render: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.cell = Some(Box::new(render));
        self
    }

    /// Whether a custom cell renderer is set
    pub fn has_cell_renderer(&self) -> bool {
        self.cell.is_some()
    }
}

impl<R: Record> Column<R> {
    /// The value this column sorts and displays by
    pub fn raw_value(&self, row: &R) -> CellValue {
        match &self.value {
            Some(accessor) => accessor(row),
            None => row.field(&self.key).unwrap_or(CellValue::Empty),
        }
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> String {
        match &self.cell {
            Some(render) => render(row),
            None => self.raw_value(row).to_string(),
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}
