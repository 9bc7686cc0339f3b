//! Filter, sort and paginate.
//!
//! Pure functions over record indices. The browser memoizes their results;
//! nothing here touches the records themselves.

use std::ops::Range;

use super::column::Column;
use super::record::Record;
use super::state::{PageSize, SortDirection, SortSpec, total_pages};
use super::value::CellValue;

/// Indices of records with at least one text or numeric field containing
/// `query`, case-insensitively. An empty query keeps everything in order.
pub fn filter_indices<R: Record>(records: &[R], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record
                .fields()
                .iter()
                .any(|(_, value)| value.is_searchable() && value.matches(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Stable sort of `indices` by the spec's field.
///
/// The column's accessor wins when the field names a column; otherwise the
/// record's own field lookup is used.
pub fn sort_indices<R: Record>(
    records: &[R],
    indices: &mut Vec<usize>,
    column: Option<&Column<R>>,
    spec: &SortSpec,
) {
    let mut keyed: Vec<(usize, CellValue)> = indices
        .iter()
        .map(|&index| {
            let record = &records[index];
            let value = match column {
                Some(column) => column.raw_value(record),
                None => record.field(&spec.field).unwrap_or(CellValue::Empty),
            };
            (index, value)
        })
        .collect();

    // slice::sort_by is stable, so ties keep their filtered order
    keyed.sort_by(|(_, a), (_, b)| {
        let ordering = a.compare(b);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    indices.clear();
    indices.extend(keyed.into_iter().map(|(index, _)| index));
}

/// One page of a sorted sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number
    pub page: usize,
    pub page_size: PageSize,
    /// Rows in the whole sorted sequence
    pub total_rows: usize,
    pub total_pages: usize,
}

impl PageWindow {
    pub fn new(total_rows: usize, page: usize, page_size: PageSize) -> Self {
        Self {
            page,
            page_size,
            total_rows,
            total_pages: total_pages(total_rows, page_size),
        }
    }

    /// Slice bounds into the sorted sequence, empty when the page is past the end
    pub fn range(&self) -> Range<usize> {
        let size = self.page_size.get();
        let start = self.page.saturating_sub(1).saturating_mul(size).min(self.total_rows);
        let end = start.saturating_add(size).min(self.total_rows);
        start..end
    }

    /// First row number shown in the "Showing X to Y" text
    pub fn showing_from(&self) -> usize {
        let size = self.page_size.get();
        (self.page.saturating_sub(1) * size + 1).min(self.total_rows)
    }

    /// Last row number shown in the "Showing X to Y" text
    pub fn showing_to(&self) -> usize {
        (self.page * self.page_size.get()).min(self.total_rows)
    }

    /// Last reachable page, never below 1
    pub fn last_page(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.last_page()
    }
}
