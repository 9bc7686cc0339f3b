//! Records and Record Sets
//!
//! The `Record` trait is how the table reads caller data. `RecordSet` is the
//! shared, read-only sequence of records a table browses.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::value::CellValue;
use crate::error::{Error, Result};

/// Field access for one row of caller data
pub trait Record {
    /// Every field in declaration order. The search filter scans these.
    fn fields(&self) -> Vec<(&str, CellValue)>;

    /// Look up a single field by name. `None` means the field is missing.
    fn field(&self, name: &str) -> Option<CellValue> {
        self.fields()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn fields(&self) -> Vec<(&str, CellValue)> {
        self.iter()
            .map(|(key, value)| (key.as_str(), CellValue::from(value)))
            .collect()
    }

    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).map(CellValue::from)
    }
}

impl Record for serde_json::Value {
    fn fields(&self) -> Vec<(&str, CellValue)> {
        match self.as_object() {
            Some(object) => object.fields(),
            None => Vec::new(),
        }
    }

    fn field(&self, name: &str) -> Option<CellValue> {
        self.as_object().and_then(|object| object.field(name))
    }
}

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// Shared in-memory record sequence.
///
/// Insertion order is the unsorted baseline order. Every distinct content
/// gets its own revision, which is what view caches key on.
#[derive(Debug)]
pub struct RecordSet<R> {
    rows: Arc<Vec<R>>,
    revision: u64,
}

impl<R> RecordSet<R> {
    /// Create a new record set
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows: Arc::new(rows),
            revision: next_revision(),
        }
    }

    /// Get the total number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index
    pub fn get(&self, index: usize) -> Option<&R> {
        self.rows.get(index)
    }

    /// Get all rows
    pub fn all(&self) -> &[R] {
        &self.rows
    }

    /// Content revision
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Shared handle to the underlying rows
    pub fn shared(&self) -> Arc<Vec<R>> {
        Arc::clone(&self.rows)
    }
}

impl<R: Clone> RecordSet<R> {
    /// Insert a row at the front (newest first)
    pub fn push_front(&mut self, row: R) {
        Arc::make_mut(&mut self.rows).insert(0, row);
        self.revision = next_revision();
    }
}

impl<R> Clone for RecordSet<R> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            revision: self.revision,
        }
    }
}

impl<R> Default for RecordSet<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R> FromIterator<R> for RecordSet<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl RecordSet<serde_json::Value> {
    /// Parse a JSON array of objects
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Array(rows) = value else {
            return Err(Error::Invalid {
                message: "Record fixture must be a JSON array".to_string(),
            });
        };
        debug!(rows = rows.len(), "Parsed JSON records");
        Ok(Self::new(rows))
    }

    /// Load a JSON array of objects from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = ?path, "Loading JSON records");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
