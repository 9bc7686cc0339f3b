//! Cell Values
//!
//! Typed field values read out of records, plus the search and ordering
//! rules the table applies to them.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// A single field value as seen by the table
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    /// Nested structure (arrays, objects). Displayed, never searched.
    Composite(String),
    /// Missing or null field
    Empty,
}

impl CellValue {
    /// Whether the search filter looks at this value
    pub fn is_searchable(&self) -> bool {
        matches!(self, CellValue::Text(_) | CellValue::Int(_) | CellValue::Float(_))
    }

    /// Check if the value is missing
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Case-insensitive substring match against an already lowercased needle.
    ///
    /// Only text and numbers can match; every other kind returns false.
    pub fn matches(&self, needle_lower: &str) -> bool {
        match self {
            CellValue::Text(text) => text.to_lowercase().contains(needle_lower),
            CellValue::Int(n) => n.to_string().contains(needle_lower),
            CellValue::Float(f) => f.to_string().to_lowercase().contains(needle_lower),
            _ => false,
        }
    }

    /// Total order used by column sorting.
    ///
    /// Numbers compare numerically across `Int`/`Float`, like kinds compare
    /// naturally, mixed kinds fall back to their display text. `Empty` sorts
    /// after every present value.
    pub fn compare(&self, other: &Self) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Greater,
            (_, Empty) => Ordering::Less,
            (Text(a), Text(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            CellValue::Composite(raw) => f.write_str(raw),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map_or(CellValue::Empty, CellValue::Float),
            },
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => CellValue::Composite(value.to_string()),
        }
    }
}
