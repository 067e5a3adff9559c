//! # Common Types
//!
//! This module contains the common types used throughout the crate for
//! representing colours and the in-memory tables that charts are drawn from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::StyleResult;

/// A colour as understood by the chart library.
///
/// Stored verbatim: hex (`#179fdb`, `#182a3833`), functional (`rgb(69,101,133)`)
/// or a named CSS colour (`red`). The absence of a fill is modelled as
/// `Option<Color>::None` rather than as a special colour value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a colour string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The colour as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a two-digit hex alpha to a six-digit hex colour.
    ///
    /// Non-hex colours are returned unchanged.
    pub fn with_alpha_hex(&self, alpha: &str) -> Self {
        if self.0.starts_with('#') && self.0.len() == 7 {
            Self(format!("{}{}", self.0, alpha))
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One row of a [`Table`]: column name to value, in insertion order.
pub type Record = IndexMap<String, Value>;

/// A row-oriented table, serialized as a JSON array of objects.
///
/// This is the shape the chart library accepts as inline `data.values`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Record>,
}

impl Table {
    /// Create a table from rows.
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    /// Build a table from a JSON array of objects.
    pub fn from_json(value: Value) -> StyleResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }

    /// Append a row.
    pub fn push(&mut self, row: Record) {
        self.rows.push(row);
    }

    /// Column names in first-seen order across all rows.
    pub fn columns(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for row in &self.rows {
            for key in row.keys() {
                if !names.iter().any(|n| n == key) {
                    names.push(key.clone());
                }
            }
        }
        names
    }

    /// Whether every row carries `name`.
    pub fn has_column(&self, name: &str) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| row.contains_key(name))
    }

    /// Values of a column, one entry per row.
    pub fn column(&self, name: &str) -> Vec<Option<&Value>> {
        self.rows.iter().map(|row| row.get(name)).collect()
    }

    /// Value of `name` in row `index` as a string, if it is one.
    pub fn get_str(&self, index: usize, name: &str) -> Option<&str> {
        self.rows.get(index)?.get(name)?.as_str()
    }

    /// Set (or replace) a column. `values` must have one entry per row;
    /// surplus values are ignored and missing ones leave rows untouched.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) {
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(name.to_string(), value);
        }
    }
}

impl From<Vec<Record>> for Table {
    fn from(rows: Vec<Record>) -> Self {
        Self::new(rows)
    }
}
