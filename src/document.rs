//! In-memory CSV document model.
//!
//! A [`Document`] is an ordered header plus ordered data rows. Every row
//! carries exactly as many values as the header has fields; the parser
//! enforces this, and every transformation stage preserves it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based position among the data rows of the source document.
    ///
    /// Survives filtering and projection, so output ordering stays tied to
    /// the input and error messages can point at the original line.
    pub position: usize,

    /// Field values, in header order.
    pub values: Vec<String>,
}

/// A parsed CSV document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Column names, in file order. Names are unique.
    pub headers: Vec<String>,

    /// Data rows, in file order.
    pub rows: Vec<Row>,
}

impl Document {
    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Convert rows to JSON objects keyed by column name.
    ///
    /// Used by the CLI `parse` command to dump a document for inspection.
    pub fn to_records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (header, value) in self.headers.iter().zip(&row.values) {
                    obj.insert(header.clone(), Value::String(value.clone()));
                }
                Value::Object(obj)
            })
            .collect()
    }
}
