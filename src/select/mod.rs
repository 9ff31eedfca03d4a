//! Column projection.
//!
//! A selection is a comma-separated list of header names; the empty string
//! selects every column. Requested names are resolved against the full header
//! before any filtering runs, so an unknown name fails fast. Output columns
//! always appear in original header order, whatever order they were requested
//! in, and repeats collapse to one column.

use crate::document::{Document, Row};
use crate::error::{SelectError, SelectResult};

/// Split a selection string into header names.
///
/// Empty input means "all columns". Names are taken verbatim (no trimming).
pub fn parse_selection(selected_columns: &str) -> Vec<String> {
    if selected_columns.is_empty() {
        return Vec::new();
    }

    selected_columns.split(',').map(str::to_string).collect()
}

/// Resolve a selection to column indices of `document`.
///
/// An empty selection resolves to every column. Indices come back sorted into
/// header order and deduplicated. Fails with [`SelectError::UnknownColumn`]
/// for any name absent from the header.
pub fn resolve(document: &Document, selection: &[String]) -> SelectResult<Vec<usize>> {
    if selection.is_empty() {
        return Ok((0..document.headers.len()).collect());
    }

    let mut indices = Vec::with_capacity(selection.len());
    for name in selection {
        let idx = document
            .column_index(name)
            .ok_or_else(|| SelectError::UnknownColumn(name.clone()))?;
        indices.push(idx);
    }

    indices.sort_unstable();
    indices.dedup();

    Ok(indices)
}

/// Project a document onto the given column indices.
///
/// Indices must come from [`resolve`] on a document with the same header.
pub fn project(document: &Document, indices: &[usize]) -> Document {
    let headers = indices
        .iter()
        .map(|&i| document.headers[i].clone())
        .collect();

    let rows = document
        .rows
        .iter()
        .map(|row| Row {
            position: row.position,
            values: indices.iter().map(|&i| row.values[i].clone()).collect(),
        })
        .collect();

    Document { headers, rows }
}
