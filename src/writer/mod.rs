//! CSV serialization and output artifact writing.

use std::fs;
use std::io;
use std::path::Path;

use crate::document::Document;

/// Serialize a document back to CSV text.
///
/// Header line first, then one line per row; fields joined by `,`, lines by
/// `\n`, no trailing newline. Identical documents serialize identically.
pub fn to_csv(document: &Document) -> String {
    let mut lines = Vec::with_capacity(document.rows.len() + 1);
    lines.push(document.headers.join(","));

    for row in &document.rows {
        lines.push(row.values.join(","));
    }

    lines.join("\n")
}

/// Write serialized output to the artifact path, creating parent directories.
pub fn write_artifact(content: &str, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)
}
