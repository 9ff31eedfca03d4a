//! Strict CSV parsing with encoding auto-detection for file input.
//!
//! The dialect is deliberately minimal: rows are separated by `\n`, fields by
//! `,`, the first line is the header. Values are taken verbatim - no
//! whitespace trimming, no quoting, no embedded delimiters. A data row whose
//! field count differs from the header's is a hard error, never padded or
//! truncated.
//!
//! File input is read as raw bytes, its encoding detected with chardet and
//! decoded before parsing, so ISO-8859-1 and Windows-1252 exports work
//! without manual conversion.

use std::collections::HashSet;
use std::path::Path;

use crate::document::{Document, Row};
use crate::error::{ParseError, ParseResult};

/// Field separator of the supported dialect.
const FIELD_SEPARATOR: char = ',';

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> ParseResult<String> {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8(bytes.to_vec())
            .map_err(|e| ParseError::Encoding(e.to_string()))
            .or_else(|_| Ok(String::from_utf8_lossy(bytes).to_string())),
        "iso-8859-1" | "latin-1" | "latin1" => {
            Ok(encoding_rs::ISO_8859_15.decode(bytes).0.to_string())
        }
        "windows-1252" | "cp1252" => {
            Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.to_string())
        }
        _ => {
            // Fallback: UTF-8 with lossy conversion
            Ok(String::from_utf8_lossy(bytes).to_string())
        }
    }
}

/// Read a file to text, detecting and decoding its encoding.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> ParseResult<String> {
    let bytes = std::fs::read(path.as_ref())?;
    let encoding = detect_encoding(&bytes);
    decode_content(&bytes, &encoding)
}

/// Parse CSV text into a [`Document`].
///
/// The first line is the header; every following line must have exactly as
/// many fields. A single trailing empty line (input ending in `\n`) is
/// tolerated; any other short or long row fails with
/// [`ParseError::FieldCountMismatch`].
pub fn parse_document(csv: &str) -> ParseResult<Document> {
    let mut lines: Vec<&str> = csv.split('\n').collect();

    // Tolerate a final newline; everything else must line up with the header.
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let header_line = match lines.first() {
        Some(line) if !line.is_empty() => *line,
        _ => return Err(ParseError::EmptyInput),
    };

    let headers: Vec<String> = header_line
        .split(FIELD_SEPARATOR)
        .map(str::to_string)
        .collect();

    let mut seen = HashSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            return Err(ParseError::DuplicateHeader(header.clone()));
        }
    }

    let mut rows = Vec::with_capacity(lines.len().saturating_sub(1));

    for (idx, line) in lines.iter().enumerate().skip(1) {
        let values: Vec<String> = line.split(FIELD_SEPARATOR).map(str::to_string).collect();

        if values.len() != headers.len() {
            return Err(ParseError::FieldCountMismatch {
                line: idx + 1,
                expected: headers.len(),
                found: values.len(),
            });
        }

        rows.push(Row {
            position: idx,
            values,
        });
    }

    Ok(Document { headers, rows })
}

/// Read and parse a CSV file, with encoding auto-detection.
pub fn parse_document_file<P: AsRef<Path>>(path: P) -> ParseResult<Document> {
    let content = read_to_string(path)?;
    parse_document(&content)
}
