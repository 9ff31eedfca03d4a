//! Error types for the csvsieve processing pipeline.
//!
//! This module defines a hierarchy of error types, one per pipeline stage:
//!
//! - [`ParseError`] - CSV parsing and input reading errors
//! - [`SelectError`] - column projection errors
//! - [`FilterError`] - row filter parsing and evaluation errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors during CSV parsing or input reading.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode input bytes.
    #[error("Failed to decode input: {0}")]
    Encoding(String),

    /// Input contained no header line.
    #[error("CSV input is empty")]
    EmptyInput,

    /// A data row's field count does not match the header's.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The header contains the same field name twice.
    #[error("Duplicate header '{0}'")]
    DuplicateHeader(String),
}

// =============================================================================
// Column Selection Errors
// =============================================================================

/// Errors during column projection.
#[derive(Debug, Error)]
pub enum SelectError {
    /// A selected column is absent from the header.
    #[error("Header '{0}' not found in CSV headers")]
    UnknownColumn(String),
}

// =============================================================================
// Row Filter Errors
// =============================================================================

/// Errors during row filter parsing or evaluation.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A filter line does not match `column<op>literal`.
    #[error("Invalid filter: '{0}'")]
    InvalidPredicate(String),

    /// The operator symbol is not one of `>`, `<`, `>=`, `<=`, `==`, `!=`.
    #[error("Invalid operator '{operator}' in filter for header '{column}'")]
    UnknownOperator { operator: String, column: String },

    /// A predicate references a column absent from the header.
    #[error("Header '{0}' not found in CSV headers")]
    UnknownColumn(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::pipeline::process_csv_text`]
/// and [`crate::pipeline::process_csv_file`]. It wraps all stage errors and
/// adds the output-artifact write failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Parse(#[from] ParseError),

    /// Column selection error.
    #[error("Selection error: {0}")]
    Select(#[from] SelectError),

    /// Row filter error.
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Failed to write the output artifact.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for column selection operations.
pub type SelectResult<T> = Result<T, SelectError>;

/// Result type for row filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
