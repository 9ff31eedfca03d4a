//! # csvsieve - CSV column selection and row filtering
//!
//! csvsieve parses a CSV document, keeps the requested columns, keeps the
//! rows matching a conjunctive filter spec, and serializes the result back to
//! CSV - written to a configured output artifact and returned as text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV text   │────▶│   Parser    │────▶│ Filter +    │────▶│ Output CSV  │
//! │  or file    │     │  (strict)   │     │ Projection  │     │ (artifact)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csvsieve::process_csv_text;
//!
//! fn main() {
//!     let outcome = process_csv_text(
//!         "header1,header2,header3\n1,2,3\n4,5,6\n7,8,9",
//!         "header3,header1",
//!         "header1>1\nheader3<9",
//!     )
//!     .unwrap();
//!     println!("{}", outcome.csv);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Output artifact configuration
//! - [`document`] - Document/Row data model
//! - [`parser`] - Strict CSV parsing with encoding detection
//! - [`select`] - Column projection
//! - [`filter`] - Predicate mini-language and row filtering
//! - [`writer`] - Serialization and artifact writing
//! - [`pipeline`] - Orchestration and entry points

// Core modules
pub mod config;
pub mod document;
pub mod error;

// Parsing
pub mod parser;

// Transformation stages
pub mod filter;
pub mod select;

// Output
pub mod writer;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    FilterError, FilterResult, ParseError, ParseResult, PipelineError, PipelineResult,
    SelectError, SelectResult,
};

// =============================================================================
// Re-exports - Data model
// =============================================================================

pub use document::{Document, Row};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::OutputConfig;

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{decode_content, detect_encoding, parse_document, parse_document_file};

// =============================================================================
// Re-exports - Selection and filtering
// =============================================================================

pub use filter::{apply_predicates, operators_description, parse_predicates, Operator, Predicate};
pub use select::{parse_selection, project, resolve};

// =============================================================================
// Re-exports - Serialization
// =============================================================================

pub use writer::to_csv;

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{
    process_csv_file, process_csv_file_to, process_csv_text, process_csv_text_to, ProcessOutcome,
};
