//! High-level pipeline API: parse, filter, project, serialize, write.
//!
//! Two entry points differ only in the CSV source:
//!
//! - [`process_csv_text`] - raw CSV text
//! - [`process_csv_file`] - path to a CSV file (read with encoding detection)
//!
//! Both run the same stages, write the result to the configured output
//! artifact, and return it. The `*_to` variants take an explicit output path
//! instead of reading the environment.
//!
//! # Example
//!
//! ```rust,ignore
//! use csvsieve::process_csv_text;
//!
//! let outcome = process_csv_text(
//!     "header1,header2,header3\n1,2,3\n4,5,6\n7,8,9",
//!     "header3,header1",
//!     "header1>1\nheader3<9",
//! )?;
//!
//! assert_eq!(outcome.csv, "header1,header3\n4,6");
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::OutputConfig;
use crate::document::Document;
use crate::error::PipelineResult;
use crate::{filter, parser, select, writer};

/// Result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    /// The serialized output CSV, exactly as written to the artifact.
    pub csv: String,

    /// Output column names, in output order.
    pub headers: Vec<String>,

    /// Data rows in the input document.
    pub input_rows: usize,

    /// Data rows that survived filtering.
    pub output_rows: usize,

    /// Where the output artifact was written.
    pub output_path: PathBuf,
}

/// Run the transformation stages on already-parsed input.
///
/// Selection is validated against the full header before predicates run, and
/// predicates also evaluate against the full header; projection only shapes
/// the output.
fn run(csv_text: &str, selected_columns: &str, row_filters: &str) -> PipelineResult<(Document, usize)> {
    let document = parser::parse_document(csv_text)?;

    let selection = select::parse_selection(selected_columns);
    let indices = select::resolve(&document, &selection)?;

    let predicates = filter::parse_predicates(row_filters)?;

    let input_rows = document.row_count();
    let filtered = filter::apply_predicates(&document, &predicates)?;
    let projected = select::project(&filtered, &indices);

    Ok((projected, input_rows))
}

/// Process raw CSV text, writing the result to `output`.
pub fn process_csv_text_to(
    csv: &str,
    selected_columns: &str,
    row_filters: &str,
    output: &Path,
) -> PipelineResult<ProcessOutcome> {
    let (document, input_rows) = run(csv, selected_columns, row_filters)?;
    let serialized = writer::to_csv(&document);

    writer::write_artifact(&serialized, output)?;

    Ok(ProcessOutcome {
        headers: document.headers,
        input_rows,
        output_rows: document.rows.len(),
        csv: serialized,
        output_path: output.to_path_buf(),
    })
}

/// Process raw CSV text, writing the result to the configured artifact.
///
/// This is the main text entry point. The output destination comes from the
/// environment (see [`OutputConfig`]).
pub fn process_csv_text(
    csv: &str,
    selected_columns: &str,
    row_filters: &str,
) -> PipelineResult<ProcessOutcome> {
    let config = OutputConfig::from_env();
    process_csv_text_to(csv, selected_columns, row_filters, &config.output_path())
}

/// Process a CSV file, writing the result to `output`.
///
/// The file is read with encoding auto-detection and then processed exactly
/// like raw text.
pub fn process_csv_file_to<P: AsRef<Path>>(
    path: P,
    selected_columns: &str,
    row_filters: &str,
    output: &Path,
) -> PipelineResult<ProcessOutcome> {
    let csv = parser::read_to_string(path)?;
    process_csv_text_to(&csv, selected_columns, row_filters, output)
}

/// Process a CSV file, writing the result to the configured artifact.
///
/// This is the main file entry point.
pub fn process_csv_file<P: AsRef<Path>>(
    path: P,
    selected_columns: &str,
    row_filters: &str,
) -> PipelineResult<ProcessOutcome> {
    let config = OutputConfig::from_env();
    process_csv_file_to(path, selected_columns, row_filters, &config.output_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FilterError, ParseError, PipelineError, SelectError};
    use std::io::Write;

    const SIMPLE_CSV: &str = "header1,header2,header3\n1,2,3\n4,5,6\n7,8,9";

    const FILE_CSV: &str = "col1,col2,col3,col4,col5,col6,col7\n\
        l1c1,l1c2,l1c3,l1c4,l1c5,l1c6,l1c7\n\
        l1c1,l1c2,l1c3,l1c4,l1c5,l1c6,l1c7\n\
        l2c1,l2c2,l2c3,l2c4,l2c5,l2c6,l2c7\n\
        l3c1,l3c2,l3c3,l3c4,l3c5,l3c6,l3c7";

    fn out_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("processed_data.csv")
    }

    #[test]
    fn test_no_selection_no_filter() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let outcome = process_csv_text_to(SIMPLE_CSV, "", "", &output).unwrap();

        assert_eq!(outcome.csv, SIMPLE_CSV);
        assert_eq!(outcome.input_rows, 3);
        assert_eq!(outcome.output_rows, 3);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), SIMPLE_CSV);
    }

    #[test]
    fn test_selection_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let outcome =
            process_csv_text_to(SIMPLE_CSV, "header3,header1", "header1>1\nheader3<9", &output)
                .unwrap();

        assert_eq!(outcome.csv, "header1,header3\n4,6");
        assert_eq!(outcome.headers, vec!["header1", "header3"]);
        assert_eq!(outcome.output_rows, 1);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "header1,header3\n4,6"
        );
    }

    #[test]
    fn test_file_no_filter() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, "{FILE_CSV}").unwrap();

        let outcome = process_csv_file_to(input.path(), "", "", &output).unwrap();

        assert_eq!(outcome.csv, FILE_CSV);
        assert_eq!(outcome.input_rows, 4);
    }

    #[test]
    fn test_file_selection_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, "{FILE_CSV}").unwrap();

        let outcome = process_csv_file_to(
            input.path(),
            "col1,col3,col4,col7",
            "col1>l1c1\ncol3!=l1c3",
            &output,
        )
        .unwrap();

        assert_eq!(
            outcome.csv,
            "col1,col3,col4,col7\nl2c1,l2c3,l2c4,l2c7\nl3c1,l3c3,l3c4,l3c7"
        );
    }

    #[test]
    fn test_file_specific_filters() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, "{FILE_CSV}").unwrap();

        let outcome = process_csv_file_to(
            input.path(),
            "col1,col3,col4,col7",
            "col1>l1c1\ncol3>l2c3",
            &output,
        )
        .unwrap();

        assert_eq!(outcome.csv, "col1,col3,col4,col7\nl3c1,l3c3,l3c4,l3c7");
    }

    #[test]
    fn test_filter_references_unselected_column() {
        // Selection does not restrict the columns filters may reference.
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let outcome =
            process_csv_text_to(SIMPLE_CSV, "header3", "header1>1", &output).unwrap();

        assert_eq!(outcome.csv, "header3\n6\n9");
    }

    #[test]
    fn test_unknown_selection_column() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let err = process_csv_text_to(SIMPLE_CSV, "header5,header7", "header1>1", &output)
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Select(SelectError::UnknownColumn(_))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_unknown_filter_column() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let err = process_csv_text_to(SIMPLE_CSV, "", "header9<5", &output).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Filter(FilterError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_invalid_filter_expression() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let err = process_csv_text_to(SIMPLE_CSV, "", "col3#l1c3", &output).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Filter(FilterError::InvalidPredicate(_))
        ));
    }

    #[test]
    fn test_malformed_row_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let err = process_csv_text_to("a,b\n1,2,3", "", "", &output).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Parse(ParseError::FieldCountMismatch { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let err = process_csv_file_to("no/such/input.csv", "", "", &output).unwrap_err();

        assert!(matches!(err, PipelineError::Parse(ParseError::Io(_))));
    }

    #[test]
    fn test_output_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let output = out_path(&dir);

        let outcome = process_csv_text_to(SIMPLE_CSV, "", "header1>1", &output).unwrap();
        let reparsed = parser::parse_document(&outcome.csv).unwrap();

        assert_eq!(reparsed.headers, outcome.headers);
        assert_eq!(reparsed.row_count(), outcome.output_rows);
    }
}
