//! Applies a predicate list to a document.

use crate::document::Document;
use crate::error::{FilterError, FilterResult};
use crate::filter::predicate::Predicate;

/// Keep only the rows for which every predicate holds.
///
/// Predicate columns are resolved against the header once, up front; an
/// unknown column fails with [`FilterError::UnknownColumn`] before any row is
/// evaluated. Surviving rows keep their original relative order. An empty
/// predicate list keeps every row.
pub fn apply_predicates(document: &Document, predicates: &[Predicate]) -> FilterResult<Document> {
    let bound: Vec<(usize, &Predicate)> = predicates
        .iter()
        .map(|predicate| {
            document
                .column_index(&predicate.column)
                .map(|idx| (idx, predicate))
                .ok_or_else(|| FilterError::UnknownColumn(predicate.column.clone()))
        })
        .collect::<FilterResult<_>>()?;

    let rows = document
        .rows
        .iter()
        .filter(|row| {
            bound
                .iter()
                .all(|(idx, predicate)| predicate.matches(&row.values[*idx]))
        })
        .cloned()
        .collect();

    Ok(Document {
        headers: document.headers.clone(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::predicate::parse_predicates;
    use crate::parser::parse_document;

    fn sample() -> Document {
        parse_document("header1,header2,header3\n1,2,3\n4,5,6\n7,8,9").unwrap()
    }

    #[test]
    fn test_empty_spec_keeps_all_rows() {
        let doc = sample();
        let filtered = apply_predicates(&doc, &[]).unwrap();
        assert_eq!(filtered, doc);
    }

    #[test]
    fn test_conjunction() {
        let doc = sample();
        let predicates = parse_predicates("header1>1\nheader3<9").unwrap();
        let filtered = apply_predicates(&doc, &predicates).unwrap();

        assert_eq!(filtered.row_count(), 1);
        assert_eq!(filtered.rows[0].values, vec!["4", "5", "6"]);
    }

    #[test]
    fn test_order_preserved() {
        let doc = sample();
        let predicates = parse_predicates("header1!=4").unwrap();
        let filtered = apply_predicates(&doc, &predicates).unwrap();

        let positions: Vec<usize> = filtered.rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn test_header_untouched() {
        let doc = sample();
        let predicates = parse_predicates("header2>9").unwrap();
        let filtered = apply_predicates(&doc, &predicates).unwrap();

        assert_eq!(filtered.headers, doc.headers);
        assert_eq!(filtered.row_count(), 0);
    }

    #[test]
    fn test_unknown_column() {
        let doc = sample();
        let predicates = parse_predicates("header9>1").unwrap();
        let err = apply_predicates(&doc, &predicates).unwrap_err();
        match err {
            FilterError::UnknownColumn(name) => assert_eq!(name, "header9"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
