//! Filter predicates: operators, expression parsing, value comparison.
//!
//! Expression syntax is `column<op>literal`, one per line, where `column` is
//! a `\w+` name and `<op>` is one of the six comparison operators. The
//! literal runs to the end of the line and is taken verbatim.
//!
//! Comparison is numeric when both sides parse as numbers, lexicographic
//! otherwise.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// `column`, operator symbol, literal.
static PREDICATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)([<>=!]+)(.*)$").expect("predicate regex is valid"));

/// The six comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl Operator {
    /// Parse an operator symbol.
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Self::GreaterThan),
            "<" => Some(Self::LessThan),
            ">=" => Some(Self::GreaterOrEqual),
            "<=" => Some(Self::LessOrEqual),
            "==" => Some(Self::Equal),
            "!=" => Some(Self::NotEqual),
            _ => None,
        }
    }

    /// The operator's source symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Whether a comparison outcome satisfies this operator.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Self::GreaterThan => ordering == Ordering::Greater,
            Self::LessThan => ordering == Ordering::Less,
            Self::GreaterOrEqual => ordering != Ordering::Less,
            Self::LessOrEqual => ordering != Ordering::Greater,
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
        }
    }
}

/// One typed filter predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// Header name the predicate applies to.
    pub column: String,
    /// Comparison operator.
    pub operator: Operator,
    /// Right-hand literal, verbatim from the expression.
    pub literal: String,
}

impl Predicate {
    /// Evaluate this predicate against a cell value.
    pub fn matches(&self, value: &str) -> bool {
        self.operator.accepts(compare_values(value, &self.literal))
    }
}

/// Compare two cell values.
///
/// Numeric when both sides parse as `f64`, lexicographic otherwise. A numeric
/// comparison without a defined order (NaN) falls back to the string order.
pub fn compare_values(left: &str, right: &str) -> Ordering {
    match (left.parse::<f64>(), right.parse::<f64>()) {
        (Ok(l), Ok(r)) => l.partial_cmp(&r).unwrap_or_else(|| left.cmp(right)),
        _ => left.cmp(right),
    }
}

/// Parse a newline-separated filter spec into typed predicates.
///
/// The empty string yields no predicates. A line that does not match the
/// expression shape fails with [`FilterError::InvalidPredicate`]; a matching
/// line with an operator symbol outside the six fails with
/// [`FilterError::UnknownOperator`].
pub fn parse_predicates(row_filters: &str) -> FilterResult<Vec<Predicate>> {
    if row_filters.is_empty() {
        return Ok(Vec::new());
    }

    let mut predicates = Vec::new();

    for line in row_filters.split('\n') {
        let captures = PREDICATE_RE
            .captures(line)
            .ok_or_else(|| FilterError::InvalidPredicate(line.to_string()))?;

        let column = captures[1].to_string();
        let symbol = &captures[2];

        let operator = Operator::parse(symbol).ok_or_else(|| FilterError::UnknownOperator {
            operator: symbol.to_string(),
            column: column.clone(),
        })?;

        predicates.push(Predicate {
            column,
            operator,
            literal: captures[3].to_string(),
        });
    }

    Ok(predicates)
}

/// Human-readable operator table, for the CLI `operators` command.
pub fn operators_description() -> String {
    r#"Available filter operators (one `column<op>literal` expression per line):

| Operator | Meaning               |
|----------|-----------------------|
| >        | greater than          |
| <        | less than             |
| >=       | greater than or equal |
| <=       | less than or equal    |
| ==       | equal                 |
| !=       | not equal             |

Values are compared numerically when both sides parse as numbers,
lexicographically otherwise.

Example:

  header1>1
  header3!=abc"#
        .to_string()
}
