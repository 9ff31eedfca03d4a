//! Row filtering: the predicate mini-language and its executor.
//!
//! A filter spec is a newline-separated list of `column<op>literal`
//! expressions combined with logical AND. Expressions are parsed once into
//! typed [`Predicate`]s before any row is evaluated.

pub mod executor;
pub mod predicate;

pub use executor::apply_predicates;
pub use predicate::{operators_description, parse_predicates, Operator, Predicate};
