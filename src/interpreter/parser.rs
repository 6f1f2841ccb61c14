/// The parser state and entry points.
///
/// Holds the `Parser` type with its current/previous token pair, the `eat`
/// and `advance` primitives, and the top-level `parse` production.
pub mod core;

/// Factor parsing.
///
/// Parses the highest-precedence constructs: literals, identifiers, calls,
/// array literals, parenthesized expressions and prefix operators.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence ladder from logical operators down to powers.
pub mod binary;

/// Block parsing.
///
/// Parses `->` ... `.` delimited statement sequences.
pub mod block;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists and operator classification.
pub mod utils;

/// Statement parsing.
///
/// Implements declarations, assignments, conditionals and function
/// definitions.
pub mod statement;
