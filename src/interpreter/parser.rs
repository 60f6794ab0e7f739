/// Entry points of the parser.
///
/// Contains `parse_expression`, the `if` production and the top-level
/// program loop.
pub mod core;

/// Atomic expressions.
///
/// Identifiers and keywords, integer and string literals, parenthesized
/// expressions, array literals and `fun` expressions.
pub mod atom;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels and the postfix call
/// and index forms.
pub mod binary;

/// Utility functions for the parser.
///
/// Backtracking support and the argument-list helper shared by calls and
/// array literals.
pub mod utils;
