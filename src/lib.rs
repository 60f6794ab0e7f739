//! # plume
//!
//! plume is a small expression language written in Rust.
//! It parses source text into an abstract syntax tree with a backtracking
//! recursive-descent parser and reduces that tree to tagged runtime values
//! with a tree-walking evaluator. The language has integer, boolean and
//! string literals, arithmetic and relational operators, conditionals,
//! function expressions and a small table of built-in calls.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Shares function bodies between the tree and the values that refer to
///   them.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Every error carries the source position at which it was
/// detected, and runtime errors are classified into evaluation failures and
/// runtime faults.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the cursor, lexer, parser, evaluator and value
/// representations to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for checked numeric conversion.
///
/// # Responsibilities
/// - Accumulate literal digits into an `i64` without silent overflow.
/// - Convert runtime integers into bounds-checked indices.
pub mod util;

/// Parses and evaluates `source` in a fresh context and returns the value of
/// the last top-level expression.
///
/// Built-ins called by the source print to standard output. Heap values in
/// the result refer to a context that no longer exists; they can still be
/// compared and inspected by tag.
///
/// # Errors
/// The first parse failure or runtime error.
///
/// # Examples
/// ```
/// use plume::{evaluate_source, interpreter::value::core::Value};
///
/// assert_eq!(evaluate_source("0xFF").unwrap(), Value::Int64(255));
/// assert_eq!(evaluate_source("if 0 then 1 else 2").unwrap(), Value::Int64(2));
/// assert!(evaluate_source("'open").is_err());
/// ```
pub fn evaluate_source(source: &str) -> Result<Value, Error> {
    Context::new().evaluate_source(source)
}

/// Runs a script, printing the value of its last expression if `auto_print`
/// is set.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if writing to standard
/// output fails.
///
/// # Examples
/// ```
/// use plume::run_script;
///
/// assert!(run_script("$print_i64(1 + 2)", false).is_ok());
/// assert!(run_script("$print_i64(1 / 0)", false).is_err());
/// ```
pub fn run_script(source: &str, auto_print: bool) -> Result<(), Error> {
    let mut context = Context::new();
    let value = context.evaluate_source(source)?;

    let (heap, out) = context.heap_and_output();
    if auto_print {
        writeln!(out, "{}", value.display(heap))?;
    }
    out.flush()?;

    Ok(())
}
