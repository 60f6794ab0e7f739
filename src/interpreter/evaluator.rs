/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the per-node dispatch and the top-level
/// source evaluation loop.
pub mod core;

/// Truthiness.
///
/// Converts any value to a boolean for conditional branching.
pub mod truth;

/// Binary operator evaluation logic.
///
/// Handles indexing, integer arithmetic, relational comparisons and
/// bitwise equality.
pub mod binary;

/// Function evaluation.
///
/// Handles calls of built-in functions: name lookup, argument checking and
/// dispatch.
pub mod function;
