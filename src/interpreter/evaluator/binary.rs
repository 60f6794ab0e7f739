/// Operator dispatch.
pub mod core;
/// Integer arithmetic: `+`, `-`, `*`, `/`, `%`.
pub mod scalar;
/// Relational and equality comparisons.
pub mod comparison;
/// Array indexing.
pub mod array;
