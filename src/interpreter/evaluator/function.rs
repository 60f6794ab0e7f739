/// The `$print_i64` and `$print_str` built-ins.
///
/// Write a value to the context's output without any separator.
pub mod print;

/// Built-in lookup table and call dispatch.
pub mod core;
