use std::io::Write;

use crate::interpreter::{
    evaluator::core::Context,
    value::{core::Value, heap::Heap},
};

/// Evaluates the boolean meaning of a value.
///
/// - `false` is false and `true` is true.
/// - Integers and floats are false iff zero.
/// - Raw pointers are false iff null.
/// - Strings and arrays are false iff empty.
/// - Every other value is true.
///
/// # Example
/// ```
/// use plume::interpreter::{
///     evaluator::truth::eval_truth,
///     value::{core::Value, heap::Heap},
/// };
///
/// let mut heap = Heap::new();
/// let empty = Value::String(heap.alloc_string(b""));
/// let full = Value::Array(heap.alloc_array(vec![Value::False]));
///
/// assert!(!eval_truth(&Value::Int64(0), &heap));
/// assert!(eval_truth(&Value::Float64(0.5), &heap));
/// assert!(!eval_truth(&empty, &heap));
/// assert!(eval_truth(&full, &heap));
/// assert!(eval_truth(&Value::Void, &heap));
/// ```
#[must_use]
pub fn eval_truth(value: &Value, heap: &Heap) -> bool {
    match value {
        Value::False => false,
        Value::True => true,
        Value::Int64(n) => *n != 0,
        Value::Float64(x) => *x != 0.0,
        Value::RawPtr(p) => *p != 0,
        Value::String(obj) | Value::Array(obj) => heap.len(*obj).is_some_and(|len| len > 0),
        Value::Fun(_) | Value::Void => true,
    }
}

impl<W: Write> Context<W> {
    /// Evaluates the boolean meaning of `value` against this context's heap.
    ///
    /// See [`eval_truth`].
    #[must_use]
    pub fn eval_truth(&self, value: &Value) -> bool {
        eval_truth(value, &self.heap)
    }
}
