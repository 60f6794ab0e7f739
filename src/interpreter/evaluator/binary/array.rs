use crate::{
    error::RuntimeError,
    interpreter::{
        cursor::SourcePos,
        evaluator::core::EvalResult,
        value::{core::Value, heap::Heap},
    },
    util::num::i64_to_index_checked,
};

/// Evaluates `array[index]`.
///
/// # Errors
/// - `TypeError` if the left operand is not an array or the index is not an
///   `Int64`.
/// - `IndexOutOfBounds` if the index is negative or not below the length.
///
/// # Example
/// ```
/// use plume::{
///     error::RuntimeError,
///     interpreter::{
///         cursor::SourcePos,
///         evaluator::binary::array::eval_index,
///         value::{core::Value, heap::Heap},
///     },
/// };
///
/// let mut heap = Heap::new();
/// let array = Value::Array(heap.alloc_array(vec![Value::Int64(10), Value::Int64(20)]));
/// let pos = SourcePos::default();
///
/// assert_eq!(eval_index(&heap, &array, &Value::Int64(1), pos).unwrap(), Value::Int64(20));
///
/// let err = eval_index(&heap, &array, &Value::Int64(2), pos).unwrap_err();
/// assert!(matches!(err, RuntimeError::IndexOutOfBounds { len: 2, found: 2, .. }));
/// ```
pub fn eval_index(heap: &Heap, left: &Value, right: &Value, pos: SourcePos) -> EvalResult<Value> {
    let Value::Array(array) = left else {
        return Err(RuntimeError::TypeError { details: format!("Cannot index into {}", left.tag()),
                                             pos });
    };
    let Value::Int64(found) = right else {
        return Err(RuntimeError::TypeError { details: format!("Array index must be int64, found {}",
                                                              right.tag()),
                                             pos });
    };

    let len = heap.len(*array).unwrap_or(0);
    let index = i64_to_index_checked(*found, len, pos)?;

    heap.array_get(*array, index)
        .cloned()
        .ok_or(RuntimeError::IndexOutOfBounds { len,
                                                found: *found,
                                                pos })
}
