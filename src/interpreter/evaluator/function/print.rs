use std::io::{self, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        cursor::SourcePos,
        evaluator::core::EvalResult,
        value::{core::Value, heap::Heap},
    },
};

/// Extracts the single argument of a one-argument builtin.
fn single_arg(args: &[Value], pos: SourcePos) -> EvalResult<&Value> {
    match args {
        [arg] => Ok(arg),
        _ => Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                       found: args.len(),
                                                       pos }),
    }
}

fn output_error(e: &io::Error, pos: SourcePos) -> RuntimeError {
    RuntimeError::Output { details: e.to_string(),
                           pos }
}

/// Prints an integer in decimal, with no trailing newline or separator.
///
/// # Returns
/// `Value::True`.
///
/// # Errors
/// `TypeError` if the argument is not an `Int64`; `Output` if writing fails.
///
/// # Example
/// ```
/// use plume::interpreter::{
///     cursor::SourcePos,
///     evaluator::function::print::print_i64,
///     value::{core::Value, heap::Heap},
/// };
///
/// let heap = Heap::new();
/// let mut out = Vec::new();
///
/// let result = print_i64(&[Value::Int64(-12)], &heap, &mut out, SourcePos::default());
///
/// assert_eq!(result.unwrap(), Value::True);
/// assert_eq!(out, b"-12");
/// ```
pub fn print_i64(args: &[Value],
                 _heap: &Heap,
                 out: &mut dyn Write,
                 pos: SourcePos)
                 -> EvalResult<Value> {
    let arg = single_arg(args, pos)?;
    let Value::Int64(n) = arg else {
        return Err(RuntimeError::TypeError { details: format!("$print_i64 expects int64, found {}",
                                                              arg.tag()),
                                             pos });
    };

    write!(out, "{n}").map_err(|e| output_error(&e, pos))?;
    Ok(Value::True)
}

/// Prints the raw bytes of a string, with no quoting, escaping or trailing
/// newline.
///
/// # Returns
/// `Value::True`.
///
/// # Errors
/// `TypeError` if the argument is not a string; `Output` if writing fails.
pub fn print_str(args: &[Value],
                 heap: &Heap,
                 out: &mut dyn Write,
                 pos: SourcePos)
                 -> EvalResult<Value> {
    let arg = single_arg(args, pos)?;
    let Value::String(obj) = arg else {
        return Err(RuntimeError::TypeError { details: format!("$print_str expects string, found {}",
                                                              arg.tag()),
                                             pos });
    };

    heap.print_string(*obj, out)
        .map_err(|e| output_error(&e, pos))?;
    Ok(Value::True)
}
