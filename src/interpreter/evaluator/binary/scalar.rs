use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{cursor::SourcePos, evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an arithmetic operation on two integers.
///
/// Every operation is checked: a result that does not fit in an `i64`
/// raises `Overflow`, and a zero divisor for `/` or `%` raises
/// `DivisionByZero`. Division truncates toward zero and the remainder takes
/// the sign of the dividend.
///
/// # Errors
/// - `TypeError` if either operand is not an `Int64`.
/// - `DivisionByZero`, `Overflow` as described above.
///
/// # Example
/// ```
/// use plume::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::{
///         cursor::SourcePos, evaluator::binary::scalar::eval_arithmetic, value::core::Value,
///     },
/// };
///
/// let pos = SourcePos::default();
///
/// let r = eval_arithmetic(BinaryOperator::Mod, &Value::Int64(-7), &Value::Int64(3), pos);
/// assert_eq!(r.unwrap(), Value::Int64(-1));
///
/// let r = eval_arithmetic(BinaryOperator::Div, &Value::Int64(1), &Value::Int64(0), pos);
/// assert!(matches!(r, Err(RuntimeError::DivisionByZero { .. })));
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: SourcePos)
                       -> EvalResult<Value> {
    let (Value::Int64(a), Value::Int64(b)) = (left, right) else {
        return Err(RuntimeError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                                              left.tag(),
                                                              right.tag()),
                                             pos });
    };

    let result = match op {
        BinaryOperator::Add => a.checked_add(*b),
        BinaryOperator::Sub => a.checked_sub(*b),
        BinaryOperator::Mul => a.checked_mul(*b),
        BinaryOperator::Div | BinaryOperator::Mod if *b == 0 => {
            return Err(RuntimeError::DivisionByZero { pos });
        },
        BinaryOperator::Div => a.checked_div(*b),
        BinaryOperator::Mod => a.checked_rem(*b),
        _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
    };

    result.map(Value::Int64)
          .ok_or(RuntimeError::Overflow { pos })
}
