use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{cursor::SourcePos, evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// For `==` and `!=` the whole values are compared bitwise, tag and payload,
/// so heap values are equal only when they are the same object. Relational
/// operators require two integers.
///
/// # Errors
/// `TypeError` if a relational operator is applied to anything but two
/// `Int64` values.
///
/// # Example
/// ```
/// use plume::{
///     ast::BinaryOperator,
///     interpreter::{
///         cursor::SourcePos, evaluator::binary::comparison::eval_comparison, value::core::Value,
///     },
/// };
///
/// let pos = SourcePos::default();
///
/// let result = eval_comparison(BinaryOperator::Lt, &Value::Int64(3), &Value::Int64(5), pos);
/// assert_eq!(result.unwrap(), Value::True);
///
/// let result = eval_comparison(BinaryOperator::Eq, &Value::True, &Value::Int64(1), pos);
/// assert_eq!(result.unwrap(), Value::False);
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: SourcePos)
                       -> EvalResult<Value> {
    Ok(Value::from(match op {
                       BinaryOperator::Eq => left == right,
                       BinaryOperator::Ne => left != right,

                       BinaryOperator::Lt
                       | BinaryOperator::Le
                       | BinaryOperator::Gt
                       | BinaryOperator::Ge => {
                           let (Value::Int64(a), Value::Int64(b)) = (left, right) else {
                               return Err(RuntimeError::TypeError { details: format!("Cannot compare {} and {} with {op}",
                                                                                     left.tag(),
                                                                                     right.tag()),
                                                                    pos });
                           };

                           match op {
                               BinaryOperator::Lt => a < b,
                               BinaryOperator::Le => a <= b,
                               BinaryOperator::Gt => a > b,
                               BinaryOperator::Ge => a >= b,
                               _ => unreachable!(),
                           }
                       },

                       _ => unreachable!("eval_comparison used with non comparison operator"),
                   }))
}
