use std::io::Write;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        cursor::SourcePos,
        evaluator::{
            binary::{array::eval_index, comparison::eval_comparison, scalar::eval_arithmetic},
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// This function routes the operation to specialized handlers depending
    /// on the operator. Indexing uses `eval_index`, arithmetic uses
    /// `eval_arithmetic` and relational and equality operators use
    /// `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use plume::{
    ///     ast::BinaryOperator,
    ///     interpreter::{cursor::SourcePos, evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let left = Value::Int64(3);
    /// let right = Value::Int64(4);
    /// let pos = SourcePos::default();
    ///
    /// let result = context.eval_binary(BinaryOperator::Add, &left, &right, pos);
    /// assert_eq!(result.unwrap(), Value::Int64(7));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: SourcePos)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Eq, Ge, Gt, Index, Le, Lt, Mod, Mul, Ne, Sub};

        match op {
            Index => eval_index(&self.heap, left, right, pos),
            Add | Sub | Mul | Div | Mod => eval_arithmetic(op, left, right, pos),
            Lt | Le | Gt | Ge | Eq | Ne => eval_comparison(op, left, right, pos),
        }
    }
}
