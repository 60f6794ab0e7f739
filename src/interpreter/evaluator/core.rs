use std::{
    io::{self, Stdout, Write},
    rc::Rc,
};

use tracing::debug;

use crate::{
    ast::Expr,
    error::{Error, RuntimeError},
    interpreter::{
        cursor::Cursor,
        parser::core::{end_of_top_level, parse_top_level},
        value::{core::Value, heap::Heap},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the heap that string literals are allocated into and the
/// output sink that built-ins print to. Values returned by evaluation may
/// refer to heap objects, so they are only meaningful together with the
/// context that produced them.
///
/// ## Usage
///
/// `Context::new()` prints to standard output. Use
/// [`Context::with_output`] to capture output instead:
///
/// ```
/// use plume::interpreter::{evaluator::core::Context, value::core::Value};
///
/// let mut context = Context::with_output(Vec::new());
/// let value = context.evaluate_source("$print_str('hi') $print_i64(42)").unwrap();
///
/// assert_eq!(value, Value::True);
/// assert_eq!(context.output(), b"hi42");
/// ```
pub struct Context<W: Write = Stdout> {
    /// Storage for string and array objects.
    pub heap: Heap,
    out:      W,
}

impl Context {
    /// Creates a new evaluation context printing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Context<W> {
    /// Creates a new evaluation context printing to `out`.
    pub fn with_output(out: W) -> Self {
        Self { heap: Heap::new(),
               out }
    }

    /// The output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    pub(crate) fn heap_and_output(&mut self) -> (&Heap, &mut dyn Write) {
        (&self.heap, &mut self.out)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant:
    ///
    /// - constants evaluate to themselves;
    /// - a string literal evaluates to its own heap object;
    /// - binary operations evaluate both operands, left first, then dispatch
    ///   on the operator;
    /// - `if` evaluates its test and exactly one branch;
    /// - calls invoke a built-in;
    /// - `fun` evaluates to a value pointing back at the expression.
    ///
    /// # Errors
    /// Evaluation failures for unsupported shapes (bare identifiers, array
    /// literals, calls of anything but a built-in name) and runtime faults
    /// raised by operators and built-ins.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Const { value, .. } => Ok(value.clone()),
            Expr::Str { object, .. } => Ok(Value::String(*object)),
            Expr::Ident { name, pos } => {
                Err(RuntimeError::UnboundIdentifier { name: name.clone(),
                                                      pos:  *pos, })
            },
            Expr::Array { pos, .. } => Err(RuntimeError::Unsupported { construct: "Array literal",
                                                                       pos:       *pos, }),
            Expr::BinOp { left, op, right, pos } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(*op, &left, &right, *pos)
            },
            Expr::If { test,
                       then_branch,
                       else_branch,
                       .. } => self.eval_if(test, then_branch, else_branch.as_deref()),
            Expr::Call { callee,
                         arguments,
                         pos, } => self.eval_call(callee, arguments, *pos),
            Expr::Fun { def, .. } => Ok(Value::Fun(Rc::clone(def))),
        }
    }

    /// Evaluates a conditional expression.
    ///
    /// Only the selected branch is evaluated. A falsy test with no `else`
    /// yields [`Value::Void`].
    fn eval_if(&mut self,
               test: &Expr,
               then_branch: &Expr,
               else_branch: Option<&Expr>)
               -> EvalResult<Value> {
        let test = self.eval(test)?;

        if self.eval_truth(&test) {
            return self.eval(then_branch);
        }

        match else_branch {
            Some(else_branch) => self.eval(else_branch),
            None => Ok(Value::Void),
        }
    }

    /// Parses and evaluates every top-level expression in `source`, in order,
    /// and returns the value of the last one.
    ///
    /// Each expression is evaluated as soon as it is parsed, so side effects
    /// of earlier expressions happen even if a later one fails to parse.
    /// Consecutive expressions must be separated by whitespace.
    ///
    /// # Errors
    /// The first parse or evaluation error.
    ///
    /// # Example
    /// ```
    /// use plume::{
    ///     error::{Error, ParseError},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    ///
    /// assert_eq!(context.evaluate_source("1 2 3").unwrap(), Value::Int64(3));
    ///
    /// let err = context.evaluate_source("1 )").unwrap_err();
    /// assert!(matches!(err, Error::Parse(ParseError::NoMatch { .. })));
    /// ```
    pub fn evaluate_source(&mut self, source: &str) -> Result<Value, Error> {
        let mut input = Cursor::new(source);

        loop {
            let expr = parse_top_level(&mut input, &mut self.heap)?;
            debug!(offset = expr.pos().offset, "evaluating top-level expression");

            let value = self.eval(&expr)?;

            if end_of_top_level(&mut input)? {
                return Ok(value);
            }
        }
    }
}
