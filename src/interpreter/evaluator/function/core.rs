use std::io::Write;

use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        cursor::SourcePos,
        evaluator::{
            core::{Context, EvalResult},
            function::print,
        },
        value::{
            core::{Tag, Value},
            heap::Heap,
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments, the heap they point into, the
/// output sink and the position of the call.
type BuiltinFn = fn(&[Value], &Heap, &mut dyn Write, SourcePos) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the number of arguments it takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every built-in, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "$print_i64" => { arity: 1, func: print::print_i64 },
    "$print_str" => { arity: 1, func: print::print_str },
}

/// Looks up a builtin by name.
fn find_builtin(name: &str, pos: SourcePos) -> EvalResult<&'static BuiltinDef> {
    BUILTIN_TABLE.iter()
                 .find(|b| b.name == name)
                 .ok_or_else(|| RuntimeError::UnknownBuiltin { name: name.to_string(),
                                                               pos })
}

impl<W: Write> Context<W> {
    /// Evaluates a call expression.
    ///
    /// The callee must be an identifier, or a string literal, naming a
    /// builtin. The name and the argument count are checked before any
    /// argument is evaluated; the arguments are then evaluated left to right
    /// and handed to the builtin.
    ///
    /// # Errors
    /// - `UnsupportedCall` if the callee is not a name.
    /// - `UnknownBuiltin` if no builtin has that name.
    /// - `ArgumentCountMismatch` if the argument count is wrong.
    /// - Any error raised by the arguments or the builtin itself.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            pos: SourcePos)
                            -> EvalResult<Value> {
        let builtin = match callee {
            Expr::Ident { name, .. } => find_builtin(name, pos)?,
            Expr::Str { object, .. } => {
                let bytes = self.heap.string_bytes(*object).unwrap_or_default();
                find_builtin(&String::from_utf8_lossy(bytes), pos)?
            },
            Expr::Const { value, .. } => {
                return Err(RuntimeError::UnsupportedCall { callee: Some(value.tag()),
                                                           pos });
            },
            Expr::Fun { .. } => {
                return Err(RuntimeError::UnsupportedCall { callee: Some(Tag::Fun),
                                                           pos });
            },
            _ => return Err(RuntimeError::UnsupportedCall { callee: None, pos }),
        };

        if arguments.len() != builtin.arity {
            return Err(RuntimeError::ArgumentCountMismatch { expected: builtin.arity,
                                                             found: arguments.len(),
                                                             pos });
        }

        let args = arguments.iter()
                            .map(|arg| self.eval(arg))
                            .collect::<EvalResult<Vec<_>>>()?;

        debug!(builtin = builtin.name, "calling builtin");
        let (heap, out) = self.heap_and_output();
        (builtin.func)(&args, heap, out, pos)
    }
}
