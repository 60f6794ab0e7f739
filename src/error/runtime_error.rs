use crate::interpreter::{cursor::SourcePos, value::core::Tag};

/// Broad classification of a [`RuntimeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The expression has a shape the evaluator does not support.
    EvalFailure,
    /// The expression is supported, but its operands are not valid for the
    /// operation (division by zero, overflow, bad index, wrong type).
    RuntimeFault,
}

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Called a built-in that does not exist.
    UnknownBuiltin {
        /// The name that was called.
        name: String,
        /// The source position where the error occurred.
        pos:  SourcePos,
    },
    /// The callee is not a plain name.
    UnsupportedCall {
        /// Tag of the callee, when it is a constant.
        callee: Option<Tag>,
        /// The source position where the error occurred.
        pos:    SourcePos,
    },
    /// The wrong number of arguments was supplied to a built-in.
    ArgumentCountMismatch {
        /// Number of arguments the built-in takes.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// The source position where the error occurred.
        pos:      SourcePos,
    },
    /// A name was used as a value; there are no variables.
    UnboundIdentifier {
        /// The identifier.
        name: String,
        /// The source position where the error occurred.
        pos:  SourcePos,
    },
    /// A construct that parses but cannot be evaluated yet.
    Unsupported {
        /// Name of the construct.
        construct: &'static str,
        /// The source position where the error occurred.
        pos:       SourcePos,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source position where the error occurred.
        pos:     SourcePos,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source position where the error occurred.
        pos: SourcePos,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source position where the error occurred.
        pos: SourcePos,
    },
    /// Tried to access an array element outside the allowed bounds.
    IndexOutOfBounds {
        /// Length of the array.
        len:   usize,
        /// The index that was actually requested.
        found: i64,
        /// The source position where the error occurred.
        pos:   SourcePos,
    },
    /// Writing the output of a built-in failed.
    Output {
        /// Details reported by the writer.
        details: String,
        /// The source position where the error occurred.
        pos:     SourcePos,
    },
}

impl RuntimeError {
    /// Classifies the error.
    ///
    /// ## Example
    /// ```
    /// use plume::{
    ///     error::{ErrorKind, RuntimeError},
    ///     interpreter::cursor::SourcePos,
    /// };
    ///
    /// let pos = SourcePos::default();
    ///
    /// assert_eq!(RuntimeError::DivisionByZero { pos }.kind(), ErrorKind::RuntimeFault);
    /// assert_eq!(RuntimeError::UnknownBuiltin { name: "$nope".into(), pos }.kind(),
    ///            ErrorKind::EvalFailure);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownBuiltin { .. }
            | Self::UnsupportedCall { .. }
            | Self::ArgumentCountMismatch { .. }
            | Self::UnboundIdentifier { .. }
            | Self::Unsupported { .. } => ErrorKind::EvalFailure,
            Self::TypeError { .. }
            | Self::DivisionByZero { .. }
            | Self::Overflow { .. }
            | Self::IndexOutOfBounds { .. }
            | Self::Output { .. } => ErrorKind::RuntimeFault,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBuiltin { name, pos } => {
                write!(f, "Error at {pos}: Unknown built-in '{name}'.")
            },
            Self::UnsupportedCall { callee: Some(tag), pos } => {
                write!(f, "Error at {pos}: A value of type {tag} cannot be called.")
            },
            Self::UnsupportedCall { callee: None, pos } => {
                write!(f, "Error at {pos}: Only built-ins can be called.")
            },
            Self::ArgumentCountMismatch { expected, found, pos } => write!(f,
                                                                           "Error at {pos}: Expected {expected} argument(s), found {found}."),
            Self::UnboundIdentifier { name, pos } => {
                write!(f, "Error at {pos}: Unbound identifier '{name}'.")
            },
            Self::Unsupported { construct, pos } => {
                write!(f, "Error at {pos}: {construct} is not supported yet.")
            },
            Self::TypeError { details, pos } => write!(f, "Error at {pos}: Type error: {details}."),
            Self::DivisionByZero { pos } => write!(f, "Error at {pos}: Division by zero."),
            Self::Overflow { pos } => write!(f,
                                             "Error at {pos}: Integer overflow while trying to compute result."),
            Self::IndexOutOfBounds { len, found, pos } => write!(f,
                                                                 "Error at {pos}: Index out of bounds. Length is {len}, but found {found} instead."),
            Self::Output { details, pos } => {
                write!(f, "Error at {pos}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
