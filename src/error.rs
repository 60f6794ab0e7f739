/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into
/// expressions: no production matching, unterminated strings, oversized
/// literals and missing pieces after a committed keyword or operator.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. They are
/// split into evaluation failures (unsupported shapes of expression) and
/// runtime faults (division by zero, overflow, bad indices, type mismatches).
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{ErrorKind, RuntimeError};

#[derive(Debug)]
/// Any error raised while evaluating source text.
pub enum Error {
    /// The source could not be parsed.
    Parse(ParseError),
    /// A parsed expression could not be evaluated.
    Runtime(RuntimeError),
    /// Writing the final result failed.
    Io(std::io::Error),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}
