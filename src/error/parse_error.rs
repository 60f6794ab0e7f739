use crate::interpreter::cursor::SourcePos;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// No production matched at this position.
    NoMatch {
        /// Where parsing stopped.
        pos: SourcePos,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// Position of the opening quote.
        pos: SourcePos,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// Position of the literal.
        pos: SourcePos,
    },
    /// A keyword or operator was parsed, but what must follow it was not
    /// found.
    Expected {
        /// What was expected, e.g. `"'then'"`.
        expected: &'static str,
        /// Where it was expected.
        pos:      SourcePos,
    },
}

impl ParseError {
    /// Position the error refers to.
    #[must_use]
    pub const fn pos(&self) -> SourcePos {
        match self {
            Self::NoMatch { pos }
            | Self::UnterminatedString { pos }
            | Self::LiteralTooLarge { pos }
            | Self::Expected { pos, .. } => *pos,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch { pos } => write!(f, "failed to parse expression, at {pos}"),
            Self::UnterminatedString { pos } => {
                write!(f, "failed to parse expression, at {pos}: unterminated string literal")
            },
            Self::LiteralTooLarge { pos } => {
                write!(f, "failed to parse expression, at {pos}: integer literal is too large")
            },
            Self::Expected { expected, pos } => {
                write!(f, "failed to parse expression, at {pos}: expected {expected}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
