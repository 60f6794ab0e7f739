use logos::Logos;

use crate::interpreter::lexer::{LexError, Token};

/// Character returned by [`Cursor::peek`] and [`Cursor::advance`] once the
/// end of input has been reached.
pub const END_OF_INPUT: char = '\0';

/// A location in the source text.
///
/// `offset` is a byte offset into the source; `line` and `column` are both
/// 1-based and count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Default for SourcePos {
    fn default() -> Self {
        Self { offset: 0,
               line:   1,
               column: 1, }
    }
}

impl std::fmt::Display for SourcePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A position-tracked view over a source string.
///
/// The cursor borrows the source for its whole lifetime and only ever moves
/// forward. It is `Copy`, so backtracking is done by copying the cursor,
/// running a trial production on the copy and writing the copy back only if
/// the production matched.
///
/// ## Example
/// ```
/// use plume::interpreter::cursor::Cursor;
///
/// let mut input = Cursor::new("ab");
/// let snapshot = input;
///
/// assert_eq!(input.advance(), 'a');
/// assert_eq!(input.peek(), 'b');
/// assert_eq!(snapshot.peek(), 'a');
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'src> {
    source: &'src str,
    pos:    SourcePos,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               pos: SourcePos::default() }
    }

    /// Returns the character at the current offset without consuming it, or
    /// [`END_OF_INPUT`] once the source is exhausted.
    #[must_use]
    pub fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or(END_OF_INPUT)
    }

    /// Consumes and returns the current character.
    ///
    /// Past the end of input this is a no-op that returns [`END_OF_INPUT`].
    ///
    /// ## Example
    /// ```
    /// use plume::interpreter::cursor::{Cursor, END_OF_INPUT};
    ///
    /// let mut input = Cursor::new("é\n");
    ///
    /// assert_eq!(input.advance(), 'é');
    /// assert_eq!(input.offset(), 2);
    /// assert_eq!(input.pos().column, 2);
    ///
    /// input.advance();
    /// assert!(input.at_end());
    /// assert_eq!(input.pos().line, 2);
    /// assert_eq!(input.advance(), END_OF_INPUT);
    /// assert_eq!(input.offset(), 3);
    /// ```
    pub fn advance(&mut self) -> char {
        let Some(ch) = self.rest().chars().next() else {
            return END_OF_INPUT;
        };

        self.pos.offset += ch.len_utf8();
        if ch == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        ch
    }

    /// Reports whether the offset has reached the end of the source.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    /// Current byte offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos.offset
    }

    /// Current position, including line and column.
    #[must_use]
    pub const fn pos(&self) -> SourcePos {
        self.pos
    }

    /// The unconsumed remainder of the source.
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos.offset..]
    }

    /// The source text between `start` and the current offset.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos.offset]
    }

    /// Consumes whitespace up to the next significant character.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_whitespace() {
            self.advance();
        }
    }

    /// Consumes `expected` if it is the current character.
    pub fn eat(&mut self, expected: char) -> bool {
        if !self.at_end() && self.peek() == expected {
            self.advance();
            return true;
        }
        false
    }

    /// Scans one token at the current offset without consuming it.
    ///
    /// Returns the token (or the lexing error) together with the number of
    /// bytes it spans, or `None` at end of input.
    #[must_use]
    pub fn scan(&self) -> Option<(Result<Token, LexError>, usize)> {
        let mut lexer = Token::lexer(self.rest());
        let token = lexer.next()?;
        Some((token, lexer.span().end))
    }

    /// Consumes `len` bytes, keeping line and column in step.
    pub fn advance_by(&mut self, len: usize) {
        let end = (self.pos.offset + len).min(self.source.len());
        while self.pos.offset < end {
            self.advance();
        }
    }
}
