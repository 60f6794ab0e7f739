use logos::Logos;

use crate::util::num::accumulate_digits;

/// Errors reported while scanning a single token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// The input does not start with any known token.
    #[default]
    Unrecognized,
    /// An integer literal does not fit in an `i64`.
    IntegerTooLarge,
}

/// Represents a lexical token in the source input.
///
/// The parser works directly on characters and asks the lexer for one token
/// at a time, at the cursor position, when it needs an integer literal or an
/// operator symbol. Identifiers, keywords and strings are read by the parser
/// itself.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Integer literal tokens, such as `42`, `0xFF` or `0b101`.
    #[regex(r"0[xX][0-9a-fA-F]+", parse_hex)]
    #[regex(r"0[bB][01]+", parse_binary)]
    #[regex(r"[0-9]+", parse_decimal)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
}

/// Parses a `0x`-prefixed hexadecimal literal from the current token slice.
fn parse_hex(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    accumulate_digits(&lex.slice()[2..], 16).ok_or(LexError::IntegerTooLarge)
}

/// Parses a `0b`-prefixed binary literal from the current token slice.
fn parse_binary(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    accumulate_digits(&lex.slice()[2..], 2).ok_or(LexError::IntegerTooLarge)
}

/// Parses a decimal literal from the current token slice.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    accumulate_digits(lex.slice(), 10).ok_or(LexError::IntegerTooLarge)
}
