use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::core::{ParseResult, expect_expression},
        value::heap::Heap,
    },
};

/// Runs a trial production on a copy of the cursor.
///
/// The copy is written back only when the production matched, so a failed
/// attempt leaves `input` exactly where it was. Hard errors are propagated
/// unchanged.
///
/// # Parameters
/// - `input`: The caller's cursor.
/// - `production`: The production to try.
///
/// # Returns
/// Whatever the production returned.
pub(in crate::interpreter::parser) fn attempt<'src, T>(
    input: &mut Cursor<'src>,
    production: impl FnOnce(&mut Cursor<'src>) -> ParseResult<Option<T>>)
    -> ParseResult<Option<T>> {
    let mut trial = *input;
    let result = production(&mut trial)?;
    if result.is_some() {
        *input = trial;
    }
    Ok(result)
}

/// Reads an identifier: one or more characters from `[A-Za-z0-9$_]`, not
/// starting with a digit.
///
/// On failure nothing is consumed.
pub(in crate::interpreter::parser) fn parse_identifier<'src>(input: &mut Cursor<'src>)
                                                             -> Option<&'src str> {
    if input.peek().is_ascii_digit() {
        return None;
    }

    let start = input.offset();
    while is_identifier_char(input.peek()) {
        input.advance();
    }

    if input.offset() == start {
        return None;
    }
    Some(input.slice_from(start))
}

const fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '$' || ch == '_'
}

/// Consumes the keyword `word` (after optional whitespace) if it comes next.
///
/// A longer identifier that merely starts with `word` does not match.
pub(in crate::interpreter::parser) fn eat_keyword(input: &mut Cursor<'_>, word: &str) -> bool {
    let mut trial = *input;
    trial.skip_whitespace();
    if parse_identifier(&mut trial) == Some(word) {
        *input = trial;
        return true;
    }
    false
}

/// Consumes `closing` (after optional whitespace) or fails with
/// `ParseError::Expected`.
pub(in crate::interpreter::parser) fn expect_char(input: &mut Cursor<'_>,
                                                  closing: char,
                                                  expected: &'static str)
                                                  -> ParseResult<()> {
    input.skip_whitespace();
    if input.eat(closing) {
        return Ok(());
    }
    Err(ParseError::Expected { expected,
                               pos: input.pos() })
}

/// Parses a whitespace- or comma-separated list of expressions up to
/// `closing`.
///
/// This utility is shared by call argument lists and array literals. The
/// opening delimiter must already be consumed. An immediately encountered
/// closing delimiter produces an empty list; a trailing comma is accepted.
///
/// Grammar (simplified): `list := (expression ","?)* closing`
///
/// # Errors
/// Returns `ParseError::Expected` if an item fails to parse or the input ends
/// before the closing delimiter.
pub(in crate::interpreter::parser) fn parse_separated(input: &mut Cursor<'_>,
                                                      heap: &mut Heap,
                                                      closing: char)
                                                      -> ParseResult<Vec<Expr>> {
    let expected = match closing {
        ')' => "an argument or ')'",
        ']' => "an element or ']'",
        _ => "a closing delimiter",
    };

    let mut items = Vec::new();
    loop {
        input.skip_whitespace();
        if input.eat(closing) {
            return Ok(items);
        }

        items.push(expect_expression(input, heap, expected)?);

        input.skip_whitespace();
        input.eat(',');
    }
}
