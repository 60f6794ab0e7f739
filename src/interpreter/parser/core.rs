use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        cursor::{Cursor, SourcePos},
        parser::{
            binary::parse_comparison,
            utils::{attempt, eat_keyword},
        },
        value::heap::Heap,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, comparison, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Returns
/// `Ok(None)` with the cursor untouched if no expression starts here.
pub fn parse_expression(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    parse_comparison(input, heap)
}

/// Parses an expression that must be present.
///
/// # Errors
/// `ParseError::Expected` carrying `expected` and the position of the first
/// significant character, if no expression starts here.
pub(in crate::interpreter::parser) fn expect_expression(input: &mut Cursor<'_>,
                                                        heap: &mut Heap,
                                                        expected: &'static str)
                                                        -> ParseResult<Expr> {
    parse_expression(input, heap)?.ok_or_else(|| {
                                      let mut at = *input;
                                      at.skip_whitespace();
                                      ParseError::Expected { expected,
                                                             pos: at.pos() }
                                  })
}

/// Parses an `if` expression with an optional `else`.
///
/// Syntax:
/// ```text
///     if <test> then <then_expr>
///     if <test> then <then_expr> else <else_expr>
/// ```
///
/// # Parameters
/// - `input`: Cursor positioned after the `if` keyword.
/// - `pos`: Position of the `if` keyword.
///
/// # Returns
/// An `Expr::If` node representing the full conditional expression.
///
/// # Errors
/// - `Expected` if the test, `then`, or either branch is missing.
/// - Propagates any errors from sub-expression parsing.
pub(in crate::interpreter::parser) fn parse_if(input: &mut Cursor<'_>,
                                               heap: &mut Heap,
                                               pos: SourcePos)
                                               -> ParseResult<Expr> {
    let test = expect_expression(input, heap, "a test expression after 'if'")?;

    if !eat_keyword(input, "then") {
        let mut at = *input;
        at.skip_whitespace();
        return Err(ParseError::Expected { expected: "'then'",
                                          pos:      at.pos(), });
    }

    let then_branch = expect_expression(input, heap, "an expression after 'then'")?;

    let else_branch = attempt(input, |sub| {
                          if !eat_keyword(sub, "else") {
                              return Ok(None);
                          }
                          expect_expression(sub, heap, "an expression after 'else'").map(Some)
                      })?;

    Ok(Expr::If { test: Box::new(test),
                  then_branch: Box::new(then_branch),
                  else_branch: else_branch.map(Box::new),
                  pos })
}

/// Parses the next top-level expression.
///
/// # Errors
/// `ParseError::NoMatch` at the first significant character if no
/// expression starts there.
pub fn parse_top_level(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Expr> {
    parse_expression(input, heap)?.ok_or_else(|| {
                                      let mut at = *input;
                                      at.skip_whitespace();
                                      ParseError::NoMatch { pos: at.pos() }
                                  })
}

/// Parses a whole source text: one or more whitespace-separated
/// expressions. Two expressions written back to back, such as `7true`, are
/// rejected.
///
/// String literals are allocated on `heap`.
///
/// # Errors
/// The first `ParseError` encountered; empty input is `NoMatch` at offset 0.
///
/// # Example
/// ```
/// use plume::interpreter::{parser::core::parse_program, value::heap::Heap};
///
/// let mut heap = Heap::new();
///
/// let program = parse_program("1 + 2  'x'", &mut heap).unwrap();
/// assert_eq!(program.len(), 2);
///
/// let err = parse_program("1 )", &mut heap).unwrap_err();
/// assert_eq!(err.pos().offset, 2);
/// ```
pub fn parse_program(source: &str, heap: &mut Heap) -> ParseResult<Vec<Expr>> {
    let mut input = Cursor::new(source);
    let mut program = Vec::new();

    loop {
        program.push(parse_top_level(&mut input, heap)?);

        if end_of_top_level(&mut input)? {
            return Ok(program);
        }
    }
}

/// Consumes the whitespace after a top-level expression.
///
/// # Returns
/// `true` once the input is exhausted, `false` if another expression
/// follows.
///
/// # Errors
/// `ParseError::NoMatch` at the current position if another expression
/// starts right after the previous one, with no whitespace in between.
///
/// # Example
/// ```
/// use plume::interpreter::{cursor::Cursor, parser::core::end_of_top_level};
///
/// let mut input = Cursor::new("  ");
/// assert!(end_of_top_level(&mut input).unwrap());
///
/// let mut input = Cursor::new(" 2");
/// assert!(!end_of_top_level(&mut input).unwrap());
/// assert_eq!(input.offset(), 1);
///
/// let mut input = Cursor::new("2");
/// assert_eq!(end_of_top_level(&mut input).unwrap_err().pos().offset, 0);
/// ```
pub fn end_of_top_level(input: &mut Cursor<'_>) -> ParseResult<bool> {
    let start = input.offset();
    input.skip_whitespace();

    if input.at_end() {
        return Ok(true);
    }
    if input.offset() == start {
        return Err(ParseError::NoMatch { pos: input.pos() });
    }
    Ok(false)
}
