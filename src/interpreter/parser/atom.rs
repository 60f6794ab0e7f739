use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::{Expr, FunDef},
    error::ParseError,
    interpreter::{
        cursor::{Cursor, SourcePos},
        lexer::{LexError, Token},
        parser::{
            core::{ParseResult, expect_expression, parse_if},
            utils::{attempt, expect_char, parse_identifier, parse_separated},
        },
        value::{core::Value, heap::Heap},
    },
};

/// Parses an atomic expression.
///
/// Leading whitespace is skipped, then the alternatives are tried in order,
/// first match wins:
///
/// ```text
///     atom := identifier          (keywords dispatched here)
///           | integer
///           | string
///           | "(" expression ")"
///           | "[" elements "]"
/// ```
///
/// Each alternative runs on a copy of the cursor, so an alternative that
/// fails part way through (an identifier that turns out to start with a
/// digit, for instance) leaves the cursor untouched for the next one.
///
/// # Returns
/// - `Ok(Some(expr))` with the cursor past the atom.
/// - `Ok(None)` if nothing matched; the cursor has not moved, not even past
///   whitespace.
///
/// # Errors
/// Malformed literals and committed productions that cannot be completed.
///
/// # Example
/// ```
/// use plume::{
///     ast::Expr,
///     interpreter::{cursor::Cursor, parser::atom::parse_atom, value::heap::Heap},
/// };
///
/// let mut heap = Heap::new();
/// let mut input = Cursor::new("  0xFF rest");
///
/// let atom = parse_atom(&mut input, &mut heap).unwrap().unwrap();
/// assert!(matches!(atom, Expr::Const { .. }));
/// assert_eq!(input.offset(), 6);
///
/// let mut input = Cursor::new("  )");
/// assert!(parse_atom(&mut input, &mut heap).unwrap().is_none());
/// assert_eq!(input.offset(), 0);
/// ```
pub fn parse_atom(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    attempt(input, |sub| {
        sub.skip_whitespace();
        trace!(offset = sub.offset(), "parse_atom");

        if let Some(expr) = attempt(sub, |s| parse_word(s, heap))? {
            return Ok(Some(expr));
        }
        if let Some(expr) = attempt(sub, parse_integer)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = attempt(sub, |s| parse_string(s, heap))? {
            return Ok(Some(expr));
        }
        if let Some(expr) = attempt(sub, |s| parse_grouping(s, heap))? {
            return Ok(Some(expr));
        }
        attempt(sub, |s| parse_array_literal(s, heap))
    })
}

/// Parses an identifier and dispatches keywords.
///
/// `true` and `false` become boolean constants, `if` and `fun` start their
/// productions, `then` and `else` are reserved and never match. Anything
/// else is an [`Expr::Ident`].
fn parse_word(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    let pos = input.pos();
    let Some(word) = parse_identifier(input) else {
        return Ok(None);
    };

    match word {
        "true" => Ok(Some(Expr::Const { value: Value::True,
                                        pos })),
        "false" => Ok(Some(Expr::Const { value: Value::False,
                                         pos })),
        "if" => parse_if(input, heap, pos).map(Some),
        "fun" => parse_fun(input, heap, pos).map(Some),
        "then" | "else" => Ok(None),
        name => Ok(Some(Expr::Ident { name: name.to_string(),
                                      pos })),
    }
}

/// Parses an integer literal: decimal, `0x` hexadecimal or `0b` binary.
///
/// # Errors
/// `ParseError::LiteralTooLarge` if the literal does not fit in an `i64`.
fn parse_integer(input: &mut Cursor<'_>) -> ParseResult<Option<Expr>> {
    let pos = input.pos();
    match input.scan() {
        Some((Ok(Token::Integer(n)), len)) => {
            input.advance_by(len);
            Ok(Some(Expr::Const { value: Value::Int64(n),
                                  pos }))
        },
        Some((Err(LexError::IntegerTooLarge), _)) => Err(ParseError::LiteralTooLarge { pos }),
        _ => Ok(None),
    }
}

/// Parses a single-quoted string literal.
///
/// Characters between the quotes are taken verbatim; there are no escape
/// sequences. The string object is allocated on `heap` once the closing
/// quote is found.
///
/// # Errors
/// `ParseError::UnterminatedString` if the input ends before the closing
/// quote.
fn parse_string(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    let pos = input.pos();
    if !input.eat('\'') {
        return Ok(None);
    }

    let start = input.offset();
    loop {
        if input.at_end() {
            return Err(ParseError::UnterminatedString { pos });
        }
        if input.peek() == '\'' {
            break;
        }
        input.advance();
    }

    let object = heap.alloc_string(input.slice_from(start).as_bytes());
    input.advance();

    Ok(Some(Expr::Str { object, pos }))
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    if !input.eat('(') {
        return Ok(None);
    }

    let expr = expect_expression(input, heap, "an expression after '('")?;
    expect_char(input, ')', "')'")?;

    Ok(Some(expr))
}

/// Parses an array literal.
///
/// Grammar: `array := "[" (expression ","?)* "]"`
fn parse_array_literal(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    let pos = input.pos();
    if !input.eat('[') {
        return Ok(None);
    }

    let elements = parse_separated(input, heap, ']')?;

    Ok(Some(Expr::Array { elements, pos }))
}

/// Parses the rest of a function expression once `fun` has been read.
///
/// Grammar: `fun := "fun" "(" (identifier ","?)* ")" expression`
///
/// # Errors
/// `ParseError::Expected` if the parameter list or the body is missing.
fn parse_fun(input: &mut Cursor<'_>, heap: &mut Heap, pos: SourcePos) -> ParseResult<Expr> {
    expect_char(input, '(', "'(' after 'fun'")?;

    let mut params = Vec::new();
    loop {
        input.skip_whitespace();
        if input.eat(')') {
            break;
        }

        let Some(name) = parse_identifier(input) else {
            return Err(ParseError::Expected { expected: "a parameter name or ')'",
                                              pos:      input.pos(), });
        };
        params.push(name.to_string());

        input.skip_whitespace();
        input.eat(',');
    }

    let body = expect_expression(input, heap, "a function body")?;

    Ok(Expr::Fun { def: Rc::new(FunDef { params, body }),
                   pos })
}
