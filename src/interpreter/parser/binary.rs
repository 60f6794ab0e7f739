use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        lexer::Token,
        parser::{
            atom::parse_atom,
            core::{ParseResult, expect_expression},
            utils::{expect_char, parse_separated},
        },
        value::heap::Heap,
    },
};

/// Signature shared by every precedence level.
type Level = fn(&mut Cursor<'_>, &mut Heap) -> ParseResult<Option<Expr>>;

/// Parses comparison expressions.
///
/// The rule is: `comparison := additive (("<" | "<=" | ">" | ">=" | "==" |
/// "!=") additive)*`
pub fn parse_comparison(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    parse_left_assoc(input, heap, parse_additive, is_comparison_op)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    parse_left_assoc(input, heap, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := postfix (("*" | "/" | "%") postfix)*`
pub fn parse_multiplicative(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    parse_left_assoc(input, heap, parse_postfix, |op| {
        matches!(op,
                 BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Parses one left-associative precedence level.
///
/// After the left operand, whitespace is skipped and one token is scanned.
/// If it is an operator accepted by this level, the right operand becomes
/// mandatory; otherwise the cursor is left right after the left operand.
///
/// # Errors
/// `ParseError::Expected` if an operator is not followed by an operand.
fn parse_left_assoc(input: &mut Cursor<'_>,
                    heap: &mut Heap,
                    operand: Level,
                    accepts: fn(BinaryOperator) -> bool)
                    -> ParseResult<Option<Expr>> {
    let Some(mut left) = operand(input, heap)? else {
        return Ok(None);
    };

    loop {
        let mut sub = *input;
        sub.skip_whitespace();
        let pos = sub.pos();

        if let Some((Ok(token), len)) = sub.scan()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            trace!(offset = pos.offset, %op, "binary operator");
            sub.advance_by(len);

            let Some(right) = operand(&mut sub, heap)? else {
                let mut at = sub;
                at.skip_whitespace();
                return Err(ParseError::Expected { expected: "an operand after a binary operator",
                                                  pos:      at.pos(), });
            };

            left = Expr::BinOp { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 pos };
            *input = sub;
            continue;
        }
        break;
    }
    Ok(Some(left))
}

/// Parses postfix forms applied to an atom.
///
/// Handles two kinds of postfix constructs, which must follow the atom
/// with no whitespace in between:
///
/// 1. **Calls** `callee(arg1, arg2 ...)`
/// 2. **Indexing** `expr[index]`, which becomes a `BinaryOperator::Index`
///    node.
///
/// Both may be chained: `a[0][1]`, `f(x)(y)`.
fn parse_postfix(input: &mut Cursor<'_>, heap: &mut Heap) -> ParseResult<Option<Expr>> {
    let Some(mut node) = parse_atom(input, heap)? else {
        return Ok(None);
    };

    loop {
        let pos = input.pos();
        if input.eat('(') {
            let arguments = parse_separated(input, heap, ')')?;
            node = Expr::Call { callee: Box::new(node),
                                arguments,
                                pos };
            continue;
        }
        if input.eat('[') {
            let index = expect_expression(input, heap, "an index expression")?;
            expect_char(input, ']', "']' after the index")?;
            node = Expr::BinOp { left: Box::new(node),
                                 op: BinaryOperator::Index,
                                 right: Box::new(index),
                                 pos };
            continue;
        }
        break;
    }
    Ok(Some(node))
}

/// Maps an operator token to its binary operator.
///
/// # Example
/// ```
/// use plume::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::LessEqual), Some(BinaryOperator::Le));
/// assert_eq!(token_to_binary_operator(Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Lt),
        Token::LessEqual => Some(BinaryOperator::Le),
        Token::Greater => Some(BinaryOperator::Gt),
        Token::GreaterEqual => Some(BinaryOperator::Ge),
        Token::EqualEqual => Some(BinaryOperator::Eq),
        Token::BangEqual => Some(BinaryOperator::Ne),
        _ => None,
    }
}

/// Returns `true` when the operator is relational or equality.
///
/// # Example
/// ```
/// use plume::{ast::BinaryOperator, interpreter::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::Lt));
/// assert!(is_comparison_op(BinaryOperator::Ne));
/// assert!(!is_comparison_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Lt
             | BinaryOperator::Le
             | BinaryOperator::Gt
             | BinaryOperator::Ge
             | BinaryOperator::Eq
             | BinaryOperator::Ne)
}
