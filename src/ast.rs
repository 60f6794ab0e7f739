use std::rc::Rc;

use crate::interpreter::{
    cursor::SourcePos,
    value::{core::Value, heap::ObjRef},
};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Nodes are built by the parser and never mutated afterwards. Every node
/// owns its children exclusively; the only shared piece is the body of a
/// `fun` expression, which is reference counted so that the function value
/// produced at runtime can point back at it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant value, such as an integer literal or `true`.
    Const {
        /// The constant value.
        value: Value,
        /// Position in the source code.
        pos:   SourcePos,
    },
    /// A string literal. The string object is allocated while parsing and
    /// the node evaluates to that very object.
    Str {
        /// The string object on the heap.
        object: ObjRef,
        /// Position in the source code.
        pos:    SourcePos,
    },
    /// A bare identifier, such as the name of a built-in.
    Ident {
        /// The identifier text.
        name: String,
        /// Position in the source code.
        pos:  SourcePos,
    },
    /// Array literal expression (e.g. `[1, 2]`).
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Position in the source code.
        pos:      SourcePos,
    },
    /// A binary operation.
    BinOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position of the operator in the source code.
        pos:   SourcePos,
    },
    /// Conditional expression: `if test then a else b`.
    If {
        /// The test expression.
        test:        Box<Self>,
        /// Expression evaluated if the test is truthy.
        then_branch: Box<Self>,
        /// Expression evaluated if the test is falsy.
        else_branch: Option<Box<Self>>,
        /// Position in the source code.
        pos:         SourcePos,
    },
    /// Call expression (e.g. `$print_i64(7)`).
    Call {
        /// The expression in callee position.
        callee:    Box<Self>,
        /// Argument expressions.
        arguments: Vec<Self>,
        /// Position in the source code.
        pos:       SourcePos,
    },
    /// Function expression: `fun (x, y) body`.
    Fun {
        /// Parameters and body.
        def: Rc<FunDef>,
        /// Position in the source code.
        pos: SourcePos,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    ///
    /// ## Example
    /// ```
    /// use plume::{ast::Expr, interpreter::cursor::SourcePos};
    ///
    /// let expr = Expr::Ident { name: "x".to_string(),
    ///                          pos:  SourcePos::default(), };
    ///
    /// assert_eq!(expr.pos().line, 1);
    /// ```
    #[must_use]
    pub const fn pos(&self) -> SourcePos {
        match self {
            Self::Const { pos, .. }
            | Self::Str { pos, .. }
            | Self::Ident { pos, .. }
            | Self::Array { pos, .. }
            | Self::BinOp { pos, .. }
            | Self::If { pos, .. }
            | Self::Call { pos, .. }
            | Self::Fun { pos, .. } => *pos,
        }
    }
}

/// The parameters and body of a `fun` expression.
#[derive(Debug, PartialEq)]
pub struct FunDef {
    /// The parameter names.
    pub params: Vec<String>,
    /// The body expression.
    pub body:   Expr,
}

/// Represents a binary operator.
///
/// Operators are compared by identity; the set is closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Array indexing (`a[i]`)
    Index,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Ge,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    Ne,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Index => "[]",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        };
        write!(f, "{operator}")
    }
}
