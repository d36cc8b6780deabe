use crate::{lexer::tokens::Token, Span};

/// The expression variants of the tree.
///
/// Precedence is encoded purely in tree shape; a `Binary` node carries no
/// precedence information of its own, so the parser must group operands
/// correctly when it builds the tree.
#[derive(Debug, Clone)]
pub enum Expr<'src> {
    Name(NameExpr<'src>),
    Binary(BinaryExpr<'src>),
    IntLiteral(IntLiteralExpr),
}

impl<'src> Expr<'src> {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Name(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::IntLiteral(expr) => &expr.span,
        }
    }
}

/// Name Expression
/// A reference to a previously bound identifier.
#[derive(Debug, Clone)]
pub struct NameExpr<'src> {
    pub identifier: Token<'src>,
    pub span: Span,
}

/// Binary Expression
/// An arithmetic operation between two sub-expressions. The operator token
/// is one of Add, Subtract, Multiply or Divide.
#[derive(Debug, Clone)]
pub struct BinaryExpr<'src> {
    pub left: Box<Expr<'src>>,
    pub operator: Token<'src>,
    pub right: Box<Expr<'src>>,
    pub span: Span,
}

/// Integer Literal Expression
#[derive(Debug, Clone)]
pub struct IntLiteralExpr {
    pub value: i32,
    pub span: Span,
}
