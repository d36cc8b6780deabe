use std::slice::{Iter, IterMut};

use crate::{lexer::tokens::Token, Span};

use super::expressions::Expr;

/// The statement variants of the tree.
///
/// Assignment is currently the only concrete statement; the enum is the
/// extension point for future statement kinds.
#[derive(Debug, Clone)]
pub enum Stmt<'src> {
    Assignment(AssignmentStmt<'src>),
}

impl<'src> Stmt<'src> {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Assignment(stmt) => &stmt.span,
        }
    }
}

/// Assignment Statement
/// Binds the identifier's lexeme to the value of `expression`.
#[derive(Debug, Clone)]
pub struct AssignmentStmt<'src> {
    pub identifier: Token<'src>,
    pub expression: Expr<'src>,
    pub span: Span,
}

/// An ordered sequence of statements. Order is semantically significant:
/// later assignments may reference earlier ones.
#[derive(Debug, Clone)]
pub struct Statements<'src> {
    pub body: Vec<Stmt<'src>>,
    pub span: Span,
}

impl<'src> Statements<'src> {
    pub fn iter(&self) -> Iter<'_, Stmt<'src>> {
        self.body.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, Stmt<'src>> {
        self.body.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
