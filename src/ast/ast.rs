use crate::Span;

use super::{expressions::Expr, statements::Statements};

/// The root of a parsed program.
///
/// A program is a sequence of assignment statements followed by one trailing
/// expression whose value is the program's result. An evaluator walks
/// `statements` in order, binding each assignment's identifier, then
/// evaluates `eval` against those bindings.
#[derive(Debug, Clone)]
pub struct Program<'src> {
    pub statements: Statements<'src>,
    pub eval: Expr<'src>,
    pub span: Span,
}

impl<'src> Program<'src> {
    pub fn get_span(&self) -> &Span {
        &self.span
    }
}
