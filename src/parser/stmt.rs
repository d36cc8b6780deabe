use crate::{
    ast::statements::{AssignmentStmt, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Parses `Identifier '=' Expression ';'`.
///
/// Only called when the lookahead has already confirmed the identifier and
/// the `=`, so the interesting failures are in the right-hand side and the
/// terminating semicolon.
pub fn parse_assignment_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let expression = parse_expr(parser, BindingPower::Default)?;

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        span: Span {
            start: identifier.span.start.clone(),
            end: semicolon.span.end.clone(),
        },
        identifier,
        expression,
    }))
}
