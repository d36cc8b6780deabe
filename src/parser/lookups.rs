use std::collections::HashMap;

use crate::{ast::expressions::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence levels, ordered weakest to tightest.
///
/// The LED loop only continues while the next operator binds tighter than
/// the current level, so operators at equal binding power group to the left.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Primary,
}

pub type NUDHandler<'src> = fn(&mut Parser<'src>) -> Result<Expr<'src>, Error>;
pub type LEDHandler<'src> =
    fn(&mut Parser<'src>, Expr<'src>, BindingPower) -> Result<Expr<'src>, Error>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Additive and multiplicative
    parser.led(TokenKind::Add, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Subtract, BindingPower::Additive, parse_binary_expr);
    parser.led(
        TokenKind::Multiply,
        BindingPower::Multiplicative,
        parse_binary_expr,
    );
    parser.led(
        TokenKind::Divide,
        BindingPower::Multiplicative,
        parse_binary_expr,
    );

    // Literals, names and grouping
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::LeftParenthesis, parse_grouping_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup<'src> = HashMap<TokenKind, NUDHandler<'src>>;
pub type LEDLookup<'src> = HashMap<TokenKind, LEDHandler<'src>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
