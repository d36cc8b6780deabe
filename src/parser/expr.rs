use crate::{
    ast::expressions::{BinaryExpr, Expr, IntLiteralExpr, NameExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// The token kinds that can start a factor.
fn factor_starters() -> Vec<TokenKind> {
    vec![
        TokenKind::Integer,
        TokenKind::Identifier,
        TokenKind::LeftParenthesis,
    ]
}

pub fn parse_expr<'src>(
    parser: &mut Parser<'src>,
    bp: BindingPower,
) -> Result<Expr<'src>, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: factor_starters(),
                found: token_kind,
            },
            parser.get_position(),
        ));
    }

    let nud = *parser.get_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue
    // folding into lhs. Equal binding power stops the loop, which makes
    // same-precedence operators group to the left.
    loop {
        let token_kind = parser.current_token_kind();
        let operator_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        if operator_bp <= bp {
            break;
        }

        if !parser.get_led_lookup().contains_key(&token_kind) {
            // A factor directly after an expression, e.g. `1 2`
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: vec![
                        TokenKind::Add,
                        TokenKind::Subtract,
                        TokenKind::Multiply,
                        TokenKind::Divide,
                    ],
                    found: token_kind,
                },
                parser.get_position(),
            ));
        }

        let led = *parser.get_led_lookup().get(&token_kind).unwrap();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr<'src>(parser: &mut Parser<'src>) -> Result<Expr<'src>, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let token = parser.advance().clone();

            match token.text.parse::<i32>() {
                Ok(value) => Ok(Expr::IntLiteral(IntLiteralExpr {
                    value,
                    span: token.span,
                })),
                Err(_) => Err(Error::new(
                    ErrorImpl::IntegerParseError {
                        literal: token.text.to_string(),
                    },
                    token.span.start.clone(),
                )),
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();

            Ok(Expr::Name(NameExpr {
                span: token.span.clone(),
                identifier: token,
            }))
        }
        found => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: factor_starters(),
                found,
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr<'src>(
    parser: &mut Parser<'src>,
    left: Expr<'src>,
    bp: BindingPower,
) -> Result<Expr<'src>, Error> {
    let operator = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr<'src>(parser: &mut Parser<'src>) -> Result<Expr<'src>, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RightParenthesis)?;

    Ok(expr)
}
