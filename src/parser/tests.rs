//! Unit tests for the parser module.
//!
//! This module contains tests for parsing including:
//!
//! - Assignment statements and the trailing expression
//! - Operator precedence and associativity tree shapes
//! - Parenthesized grouping
//! - Error cases

use std::rc::Rc;

use crate::ast::ast::Program;
use crate::ast::expressions::{BinaryExpr, Expr};
use crate::ast::statements::Stmt;
use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::TokenKind;

use super::parser::parse;

fn parse_source(source: &str) -> Result<Program<'_>, Error> {
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();
    parse(tokens, Rc::new("test.lang".to_string()))
}

fn as_binary<'a, 'src>(expr: &'a Expr<'src>) -> &'a BinaryExpr<'src> {
    match expr {
        Expr::Binary(binary) => binary,
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

fn assert_int(expr: &Expr, expected: i32) {
    match expr {
        Expr::IntLiteral(literal) => assert_eq!(literal.value, expected),
        other => panic!("expected integer literal {}, got {:?}", expected, other),
    }
}

fn assert_name(expr: &Expr, expected: &str) {
    match expr {
        Expr::Name(name) => assert_eq!(name.identifier.text, expected),
        other => panic!("expected name `{}`, got {:?}", expected, other),
    }
}

#[test]
fn test_parse_single_expression_program() {
    let program = parse_source("42").unwrap();

    assert!(program.statements.is_empty());
    assert_int(&program.eval, 42);
}

#[test]
fn test_parse_assignment_statement() {
    let program = parse_source("x = 42; x").unwrap();

    assert_eq!(program.statements.len(), 1);
    let Stmt::Assignment(assignment) = &program.statements.body[0];
    assert_eq!(assignment.identifier.text, "x");
    assert_int(&assignment.expression, 42);
    assert_name(&program.eval, "x");
}

#[test]
fn test_parse_assignment_ordering() {
    let program = parse_source("x = 1; y = x + 1; y").unwrap();

    assert_eq!(program.statements.len(), 2);

    let Stmt::Assignment(first) = &program.statements.body[0];
    assert_eq!(first.identifier.text, "x");
    assert_int(&first.expression, 1);

    let Stmt::Assignment(second) = &program.statements.body[1];
    assert_eq!(second.identifier.text, "y");
    let sum = as_binary(&second.expression);
    assert_eq!(sum.operator.kind, TokenKind::Add);
    assert_name(&sum.left, "x");
    assert_int(&sum.right, 1);

    assert_name(&program.eval, "y");
}

#[test]
fn test_parse_precedence() {
    // 1 + 2 * 3 groups as 1 + (2 * 3)
    let program = parse_source("1 + 2 * 3").unwrap();

    let add = as_binary(&program.eval);
    assert_eq!(add.operator.kind, TokenKind::Add);
    assert_int(&add.left, 1);

    let multiply = as_binary(&add.right);
    assert_eq!(multiply.operator.kind, TokenKind::Multiply);
    assert_int(&multiply.left, 2);
    assert_int(&multiply.right, 3);
}

#[test]
fn test_parse_left_associativity() {
    // 10 - 2 - 3 groups as (10 - 2) - 3
    let program = parse_source("10 - 2 - 3").unwrap();

    let outer = as_binary(&program.eval);
    assert_eq!(outer.operator.kind, TokenKind::Subtract);
    assert_int(&outer.right, 3);

    let inner = as_binary(&outer.left);
    assert_eq!(inner.operator.kind, TokenKind::Subtract);
    assert_int(&inner.left, 10);
    assert_int(&inner.right, 2);
}

#[test]
fn test_parse_division_left_associativity() {
    // 100 / 5 / 2 groups as (100 / 5) / 2
    let program = parse_source("100 / 5 / 2").unwrap();

    let outer = as_binary(&program.eval);
    assert_eq!(outer.operator.kind, TokenKind::Divide);
    assert_int(&outer.right, 2);

    let inner = as_binary(&outer.left);
    assert_eq!(inner.operator.kind, TokenKind::Divide);
    assert_int(&inner.left, 100);
    assert_int(&inner.right, 5);
}

#[test]
fn test_parse_parenthesized_expression() {
    // (1 + 2) * 3 keeps the addition as the left operand
    let program = parse_source("(1 + 2) * 3").unwrap();

    let multiply = as_binary(&program.eval);
    assert_eq!(multiply.operator.kind, TokenKind::Multiply);
    assert_int(&multiply.right, 3);

    let add = as_binary(&multiply.left);
    assert_eq!(add.operator.kind, TokenKind::Add);
    assert_int(&add.left, 1);
    assert_int(&add.right, 2);
}

#[test]
fn test_parse_nested_parentheses() {
    let program = parse_source("((1))").unwrap();
    assert_int(&program.eval, 1);
}

#[test]
fn test_parse_mixed_operators() {
    // a * 2 + b / 4 groups as (a * 2) + (b / 4)
    let program = parse_source("a = 1; b = 2; a * 2 + b / 4").unwrap();

    let add = as_binary(&program.eval);
    assert_eq!(add.operator.kind, TokenKind::Add);

    let multiply = as_binary(&add.left);
    assert_eq!(multiply.operator.kind, TokenKind::Multiply);
    assert_name(&multiply.left, "a");

    let divide = as_binary(&add.right);
    assert_eq!(divide.operator.kind, TokenKind::Divide);
    assert_name(&divide.left, "b");
}

#[test]
fn test_parse_statement_count_matches_clauses() {
    let program = parse_source("a = 1; b = 2; c = 3; a + b + c").unwrap();
    assert_eq!(program.statements.len(), 3);
}

#[test]
fn test_parse_missing_expression_after_assignment() {
    // `x = ;` must point at the semicolon and list the factor starters
    let error = parse_source("x = ;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 4);

    match error.get_internal_error() {
        ErrorImpl::UnexpectedToken { expected, found } => {
            assert_eq!(*found, TokenKind::Semicolon);
            assert!(expected.contains(&TokenKind::Integer));
            assert!(expected.contains(&TokenKind::Identifier));
            assert!(expected.contains(&TokenKind::LeftParenthesis));
        }
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_parse_missing_semicolon() {
    let error = parse_source("x = 1 y = 2; y").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    match error.get_internal_error() {
        ErrorImpl::UnexpectedToken { found, .. } => {
            assert_eq!(*found, TokenKind::Identifier)
        }
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_parse_missing_trailing_expression() {
    let error = parse_source("x = 1;").unwrap_err();

    match error.get_internal_error() {
        ErrorImpl::UnexpectedToken { found, .. } => assert_eq!(*found, TokenKind::EOF),
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_source() {
    let error = parse_source("").unwrap_err();

    match error.get_internal_error() {
        ErrorImpl::UnexpectedToken { found, .. } => assert_eq!(*found, TokenKind::EOF),
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_parse_trailing_input_after_expression() {
    let error = parse_source("1 + 2 3").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_parse_unclosed_parenthesis() {
    let error = parse_source("(1 + 2").unwrap_err();

    match error.get_internal_error() {
        ErrorImpl::UnexpectedToken { expected, found } => {
            assert_eq!(expected, &vec![TokenKind::RightParenthesis]);
            assert_eq!(*found, TokenKind::EOF);
        }
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_parse_integer_literal_overflow() {
    let error = parse_source("99999999999999999999").unwrap_err();

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_parse_spans() {
    let program = parse_source("x = 1; x + 2").unwrap();

    let Stmt::Assignment(assignment) = &program.statements.body[0];
    assert_eq!(assignment.span.start.0, 0);
    assert_eq!(assignment.span.end.0, 6);

    let add = as_binary(&program.eval);
    assert_eq!(add.span.start.0, 7);
    assert_eq!(add.span.end.0, 12);
}
