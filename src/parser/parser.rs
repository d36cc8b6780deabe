//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Expression parsing goes through NUD/LED handler lookups registered per
//! token kind; statement parsing is driven by one token of lookahead at the
//! top level.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{ast::Program, statements::Statements},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
    stmt::parse_assignment_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Holds the whitespace-filtered token stream, the current position in it
/// and the lookup tables for expression parsing.
pub struct Parser<'src> {
    /// The list of significant tokens to parse
    tokens: Vec<Token<'src>>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<'src>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<'src>,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'src> Parser<'src> {
    /// Creates a new Parser instance over the significant tokens.
    ///
    /// Whitespace tokens are filtered out here; the lexer emits them so the
    /// token stream covers every byte of the source, but the grammar never
    /// mentions them.
    pub fn new(tokens: Vec<Token<'src>>, file: Rc<String>) -> Self {
        let tokens = tokens
            .into_iter()
            .filter(|token| !token.is_whitespace())
            .collect();

        Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    ///
    /// The trailing EOF token is sticky: once the cursor reaches it, the
    /// current token stays EOF.
    pub fn current_token(&self) -> &Token<'src> {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token after the current one.
    pub fn next_token_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// One token of lookahead: an identifier immediately followed by `=`
    /// starts an assignment statement.
    pub fn at_assignment_statement(&self) -> bool {
        self.current_token_kind() == TokenKind::Identifier
            && self.next_token_kind() == TokenKind::Assignment
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token<'src> {
        self.pos += 1;
        &self.tokens[self.pos - 1]
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// Returns the consumed token on a match, otherwise an error carrying
    /// the expected kind, the kind actually found and the found token's
    /// offset.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token<'src>, Error> {
        let token = self.current_token();
        let kind = token.kind;
        if kind != expected_kind {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: vec![expected_kind],
                    found: kind,
                },
                token.span.start.clone(),
            ))
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<'src> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<'src> {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<'src>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<'src>) {
        self.binding_power_lookup
            .insert(kind, BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the byte offset of the current token as a Position.
    pub fn get_position(&self) -> Position {
        Position(self.current_token().start(), Rc::clone(&self.file))
    }
}

/// Parses a stream of tokens into a `Program` tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, parses assignment statements while the
/// lookahead says one starts, then the trailing expression, and finally
/// requires the stream to be exhausted.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse (whitespace still included)
/// * `file` - Reference-counted string naming the source, for diagnostics
pub fn parse<'src>(tokens: Vec<Token<'src>>, file: Rc<String>) -> Result<Program<'src>, Error> {
    let mut parser = Parser::new(tokens, Rc::clone(&file));
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.at_assignment_statement() {
        body.push(parse_assignment_stmt(&mut parser)?);
    }

    let statements = Statements {
        span: Span {
            start: Position(0, Rc::clone(&file)),
            end: parser.get_position(),
        },
        body,
    };

    let eval = parse_expr(&mut parser, BindingPower::Default)?;

    parser.expect(TokenKind::EOF)?;

    Ok(Program {
        statements,
        eval,
        span: Span {
            start: Position(0, Rc::clone(&file)),
            end: parser.get_position(),
        },
    })
}
