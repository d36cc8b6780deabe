use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref PUNCTUATION_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(";", TokenKind::Semicolon);
        map.insert("=", TokenKind::Assignment);
        map.insert("(", TokenKind::LeftParenthesis);
        map.insert(")", TokenKind::RightParenthesis);
        map.insert("+", TokenKind::Add);
        map.insert("-", TokenKind::Subtract);
        map.insert("*", TokenKind::Multiply);
        map.insert("/", TokenKind::Divide);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    Identifier,
    Whitespace,

    Semicolon,
    Assignment,

    LeftParenthesis,
    RightParenthesis,

    Add,
    Subtract,
    Multiply,
    Divide,
}

impl TokenKind {
    /// The four arithmetic operator kinds accepted by a binary expression.
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Add | TokenKind::Subtract | TokenKind::Multiply | TokenKind::Divide
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexeme tagged with its kind and source span.
///
/// `text` borrows directly from the source buffer, so the buffer must
/// outlive every token and every tree built from them.
#[derive(Debug, Clone)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, text: {:?} }}", self.kind, self.text)
    }
}

impl<'src> Token<'src> {
    /// Byte offset of the first character of the lexeme.
    pub fn start(&self) -> u32 {
        self.span.start.0
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
