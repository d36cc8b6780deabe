//! Lexical analysis module for the frontend.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of identifiers, integer literals and punctuation
//! - Whitespace tokens, preserved for span bookkeeping and filtered later
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
