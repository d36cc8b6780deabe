//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens into
//! a `Program` tree. It uses a Pratt parser for expressions with NUD (null
//! denotation) and LED (left denotation) handlers and binding powers for
//! precedence handling, and handles:
//!
//! - Assignment statement parsing with one token of lookahead
//! - Expression parsing (binary ops, names, integer literals, grouping)
//! - Error reporting with the set of acceptable token kinds
//!
//! The first error aborts the parse; no partial tree is returned.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
