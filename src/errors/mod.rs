//! Error types and error handling for the frontend.
//!
//! This module defines the error types used by the lexer and parser. It
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and syntactic failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
