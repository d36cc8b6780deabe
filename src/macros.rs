//! Utility macros for the frontend.
//!
//! This module defines the `MK_TOKEN!` helper macro used by the lexer to
//! reduce boilerplate when constructing tokens.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's lexeme, borrowed from the source buffer
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42", span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $span:expr) => {
        Token {
            kind: $kind,
            text: $text,
            span: $span,
        }
    };
}
