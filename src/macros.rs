//! Utility macros for the recognizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for single-character tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for a fixed-text token.
///
/// The generated handler records the current position, advances the
/// lexer past `$value` and pushes a token of kind `$kind`.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            let start = lexer.position();
            lexer.advance_n($value.len());
            let end = lexer.position();
            lexer.push(MK_TOKEN!($kind, String::from($value), Span { start, end }));
            Ok(())
        }
    };
}
