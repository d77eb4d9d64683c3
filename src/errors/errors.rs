use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexical => write!(f, "Lexical"),
            ErrorCategory::Syntax => write!(f, "Syntax"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. }
            | ErrorImpl::EmptyChar { .. }
            | ErrorImpl::UnterminatedChar { .. }
            | ErrorImpl::UnexpectedCharacter { .. } => ErrorCategory::Lexical,
            ErrorImpl::ExpectedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedDataType { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorCategory::Syntax,
        }
    }

    /// The offending source text.
    pub fn get_token(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { token }
            | ErrorImpl::EmptyChar { token }
            | ErrorImpl::UnterminatedChar { token }
            | ErrorImpl::UnexpectedCharacter { token }
            | ErrorImpl::ExpectedToken { token, .. }
            | ErrorImpl::UnexpectedToken { token, .. }
            | ErrorImpl::ExpectedDataType { token }
            | ErrorImpl::NestingTooDeep { token, .. } => token,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::EmptyChar { .. } => "EmptyChar",
            ErrorImpl::UnterminatedChar { .. } => "UnterminatedChar",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedDataType { .. } => "ExpectedDataType",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("add a closing `\"` to the string literal"))
            }
            ErrorImpl::EmptyChar { .. } => ErrorTip::Suggestion(String::from(
                "char literals hold exactly one character, use a string literal for empty text",
            )),
            ErrorImpl::UnterminatedChar { .. } => ErrorTip::Suggestion(String::from(
                "char literals hold exactly one character followed by a closing `'`",
            )),
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::ExpectedToken { expected: TokenKind::Semicolon, .. } => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::ExpectedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::ExpectedDataType { .. } => ErrorTip::Suggestion(String::from(
                "declarations start with one of int, float, double, string, bool or char",
            )),
            ErrorImpl::NestingTooDeep { limit, .. } => ErrorTip::Suggestion(format!(
                "blocks, statements and parentheses nest at most {} levels deep",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} error: {} at line {}, column {}",
            self.get_category(),
            self.internal_error,
            self.position.line,
            self.position.column
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated string literal `{token}`")]
    UnterminatedString { token: String },
    #[error("empty char literal `{token}`")]
    EmptyChar { token: String },
    #[error("unterminated char literal `{token}`")]
    UnterminatedChar { token: String },
    #[error("unexpected character `{token}`")]
    UnexpectedCharacter { token: String },
    #[error("expected {expected} but found `{token}`")]
    ExpectedToken { expected: TokenKind, token: String },
    #[error("unexpected token `{token}`, expected {expected}")]
    UnexpectedToken { expected: &'static str, token: String },
    #[error("expected data type but found `{token}`")]
    ExpectedDataType { token: String },
    #[error("nesting deeper than {limit} levels at `{token}`")]
    NestingTooDeep { limit: usize, token: String },
}
