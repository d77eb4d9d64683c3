//! Lexical analysis module for the recognizer.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for recognition. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and column tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;
