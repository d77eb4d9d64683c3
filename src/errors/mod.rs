//! Error types and error handling for the recognizer.
//!
//! Both stages fail through the same [`errors::Error`] value:
//!
//! - Lexical errors raised while tokenizing
//! - Syntax errors raised while recognizing the token stream
//! - Single-line diagnostics and optional suggestions

pub mod errors;
