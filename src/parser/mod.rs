//! Recursive-descent recognizer for the statement language.
//!
//! The recognizer walks a token stream with one function per grammar
//! rule and reports the first violation. It builds no tree.
//!
//! Statements and factors are dispatched through lookup tables keyed by
//! the current token kind; expressions follow the grammar directly.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
