#![allow(clippy::module_inception)]

use std::path::Path;

use log::debug;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// The position of the first character of a source text.
    #[cfg(test)]
    pub(crate) fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and recognizes `source`, stopping at the first lexical or
/// syntax error.
pub fn recognize(source: &str) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    debug!("tokenized {} tokens", tokens.len());
    parse(&tokens)
}

/// Returns the text of the 1-based `line` of `source`, without its line
/// terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders the source line an error points at, with a caret under the
/// offending column.
///
/// ```text
/// Error: ExpectedToken (did you miss a semicolon?)
/// -> main.src
///   |
/// 1 | int a a = 5;
///   | ------^
/// ```
pub fn display_error(error: &Error, source: &str, file: &Path) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    output.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
