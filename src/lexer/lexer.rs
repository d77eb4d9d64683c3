use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenStream, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored at the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\n\r\x0B\x0C]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[0-9][0-9.]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z][A-Za-z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r#"^"[^"]*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^""#).unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new(r"^'[^']'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new(r"^''").unwrap(), handler: empty_char_handler },
        RegexPattern { regex: Regex::new(r"^'").unwrap(), handler: unterminated_char_handler },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new(r"^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
    ];
}

/// Scanning state for a single call to [`tokenize`].
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Consumes `n` bytes, keeping line and column in step with every
    /// character passed over.
    pub fn advance_n(&mut self, n: usize) {
        for ch in self.source[self.pos..self.pos + n].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }

    fn emit(&mut self, kind: TokenKind, value: String) {
        let start = self.position();
        self.advance_n(value.len());
        let end = self.position();
        self.push(MK_TOKEN!(kind, value, Span { start, end }));
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.emit(TokenKind::Number, matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.emit(kind, matched);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.emit(TokenKind::StringLiteral, matched);
    Ok(())
}

fn char_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.emit(TokenKind::CharLiteral, matched);
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let token = lexer.remainder().lines().next().unwrap_or("\"").to_string();
    Err(Error::new(ErrorImpl::UnterminatedString { token }, lexer.position()))
}

fn empty_char_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let token = lexer.matched(regex);
    Err(Error::new(ErrorImpl::EmptyChar { token }, lexer.position()))
}

fn unterminated_char_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let token = lexer
        .remainder()
        .chars()
        .take(2)
        .take_while(|ch| *ch != '\n')
        .collect();
    Err(Error::new(ErrorImpl::UnterminatedChar { token }, lexer.position()))
}

/// Splits `source` into tokens, ending with a single `EOF` token.
///
/// Fails on the first character that cannot start a token or on a
/// malformed string or char literal. No partial stream is returned.
pub fn tokenize(source: &str) -> Result<TokenStream, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnexpectedCharacter { token }, lex.position()));
            }
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: end, end }));

    debug!("lexed {} bytes into {} tokens", source.len(), lex.tokens.len());
    Ok(TokenStream::new(lex.tokens))
}
