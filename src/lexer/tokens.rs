use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, ops::Deref};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("double", TokenKind::Double);
        map.insert("string", TokenKind::String);
        map.insert("bool", TokenKind::Bool);
        map.insert("char", TokenKind::Char);
        map.insert("Agar", TokenKind::If);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("while", TokenKind::While);
        map
    };
}

/// Type keywords accepted at the start of a declaration.
pub const TYPE_KEYWORDS: [TokenKind; 6] = [
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Double,
    TokenKind::String,
    TokenKind::Bool,
    TokenKind::Char,
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    StringLiteral,
    CharLiteral,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Greater,    // >
    Semicolon,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Int,
    Float,
    Double,
    String,
    Bool,
    Char,
    If,
    Else,
    Return,
    While,
}

impl TokenKind {
    pub fn is_type(&self) -> bool {
        TYPE_KEYWORDS.contains(self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            TokenKind::EOF => "end of input",
            TokenKind::Number => "number",
            TokenKind::StringLiteral => "string literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenCurly => "`{`",
            TokenKind::CloseCurly => "`}`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Assignment => "`=`",
            TokenKind::Greater => "`>`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Slash => "`/`",
            TokenKind::Star => "`*`",
            TokenKind::Int => "`int`",
            TokenKind::Float => "`float`",
            TokenKind::Double => "`double`",
            TokenKind::String => "`string`",
            TokenKind::Bool => "`bool`",
            TokenKind::Char => "`char`",
            TokenKind::If => "conditional keyword",
            TokenKind::Else => "`else`",
            TokenKind::Return => "`return`",
            TokenKind::While => "`while`",
        };

        write!(f, "{}", description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token. Empty for `EOF`.
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {:?} {}",
            self.span.start.line, self.span.start.column, self.kind, self.value
        )
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    pub fn position(&self) -> Position {
        self.span.start
    }
}

/// The tokens of one source text, in source order.
///
/// Only the lexer builds a stream, so it is never empty and its last
/// token is the single `EOF` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(tokens.last(), Some(token) if token.kind == TokenKind::EOF));
        TokenStream { tokens }
    }

    /// The trailing `EOF` token.
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
