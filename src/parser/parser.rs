//! Recognizer state and entry point.
//!
//! The [`Parser`] borrows a token stream and owns nothing but a cursor
//! into it plus the dispatch tables used to pick a grammar rule from the
//! current token:
//! - Statement handlers, keyed by the first token of each statement
//! - NUD (null denotation) handlers, keyed by the first token of a factor

use std::{collections::HashMap, time::Instant};

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenStream},
    Position,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// How many statements and parenthesized groups may be open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The recognizer's state: a read-only token stream and a cursor into it.
pub struct Parser<'a> {
    /// The tokens being recognized
    tokens: &'a TokenStream,
    /// Index of the current token, never past the `EOF` token
    pos: usize,
    /// Statements and groups currently open
    depth: usize,
    /// Lookup table for statement handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for factor handlers
    nud_lookup: NUDLookup,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token, with empty lookup
    /// tables. [`parse`] fills them through [`create_token_lookups`].
    pub fn new(tokens: &'a TokenStream) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &'a Token {
        let tokens: &'a [Token] = self.tokens;
        &tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor stays on `EOF` once it gets there.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current_token();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches,
    /// otherwise returns `error` or an `ExpectedToken` error at the
    /// current token.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<&'a Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected: expected_kind,
                        token: token.value.clone(),
                    },
                    token.position(),
                )),
            }
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&'a Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Index of the current token in the stream.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a factor handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position()
    }

    /// An `UnexpectedToken` error at the current token, naming what the
    /// rule was looking for.
    pub fn unexpected(&self, expected: &'static str) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                token: token.value.clone(),
            },
            token.position(),
        )
    }

    /// Opens one nesting level, failing at the current token once
    /// [`MAX_NESTING_DEPTH`] levels are already open.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current_token();
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                    token: token.value.clone(),
                },
                token.position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    /// Closes the level opened by the matching [`Parser::enter`].
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Number of nesting levels currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Recognizes a token stream as a `program`: statements until `EOF`.
///
/// Stops at the first rule violation and returns it; nothing after the
/// offending token is examined.
pub fn parse(tokens: &TokenStream) -> Result<(), Error> {
    let start = Instant::now();

    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut statements = 0;
    while parser.has_tokens() {
        if let Err(error) = parse_stmt(&mut parser) {
            debug!("recognition failed after {:?}: {}", start.elapsed(), error);
            return Err(error);
        }
        statements += 1;
    }

    parser.expect(TokenKind::EOF)?;

    debug!("recognized {} statements in {:?}", statements, start.elapsed());
    Ok(())
}
