use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::{TokenKind, TYPE_KEYWORDS}};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<(), Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<(), Error>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::StringLiteral, parse_primary_expr);
    parser.nud(TokenKind::CharLiteral, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    for kind in TYPE_KEYWORDS {
        parser.stmt(kind, parse_declaration_stmt);
    }
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
