use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// `statement := declaration | assignment | if-stmt | return-stmt | while-stmt | block`
pub fn parse_stmt(parser: &mut Parser<'_>) -> Result<(), Error> {
    let kind = parser.current_token_kind();
    trace!("statement at {:?} ({:?})", parser.get_position(), kind);

    let handler = parser.get_stmt_lookup().get(&kind).copied();

    parser.enter()?;
    let result = match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("statement")),
    };
    parser.leave();

    result
}

/// `block := '{' statement* '}'`
pub fn parse_block_stmt(parser: &mut Parser<'_>) -> Result<(), Error> {
    parser.expect(TokenKind::OpenCurly)?;

    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        parse_stmt(parser)?;
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(())
}

/// `declaration := type-keyword IDENT ';'`
pub fn parse_declaration_stmt(parser: &mut Parser<'_>) -> Result<(), Error> {
    if !parser.current_token_kind().is_type() {
        return Err(Error::new(
            ErrorImpl::ExpectedDataType { token: parser.current_token().value.clone() },
            parser.get_position(),
        ));
    }

    parser.advance();
    parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

/// `assignment := IDENT '=' expression ';'`
pub fn parse_assignment_stmt(parser: &mut Parser<'_>) -> Result<(), Error> {
    let target = parser.expect(TokenKind::Identifier)?;

    // `foo x;` is a declaration with an unknown type, not a broken assignment
    let error = if parser.current_token_kind() == TokenKind::Identifier {
        Some(Error::new(
            ErrorImpl::ExpectedDataType { token: target.value.clone() },
            target.position(),
        ))
    } else {
        None
    };

    parser.expect_error(TokenKind::Assignment, error)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

/// `if-stmt := COND '(' expression ')' statement [ELSE statement]`
pub fn parse_if_stmt(parser: &mut Parser<'_>) -> Result<(), Error> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parse_stmt(parser)?;

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_stmt(parser)?;
    }

    Ok(())
}

/// `return-stmt := RETURN expression ';'`
pub fn parse_return_stmt(parser: &mut Parser<'_>) -> Result<(), Error> {
    parser.expect(TokenKind::Return)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

/// `while-stmt := WHILE '(' expression ')' statement`
pub fn parse_while_stmt(parser: &mut Parser<'_>) -> Result<(), Error> {
    parser.expect(TokenKind::While)?;
    parser.expect(TokenKind::OpenParen)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parse_stmt(parser)
}
