use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// `expression := term (('+'|'-') term)* [ '>' expression ]`
///
/// The comparison is right-recursive, so `a > b > c` is accepted as
/// `a > (b > c)`. Recognizing it needs no tree, so the recursion is
/// unrolled into `sum ('>' sum)*`, which accepts the same inputs.
pub fn parse_expr(parser: &mut Parser<'_>) -> Result<(), Error> {
    parse_sum(parser)?;

    while parser.current_token_kind() == TokenKind::Greater {
        parser.advance();
        parse_sum(parser)?;
    }

    Ok(())
}

/// `term (('+'|'-') term)*`
pub fn parse_sum(parser: &mut Parser<'_>) -> Result<(), Error> {
    parse_term(parser)?;

    while matches!(parser.current_token_kind(), TokenKind::Plus | TokenKind::Dash) {
        parser.advance();
        parse_term(parser)?;
    }

    Ok(())
}

/// `term := factor (('*'|'/') factor)*`
pub fn parse_term(parser: &mut Parser<'_>) -> Result<(), Error> {
    parse_factor(parser)?;

    while matches!(parser.current_token_kind(), TokenKind::Star | TokenKind::Slash) {
        parser.advance();
        parse_factor(parser)?;
    }

    Ok(())
}

/// `factor := NUM | IDENT | STRING | CHAR | '(' expression ')'`
pub fn parse_factor(parser: &mut Parser<'_>) -> Result<(), Error> {
    let kind = parser.current_token_kind();

    let handler = parser.get_nud_lookup().get(&kind).copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expression")),
    }
}

pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Number | TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::CharLiteral => {
            parser.advance();
            Ok(())
        }
        _ => Err(parser.unexpected("expression")),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<(), Error> {
    parser.enter()?;
    parser.expect(TokenKind::OpenParen)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.leave();
    Ok(())
}
