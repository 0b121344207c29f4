use std::iter::Peekable;

use crate::{
    ast::Loc,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call argument lists and
/// function parameter lists. It repeatedly calls `parse_item` to parse one
/// element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := item ("," item)*`
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && *tok == *closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if *tok == *closing => {
                tokens.next();
                break;
            },
            Some((tok, loc)) => {
                return Err(ParseError::UnexpectedToken { token: format!("expected ',' or {closing:?}, found {tok:?}"),
                                                         loc:   *loc, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Loc)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, loc)) => {
            Err(ParseError::ExpectedToken { expected: "an identifier".to_string(),
                                            found:    format!("{tok:?}"),
                                            loc:      *loc, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() }),
    }
}

/// Consumes the next token, which must equal `expected`, and returns its
/// location.
///
/// `what` names the expected token in diagnostics, e.g. `"'('"`.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          what: &str)
                                                          -> ParseResult<Loc>
    where I: Iterator<Item = &'a (Token, Loc)>
{
    match tokens.next() {
        Some((tok, loc)) if *tok == *expected => Ok(*loc),
        Some((tok, loc)) => {
            Err(ParseError::ExpectedToken { expected: what.to_string(),
                                            found:    format!("{tok:?}"),
                                            loc:      *loc, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() }),
    }
}

/// Consumes the mandatory `;` that terminates a statement.
///
/// `after` names the construct in diagnostics, e.g. `"variable
/// declaration"`. Block-ending statements require a semicolon after their
/// closing brace just like any other statement.
pub(in crate::interpreter::parser) fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>,
                                                              after: &str)
                                                              -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Loc)>
{
    match tokens.next() {
        Some((Token::Semicolon, _)) => Ok(()),
        Some((_, loc)) => {
            Err(ParseError::MissingSemicolon { after: after.to_string(),
                                               loc:   *loc, })
        },
        None => {
            Err(ParseError::MissingSemicolon { after: after.to_string(),
                                               loc:   Loc::default(), })
        },
    }
}
