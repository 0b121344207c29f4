use std::iter::Peekable;

use crate::{
    ast::{Loc, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::expect_token,
        },
    },
};

/// Parses a brace-delimited statement sequence.
///
/// Grammar: `block := "{" statement* "}"`
///
/// The closing brace is consumed; the semicolon that every block-ending
/// statement requires after the brace is the caller's responsibility,
/// because `if`/`else` chains place it after the final block only.
pub(in crate::interpreter::parser) fn parse_block<'a, I>(tokens: &mut Peekable<I>)
                                                         -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    expect_token(tokens, &Token::LBrace, "'{'")?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() }),
        }
    }

    Ok(statements)
}
