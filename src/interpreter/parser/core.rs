use std::iter::Peekable;

use crate::{
    ast::{Expr, Loc, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// This is the entry point for parsing. It repeatedly parses statements
/// until the token stream is exhausted and returns the ordered top-level
/// statement sequence.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no partial program is ever
/// produced.
///
/// # Example
/// ```
/// use lumen::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("int x 5;\nprint x;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, Loc)]) -> ParseResult<Vec<Stmt>> {
    let mut iter = tokens.iter().peekable();
    let mut program = Vec::new();

    while iter.peek().is_some() {
        program.push(parse_statement(&mut iter)?);
    }

    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    parse_logical_or(tokens)
}
