use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Loc},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a left-associative chain of logical OR operations.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// This is the lowest-precedence expression level. The logical operators
/// short-circuit at evaluation time, but parsing is ordinary
/// left-association.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let mut left = parse_logical_and(tokens)?;

    loop {
        let loc = match tokens.peek() {
            Some((Token::PipePipe, loc)) => *loc,
            _ => break,
        };
        tokens.next();
        let right = parse_logical_and(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::Or,
                                right: Box::new(right),
                                loc };
    }

    Ok(left)
}

/// Parses a left-associative chain of logical AND operations.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let mut left = parse_equality(tokens)?;

    loop {
        let loc = match tokens.peek() {
            Some((Token::AmpAmp, loc)) => *loc,
            _ => break,
        };
        tokens.next();
        let right = parse_equality(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::And,
                                right: Box::new(right),
                                loc };
    }

    Ok(left)
}

/// Parses equality comparisons.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let mut left = parse_relational(tokens)?;

    loop {
        let (op, loc) = match tokens.peek() {
            Some((Token::EqualEqual, loc)) => (BinaryOperator::Equal, *loc),
            Some((Token::BangEqual, loc)) => (BinaryOperator::NotEqual, *loc),
            _ => break,
        };
        tokens.next();
        let right = parse_relational(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                loc };
    }

    Ok(left)
}

/// Parses relational comparisons.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let mut left = parse_additive(tokens)?;

    loop {
        let (op, loc) = match tokens.peek() {
            Some((Token::Less, loc)) => (BinaryOperator::Less, *loc),
            Some((Token::Greater, loc)) => (BinaryOperator::Greater, *loc),
            Some((Token::LessEqual, loc)) => (BinaryOperator::LessEqual, *loc),
            Some((Token::GreaterEqual, loc)) => (BinaryOperator::GreaterEqual, *loc),
            _ => break,
        };
        tokens.next();
        let right = parse_additive(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                loc };
    }

    Ok(left)
}

/// Parses additive operations.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;

    loop {
        let (op, loc) = match tokens.peek() {
            Some((Token::Plus, loc)) => (BinaryOperator::Add, *loc),
            Some((Token::Minus, loc)) => (BinaryOperator::Sub, *loc),
            _ => break,
        };
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                loc };
    }

    Ok(left)
}

/// Parses multiplicative operations, the tightest binary level.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let mut left = parse_unary(tokens)?;

    loop {
        let (op, loc) = match tokens.peek() {
            Some((Token::Star, loc)) => (BinaryOperator::Mul, *loc),
            Some((Token::Slash, loc)) => (BinaryOperator::Div, *loc),
            Some((Token::Percent, loc)) => (BinaryOperator::Mod, *loc),
            _ => break,
        };
        tokens.next();
        let right = parse_unary(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                loc };
    }

    Ok(left)
}
