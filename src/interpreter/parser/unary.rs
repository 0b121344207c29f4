use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Loc, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a unary operation or delegates to the postfix level.
///
/// Grammar: `unary := ("!" | "-") unary | postfix`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let (op, loc) = match tokens.peek() {
        Some((Token::Bang, loc)) => (UnaryOperator::Not, *loc),
        Some((Token::Minus, loc)) => (UnaryOperator::Negate, *loc),
        _ => return parse_postfix(tokens),
    };
    tokens.next();
    let expr = parse_unary(tokens)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       loc })
}

/// Parses postfix forms on top of a primary expression.
///
/// Grammar:
/// ```text
///     postfix := primary ("[" expression "]"
///                        | "(" arguments ")"
///                        | "." identifier ("(" arguments ")")?)*
/// ```
///
/// A call requires the callee to be a bare identifier; member access
/// requires a bare module identifier on the left of the dot. A member
/// access without parentheses becomes a zero-argument member call, which is
/// how library constants such as `math.pi` are written.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let mut expr = parse_primary(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::LBracket, loc)) => {
                let loc = *loc;
                tokens.next();
                let index = parse_expression(tokens)?;
                expect_token(tokens, &Token::RBracket, "']'")?;
                expr = Expr::Index { object: Box::new(expr),
                                     index: Box::new(index),
                                     loc };
            },
            Some((Token::LParen, loc)) => {
                let loc = *loc;
                let Expr::Variable { name, .. } = expr else {
                    return Err(ParseError::UnexpectedToken { token: "'(' after a non-callable expression".to_string(),
                                                             loc });
                };
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                expr = Expr::FunctionCall { name,
                                            arguments,
                                            loc };
            },
            Some((Token::Dot, loc)) => {
                let loc = *loc;
                let Expr::Variable { name: module, .. } = expr else {
                    return Err(ParseError::UnexpectedToken { token: "'.' after a non-module expression".to_string(),
                                                             loc });
                };
                tokens.next();
                let function = parse_identifier(tokens)?;
                let arguments = if let Some((Token::LParen, _)) = tokens.peek() {
                    tokens.next();
                    parse_comma_separated(tokens, parse_expression, &Token::RParen)?
                } else {
                    Vec::new()
                };
                expr = Expr::MemberCall { module,
                                          function,
                                          arguments,
                                          loc };
            },
            _ => break,
        }
    }

    Ok(expr)
}

/// Parses a primary expression.
///
/// Grammar:
/// ```text
///     primary := literal | identifier | "(" expression ")"
///              | array_literal | dict_literal
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), loc)) => Ok(Expr::Literal { value: LiteralValue::Integer(*n),
                                                             loc:   *loc, }),
        Some((Token::Real(r), loc)) => Ok(Expr::Literal { value: LiteralValue::Real(*r),
                                                          loc:   *loc, }),
        Some((Token::Str(s), loc)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                                         loc:   *loc, }),
        Some((Token::Bool(b), loc)) => Ok(Expr::Literal { value: LiteralValue::Bool(*b),
                                                          loc:   *loc, }),
        Some((Token::Identifier(name), loc)) => Ok(Expr::Variable { name: name.clone(),
                                                                    loc:  *loc, }),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        Some((Token::LBracket, loc)) => {
            let loc = *loc;
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Ok(Expr::ArrayLiteral { elements, loc })
        },
        Some((Token::LBrace, loc)) => {
            let loc = *loc;
            parse_dict_literal(tokens, loc)
        },
        Some((tok, loc)) => {
            Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                              loc:   *loc, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() }),
    }
}

/// Parses a dictionary literal after its opening brace.
///
/// Grammar: `dict_literal := "{" ("<string>" ":" expression ";")* "}"`
///
/// Every entry is a string key, a colon, a value expression and a
/// terminating semicolon; the final semicolon before `}` may be omitted.
/// An empty `{}` is accepted.
fn parse_dict_literal<'a, I>(tokens: &mut Peekable<I>, loc: Loc) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let mut entries = Vec::new();

    loop {
        match tokens.next() {
            Some((Token::RBrace, _)) => break,
            Some((Token::Str(key), _)) => {
                let key = key.clone();
                expect_token(tokens, &Token::Colon, "':' after dictionary key")?;
                let value = parse_expression(tokens)?;
                entries.push((key, value));

                match tokens.peek() {
                    Some((Token::Semicolon, _)) => {
                        tokens.next();
                    },
                    Some((Token::RBrace, _)) => {},
                    Some((tok, loc)) => {
                        return Err(ParseError::UnexpectedToken { token: format!("expected ';' or '}}' after dictionary value, found {tok:?}"),
                                                                 loc:   *loc, });
                    },
                    None => {
                        return Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() });
                    },
                }
            },
            Some((tok, loc)) => {
                return Err(ParseError::ExpectedToken { expected: "a string key".to_string(),
                                                       found:    format!("{tok:?}"),
                                                       loc:      *loc, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() }),
        }
    }

    Ok(Expr::DictLiteral { entries, loc })
}
