use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, DeclaredKind, Expr, FunctionDef, Loc, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_semicolon, expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a library import (`#include <NAME>;`),
/// - a variable declaration (`[static] <kind> <name> <expr>;`),
/// - a function definition,
/// - `if`/`else`, `while`, `goto`, a label, `return` or `print`,
/// - an assignment (juxtaposed, explicit `=`, compound, increment,
///   decrement or index assignment),
/// - a bare expression used for its side effects.
///
/// Dispatch is on the leading token; identifier-led statements use a
/// one-token lookahead to distinguish the assignment forms from labels and
/// expressions.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    match tokens.peek() {
        Some((Token::Include, _)) => parse_include(tokens),
        Some((Token::Static
              | Token::IntKw
              | Token::StrKw
              | Token::BoolKw
              | Token::VarKw
              | Token::Ary
              | Token::Dic,
              _)) => parse_declaration(tokens),
        Some((Token::Fun, _)) => parse_function(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::Goto, _)) => parse_goto(tokens),
        Some((Token::Return, _)) => parse_return(tokens),
        Some((Token::Print, _)) => parse_print(tokens),
        Some((Token::Identifier(_), _)) => parse_identifier_statement(tokens),
        Some(_) => parse_expression_statement(tokens),
        None => Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() }),
    }
}

/// Maps a kind keyword token to its [`DeclaredKind`].
const fn declared_kind(token: &Token) -> Option<DeclaredKind> {
    match token {
        Token::IntKw => Some(DeclaredKind::Int),
        Token::StrKw => Some(DeclaredKind::Str),
        Token::BoolKw => Some(DeclaredKind::Bool),
        Token::VarKw => Some(DeclaredKind::Var),
        Token::Ary => Some(DeclaredKind::Ary),
        Token::Dic => Some(DeclaredKind::Dic),
        _ => None,
    }
}

/// Returns the location of the next token, if any.
fn next_loc<'a, I>(tokens: &mut Peekable<I>) -> Loc
    where I: Iterator<Item = &'a (Token, Loc)>
{
    tokens.peek().map_or_else(Loc::default, |(_, loc)| *loc)
}

/// Consumes an identifier token and returns its name and location.
fn consume_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Loc)>
    where I: Iterator<Item = &'a (Token, Loc)>
{
    match tokens.next() {
        Some((Token::Identifier(name), loc)) => Ok((name.clone(), *loc)),
        Some((tok, loc)) => {
            Err(ParseError::ExpectedToken { expected: "an identifier".to_string(),
                                            found:    format!("{tok:?}"),
                                            loc:      *loc, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() }),
    }
}

/// Parses a library import.
///
/// Grammar: `include := "#include" "<" identifier ">" ";"`
///
/// The module name is recorded as written; normalization to the ALL-CAPS
/// import name happens at execution time, and unknown names only fail when
/// a call is dispatched.
fn parse_include<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let loc = expect_token(tokens, &Token::Include, "'#include'")?;
    expect_token(tokens, &Token::Less, "'<' after '#include'")?;
    let module = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Greater, "'>' after the module name")?;
    expect_semicolon(tokens, "'#include' directive")?;

    Ok(Stmt::Include { module, loc })
}

/// Parses a variable declaration.
///
/// Grammar: `declaration := "static"? kind identifier expression ";"`
///
/// The initializer is juxtaposed, never introduced by `=`. Array and
/// dictionary declarations read their literal directly as the initializer
/// expression: `ary a[1, 2, 3];` and `dic d{"k": "v";};`.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let loc = next_loc(tokens);
    let is_static = if let Some((Token::Static, _)) = tokens.peek() {
        tokens.next();
        true
    } else {
        false
    };

    let kind = match tokens.next() {
        Some((tok, loc)) => match declared_kind(tok) {
            Some(kind) => kind,
            None => {
                return Err(ParseError::ExpectedToken { expected: "a type keyword (int, str, bool, var, ary, dic)".to_string(),
                                                       found:    format!("{tok:?}"),
                                                       loc:      *loc, });
            },
        },
        None => return Err(ParseError::UnexpectedEndOfInput { loc: Loc::default() }),
    };

    let name = parse_identifier(tokens)?;
    let value = parse_expression(tokens)?;
    expect_semicolon(tokens, &format!("declaration of '{name}'"))?;

    Ok(Stmt::VarDecl { kind,
                       is_static,
                       name,
                       value,
                       loc })
}

/// Parses a function definition.
///
/// Grammar: `function := "fun" identifier "(" parameters ")" block ";"`
///
/// Parameters are bare identifiers; they carry no kind annotations and are
/// bound as `var` locals at call time.
fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let loc = expect_token(tokens, &Token::Fun, "'fun'")?;
    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::LParen, "'(' after the function name")?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let body = parse_block(tokens)?;
    expect_semicolon(tokens, "function definition")?;

    Ok(Stmt::Function(FunctionDef { name,
                                    params,
                                    body,
                                    loc }))
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Grammar:
/// ```text
///     if := "if" "(" expression ")" block
///           ("else" (if | block))? ";"
/// ```
///
/// The single terminating semicolon follows the last block of the chain; a
/// nested `else if` consumes it as part of its own parse.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let loc = expect_token(tokens, &Token::If, "'if'")?;
    expect_token(tokens, &Token::LParen, "'(' after 'if'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after the condition")?;
    let then_branch = parse_block(tokens)?;

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        if let Some((Token::If, _)) = tokens.peek() {
            Some(vec![parse_if(tokens)?])
        } else {
            let branch = parse_block(tokens)?;
            expect_semicolon(tokens, "'else' block")?;
            Some(branch)
        }
    } else {
        expect_semicolon(tokens, "'if' block")?;
        None
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch,
                  loc })
}

/// Parses a `while` loop.
///
/// Grammar: `while := "while" "(" expression ")" block ";"`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let loc = expect_token(tokens, &Token::While, "'while'")?;
    expect_token(tokens, &Token::LParen, "'(' after 'while'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after the condition")?;
    let body = parse_block(tokens)?;
    expect_semicolon(tokens, "'while' block")?;

    Ok(Stmt::While { condition,
                     body,
                     loc })
}

/// Parses a `goto` statement.
///
/// Grammar: `goto := "goto" identifier ";"`
fn parse_goto<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let loc = expect_token(tokens, &Token::Goto, "'goto'")?;
    let label = parse_identifier(tokens)?;
    expect_semicolon(tokens, "'goto' statement")?;

    Ok(Stmt::Goto { label, loc })
}

/// Parses a `return` statement, with or without a value.
///
/// Grammar: `return := "return" expression? ";"`
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let loc = expect_token(tokens, &Token::Return, "'return'")?;
    let value = if let Some((Token::Semicolon, _)) = tokens.peek() {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect_semicolon(tokens, "'return' statement")?;

    Ok(Stmt::Return { value, loc })
}

/// Parses a `print` statement.
///
/// Grammar: `print := "print" expression ("," expression)* ";"`
///
/// At least one argument is required. At execution the rendered arguments
/// are joined with single spaces and followed by a newline.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let loc = expect_token(tokens, &Token::Print, "'print'")?;

    let mut args = vec![parse_expression(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        args.push(parse_expression(tokens)?);
    }
    expect_semicolon(tokens, "'print' statement")?;

    Ok(Stmt::Print { args, loc })
}

/// Parses a statement that starts with an identifier.
///
/// A one-token lookahead distinguishes:
/// - `name:` (label),
/// - `name++;` / `name--;`,
/// - `name += e;` / `name -= e;`,
/// - `name = e;` (explicit assignment),
/// - `name(...)`, `name.member...`, `name[...]` (expression forms, where a
///   trailing `=` after an index turns the statement into an index
///   assignment),
/// - anything else: the juxtaposed assignment `name e;`.
fn parse_identifier_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let second = {
        let mut lookahead = tokens.clone();
        lookahead.next();
        lookahead.next().map(|(tok, _)| tok.clone())
    };

    match second {
        Some(Token::Colon) => {
            let (name, loc) = consume_identifier(tokens)?;
            tokens.next();
            Ok(Stmt::Label { name, loc })
        },
        Some(Token::PlusPlus) => {
            let (name, loc) = consume_identifier(tokens)?;
            tokens.next();
            expect_semicolon(tokens, &format!("'{name}++'"))?;
            Ok(Stmt::Increment { name, loc })
        },
        Some(Token::MinusMinus) => {
            let (name, loc) = consume_identifier(tokens)?;
            tokens.next();
            expect_semicolon(tokens, &format!("'{name}--'"))?;
            Ok(Stmt::Decrement { name, loc })
        },
        Some(Token::PlusAssign) => parse_compound(tokens, BinaryOperator::Add),
        Some(Token::MinusAssign) => parse_compound(tokens, BinaryOperator::Sub),
        Some(Token::Equals) => {
            let (name, loc) = consume_identifier(tokens)?;
            tokens.next();
            let value = parse_expression(tokens)?;
            expect_semicolon(tokens, &format!("assignment to '{name}'"))?;
            Ok(Stmt::Assign { name, value, loc })
        },
        Some(Token::LParen | Token::Dot | Token::LBracket) => parse_expression_statement(tokens),
        _ => {
            let (name, loc) = consume_identifier(tokens)?;
            let value = parse_expression(tokens)?;
            expect_semicolon(tokens, &format!("assignment to '{name}'"))?;
            Ok(Stmt::Assign { name, value, loc })
        },
    }
}

/// Parses a compound assignment once the lookahead has identified one.
fn parse_compound<'a, I>(tokens: &mut Peekable<I>, op: BinaryOperator) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let (name, loc) = consume_identifier(tokens)?;
    tokens.next();
    let value = parse_expression(tokens)?;
    expect_semicolon(tokens, &format!("compound assignment to '{name}'"))?;

    Ok(Stmt::CompoundAssign { name,
                              op,
                              value,
                              loc })
}

/// Parses a bare expression statement, or an index assignment when the
/// parsed expression is an index form followed by `=`.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Loc)> + Clone
{
    let expr = parse_expression(tokens)?;

    if let Some((Token::Equals, _)) = tokens.peek() {
        let expr_loc = expr.loc();
        let Expr::Index { object, index, loc } = expr else {
            return Err(ParseError::UnexpectedToken { token: "'=' after an expression that is not an index".to_string(),
                                                     loc:   expr_loc, });
        };
        let Expr::Variable { name, .. } = *object else {
            return Err(ParseError::UnexpectedToken { token: "index assignment target must be a variable".to_string(),
                                                     loc });
        };
        tokens.next();
        let value = parse_expression(tokens)?;
        expect_semicolon(tokens, &format!("index assignment to '{name}'"))?;
        return Ok(Stmt::IndexAssign { name,
                                      index: *index,
                                      value,
                                      loc });
    }

    expect_semicolon(tokens, "expression statement")?;
    match expr {
        call @ (Expr::FunctionCall { .. } | Expr::MemberCall { .. }) => {
            Ok(Stmt::Call { loc:  call.loc(),
                            expr: call, })
        },
        other => Ok(Stmt::Expression { loc:  other.loc(),
                                       expr: other, }),
    }
}
