use ::regex::Regex;

use crate::{
    ast::Loc,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        stdlib::core::{Arity, library_functions},
        value::core::Value,
    },
};

library_functions! {
    "search"  => { arity: Arity::Exact(2), func: search },
    "findall" => { arity: Arity::Exact(2), func: findall },
    "split"   => { arity: Arity::Exact(2), func: split },
    "sub"     => { arity: Arity::Exact(3), func: sub },
}

/// Compiles a pattern, mapping compilation failures to the language's
/// regex error.
fn compile(pattern: &str, loc: Loc) -> EvalResult<Regex> {
    Regex::new(pattern).map_err(|e| RuntimeError::RegexSyntaxError { details: e.to_string(),
                                                                     loc })
}

/// The first match of `pattern` in `text`, or nil when there is none.
fn search(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let pattern = compile(args[0].as_str(loc)?, loc)?;
    let text = args[1].as_str(loc)?;

    Ok(pattern.find(text)
              .map_or(Value::Nil, |m| Value::Str(m.as_str().to_string())))
}

/// Every non-overlapping match of `pattern` in `text`, as an array.
fn findall(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let pattern = compile(args[0].as_str(loc)?, loc)?;
    let text = args[1].as_str(loc)?;

    let matches: Vec<Value> = pattern.find_iter(text)
                                     .map(|m| Value::Str(m.as_str().to_string()))
                                     .collect();
    Ok(matches.into())
}

/// The pieces of `text` between matches of `pattern`, as an array.
fn split(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let pattern = compile(args[0].as_str(loc)?, loc)?;
    let text = args[1].as_str(loc)?;

    let pieces: Vec<Value> = pattern.split(text)
                                    .map(|piece| Value::Str(piece.to_string()))
                                    .collect();
    Ok(pieces.into())
}

/// `text` with every match of `pattern` replaced by `repl`.
fn sub(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let pattern = compile(args[0].as_str(loc)?, loc)?;
    let repl = args[1].as_str(loc)?;
    let text = args[2].as_str(loc)?;

    Ok(Value::Str(pattern.replace_all(text, repl).into_owned()))
}
