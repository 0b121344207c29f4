use std::fs;

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
    "input"    => { arity: Arity::OneOf(&[0, 1]), func: input },
    "inputInt" => { arity: Arity::OneOf(&[0, 1]), func: input_int },
    "open"     => { arity: Arity::Exact(1), func: open },
    "write"    => { arity: Arity::Exact(2), func: write },
    "read"     => { arity: Arity::Exact(1), func: read },
    "remove"   => { arity: Arity::Exact(1), func: remove },
}

/// Reads one line from the input source, optionally printing a prompt
/// first. Blocks the single execution thread until a line is available.
fn input(context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    if let Some(prompt) = args.first() {
        context.write_out(&prompt.to_string());
    }
    Ok(Value::Str(context.read_line(loc)?))
}

/// Like `input`, but parses the line as an integer.
fn input_int(context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    if let Some(prompt) = args.first() {
        context.write_out(&prompt.to_string());
    }
    let line = context.read_line(loc)?;
    line.trim()
        .parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| RuntimeError::InvalidArgument { details: format!("'{}' is not an integer",
                                                                      line.trim()),
                                                     loc })
}

/// Creates the file at `path` if it does not exist yet. Existing content
/// is left alone.
fn open(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let path = args[0].as_str(loc)?;
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| RuntimeError::IoError { details: format!("cannot open '{path}': {e}"),
                                             loc })?;
    Ok(Value::Nil)
}

/// Writes the rendered second argument to the file at `path`, replacing
/// whatever was there.
fn write(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let path = args[0].as_str(loc)?;
    let content = args[1].to_string();
    fs::write(path, content).map_err(|e| {
                                RuntimeError::IoError { details: format!("cannot write '{path}': {e}"),
                                                        loc }
                            })?;
    Ok(Value::Nil)
}

/// Reads the entire file at `path` as a string.
fn read(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let path = args[0].as_str(loc)?;
    fs::read_to_string(path).map(Value::Str)
                            .map_err(|e| {
                                RuntimeError::IoError { details: format!("cannot read '{path}': {e}"),
                                                        loc }
                            })
}

/// Deletes the file at `path`.
fn remove(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let path = args[0].as_str(loc)?;
    fs::remove_file(path).map_err(|e| {
                             RuntimeError::IoError { details: format!("cannot remove '{path}': {e}"),
                                                     loc }
                         })?;
    Ok(Value::Nil)
}
