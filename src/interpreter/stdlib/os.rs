use std::{env, fs, path::Path};

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
    "pwd"      => { arity: Arity::Exact(0), func: pwd },
    "ls"       => { arity: Arity::OneOf(&[0, 1]), func: ls },
    "mkdir"    => { arity: Arity::Exact(1), func: mkdir },
    "cd"       => { arity: Arity::Exact(1), func: cd },
    "pathjoin" => { arity: Arity::Exact(2), func: pathjoin },
    "rm"       => { arity: Arity::Exact(1), func: rm },
}

/// The current working directory.
fn pwd(_context: &mut Context, _args: &[Value], loc: Loc) -> EvalResult<Value> {
    env::current_dir().map(|path| Value::Str(path.display().to_string()))
                      .map_err(|e| RuntimeError::IoError { details: e.to_string(),
                                                           loc })
}

/// The entry names of a directory, sorted, as an array of strings.
/// Defaults to the current working directory.
fn ls(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let path = match args.first() {
        Some(arg) => arg.as_str(loc)?.to_string(),
        None => ".".to_string(),
    };

    let entries = fs::read_dir(&path).map_err(|e| {
                                         RuntimeError::IoError { details: format!("cannot list '{path}': {e}"),
                                                                 loc }
                                     })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RuntimeError::IoError { details: e.to_string(),
                                                              loc })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(names.into_iter().map(Value::Str).collect::<Vec<_>>().into())
}

/// Creates a directory, including missing parents.
fn mkdir(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let path = args[0].as_str(loc)?;
    fs::create_dir_all(path).map_err(|e| {
                                RuntimeError::IoError { details: format!("cannot create '{path}': {e}"),
                                                        loc }
                            })?;
    Ok(Value::Nil)
}

/// Changes the current working directory.
fn cd(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let path = args[0].as_str(loc)?;
    env::set_current_dir(path).map_err(|e| {
                                  RuntimeError::IoError { details: format!("cannot enter '{path}': {e}"),
                                                          loc }
                              })?;
    Ok(Value::Nil)
}

/// Joins two path components with the platform separator.
fn pathjoin(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let base = args[0].as_str(loc)?;
    let child = args[1].as_str(loc)?;
    Ok(Value::Str(Path::new(base).join(child).display().to_string()))
}

/// Deletes the file at `path`.
fn rm(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let path = args[0].as_str(loc)?;
    fs::remove_file(path).map_err(|e| {
                             RuntimeError::IoError { details: format!("cannot remove '{path}': {e}"),
                                                     loc }
                         })?;
    Ok(Value::Nil)
}
