use std::{env, thread};

use crate::{
    ast::Loc,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        stdlib::core::{Arity, library_functions},
        value::core::Value,
    },
};

library_functions! {
    "os"           => { arity: Arity::Exact(0), func: os },
    "architecture" => { arity: Arity::Exact(0), func: architecture },
    "cpu"          => { arity: Arity::Exact(0), func: cpu },
    "lmnver"       => { arity: Arity::Exact(0), func: lmnver },
}

/// The host operating system name.
fn os(_context: &mut Context, _args: &[Value], _loc: Loc) -> EvalResult<Value> {
    Ok(Value::Str(env::consts::OS.to_string()))
}

/// The host CPU architecture name.
fn architecture(_context: &mut Context, _args: &[Value], _loc: Loc) -> EvalResult<Value> {
    Ok(Value::Str(env::consts::ARCH.to_string()))
}

/// The number of logical CPUs available to the process.
#[allow(clippy::cast_possible_wrap)]
fn cpu(_context: &mut Context, _args: &[Value], _loc: Loc) -> EvalResult<Value> {
    let count = thread::available_parallelism().map_or(1, |n| n.get() as i64);
    Ok(Value::Integer(count))
}

/// The interpreter version.
fn lmnver(_context: &mut Context, _args: &[Value], _loc: Loc) -> EvalResult<Value> {
    Ok(Value::Str(env!("CARGO_PKG_VERSION").to_string()))
}
