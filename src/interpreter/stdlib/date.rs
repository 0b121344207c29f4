use chrono::Local;

use crate::{
    ast::Loc,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        stdlib::core::{Arity, library_functions},
        value::core::Value,
    },
};

library_functions! {
    "now"      => { arity: Arity::Exact(0), func: now },
    "datetime" => { arity: Arity::Exact(0), func: datetime },
}

/// The local wall-clock time, `HH:MM:SS`.
fn now(_context: &mut Context, _args: &[Value], _loc: Loc) -> EvalResult<Value> {
    Ok(Value::Str(Local::now().format("%H:%M:%S").to_string()))
}

/// The local date and time, `YYYY-MM-DD HH:MM:SS`.
fn datetime(_context: &mut Context, _args: &[Value], _loc: Loc) -> EvalResult<Value> {
    Ok(Value::Str(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()))
}
