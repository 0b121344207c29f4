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
    "pi"        => { arity: Arity::Exact(0), func: pi },
    "e"         => { arity: Arity::Exact(0), func: e },
    "sqrt"      => { arity: Arity::Exact(1), func: sqrt },
    "pow"       => { arity: Arity::Exact(2), func: pow },
    "sin"       => { arity: Arity::Exact(1), func: sin },
    "cos"       => { arity: Arity::Exact(1), func: cos },
    "factorial" => { arity: Arity::Exact(1), func: factorial },
    "log"       => { arity: Arity::OneOf(&[1, 2]), func: log },
}

/// The circle constant.
fn pi(_context: &mut Context, _args: &[Value], _loc: Loc) -> EvalResult<Value> {
    Ok(Value::Real(std::f64::consts::PI))
}

/// Euler's number.
fn e(_context: &mut Context, _args: &[Value], _loc: Loc) -> EvalResult<Value> {
    Ok(Value::Real(std::f64::consts::E))
}

/// Square root of a non-negative number.
fn sqrt(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let x = args[0].as_real(loc)?;
    if x < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("sqrt of negative number {x}"),
                                                   loc });
    }
    Ok(Value::Real(x.sqrt()))
}

/// Exponentiation.
///
/// Two integers with a non-negative exponent stay in checked integer
/// arithmetic; every other numeric combination is computed in floating
/// point.
fn pow(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    if let (Value::Integer(base), Value::Integer(exp)) = (&args[0], &args[1])
       && *exp >= 0
    {
        return u32::try_from(*exp)
            .ok()
            .and_then(|exp| base.checked_pow(exp))
            .map(Value::Integer)
            .ok_or(RuntimeError::Overflow { loc });
    }

    let base = args[0].as_real(loc)?;
    let exp = args[1].as_real(loc)?;
    Ok(Value::Real(base.powf(exp)))
}

/// Sine, in radians.
fn sin(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_real(loc)?.sin()))
}

/// Cosine, in radians.
fn cos(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_real(loc)?.cos()))
}

/// Factorial of a non-negative integer.
fn factorial(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let n = args[0].as_int(loc)?;
    if n < 0 {
        return Err(RuntimeError::InvalidArgument { details: format!("factorial of negative number {n}"),
                                                   loc });
    }

    let mut acc: i64 = 1;
    for factor in 2..=n {
        acc = acc.checked_mul(factor).ok_or(RuntimeError::Overflow { loc })?;
    }
    Ok(Value::Integer(acc))
}

/// Logarithm: natural with one argument, arbitrary base with two.
fn log(_context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let x = args[0].as_real(loc)?;
    if x <= 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("log of non-positive number {x}"),
                                                   loc });
    }

    if args.len() == 1 {
        return Ok(Value::Real(x.ln()));
    }

    let base = args[1].as_real(loc)?;
    if base <= 0.0 || (base - 1.0).abs() < f64::EPSILON {
        return Err(RuntimeError::InvalidArgument { details: format!("invalid logarithm base {base}"),
                                                   loc });
    }
    Ok(Value::Real(x.log(base)))
}
