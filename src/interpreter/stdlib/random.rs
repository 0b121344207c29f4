use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

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
    "seed"    => { arity: Arity::Exact(1), func: seed },
    "randint" => { arity: Arity::Exact(2), func: randint },
    "random"  => { arity: Arity::Exact(0), func: random },
    "choice"  => { arity: Arity::Exact(1), func: choice },
    "shuffle" => { arity: Arity::Exact(1), func: shuffle },
}

/// Re-seeds the context's generator.
///
/// Two runs seeded with the same value produce identical sequences from
/// every RANDOM function; this is the module's determinism contract.
#[allow(clippy::cast_sign_loss)]
fn seed(context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let n = args[0].as_int(loc)?;
    context.rng = StdRng::seed_from_u64(n as u64);
    Ok(Value::Nil)
}

/// A uniformly distributed integer in the inclusive range `[lo, hi]`.
fn randint(context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let lo = args[0].as_int(loc)?;
    let hi = args[1].as_int(loc)?;
    if lo > hi {
        return Err(RuntimeError::InvalidRange { details: format!("randint bounds {lo}..{hi} are empty"),
                                                loc });
    }
    Ok(Value::Integer(context.rng.gen_range(lo..=hi)))
}

/// A uniformly distributed real in `[0, 1)`.
fn random(context: &mut Context, _args: &[Value], _loc: Loc) -> EvalResult<Value> {
    Ok(Value::Real(context.rng.gen_range(0.0..1.0)))
}

/// A uniformly chosen element of a non-empty array.
fn choice(context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let items = args[0].as_array(loc)?;
    if items.is_empty() {
        return Err(RuntimeError::InvalidArgument { details: "choice from an empty array".to_string(),
                                                   loc });
    }
    let position = context.rng.gen_range(0..items.len());
    Ok(items[position].clone())
}

/// A new array with the elements of the argument in shuffled order.
///
/// Values are immutable expression results, so the argument itself is left
/// untouched; assign the result back to keep it.
fn shuffle(context: &mut Context, args: &[Value], loc: Loc) -> EvalResult<Value> {
    let mut items = args[0].as_array(loc)?.clone();
    items.shuffle(&mut context.rng);
    Ok(items.into())
}
