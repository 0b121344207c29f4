use crate::{
    ast::{BinaryOperator, Loc},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// `+` concatenates when at least one operand is a string; the other
    /// operand is rendered the way `print` would render it. Otherwise both
    /// operands must be numeric. Two integers stay in integer arithmetic
    /// with overflow checking, and `/` truncates toward zero. As soon as a
    /// real is involved the operation is carried out in floating point.
    /// Division and modulo by zero fail for both numeric categories.
    pub(crate) fn eval_scalar_op(op: BinaryOperator,
                                 left: &Value,
                                 right: &Value,
                                 loc: Loc)
                                 -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Integer, Real, Str};

        if op == Add && (matches!(left, Str(_)) || matches!(right, Str(_))) {
            return Ok(Str(format!("{left}{right}")));
        }

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => {
                        if *b == 0 {
                            return Err(RuntimeError::DivisionByZero { loc });
                        }
                        a.checked_div(*b)
                    },
                    Mod => {
                        if *b == 0 {
                            return Err(RuntimeError::DivisionByZero { loc });
                        }
                        a.checked_rem(*b)
                    },
                    _ => unreachable!(),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { loc })
            },
            (l, r) if l.is_numeric() && r.is_numeric() => {
                let left = l.as_real(loc)?;
                let right = r.as_real(loc)?;

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => {
                                if right == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { loc });
                                }
                                left / right
                            },
                            Mod => {
                                if right == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { loc });
                                }
                                left % right
                            },
                            _ => unreachable!(),
                        }))
            },
            _ => {
                Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                                  left.kind_name(),
                                                                  right.kind_name()),
                                                 loc })
            },
        }
    }
}
