use crate::{
    ast::{Expr, Loc, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// Negation applies to integers (with overflow checking) and reals;
    /// logical NOT applies to booleans only.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                expr: &Expr,
                                loc: Loc)
                                -> EvalResult<Value> {
        let value = self.eval(expr)?;

        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { loc }),
                Value::Real(r) => Ok(Value::Real(-r)),
                other => {
                    Err(RuntimeError::TypeMismatch { details: format!("cannot negate {}",
                                                                      other.kind_name()),
                                                     loc })
                },
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(loc)?)),
        }
    }
}
