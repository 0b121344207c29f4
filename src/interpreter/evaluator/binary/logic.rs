use crate::{
    ast::{BinaryOperator, Expr, Loc},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a short-circuiting logical operation.
    ///
    /// Unlike the other binary operators this receives the operand
    /// expressions, not their values: when the left operand already
    /// determines the result the right expression is never evaluated, so
    /// its side effects (and its errors) never happen. Both operands must
    /// be booleans when they are evaluated.
    pub(crate) fn eval_logic(&mut self,
                             op: BinaryOperator,
                             left: &Expr,
                             right: &Expr,
                             _loc: Loc)
                             -> EvalResult<Value> {
        use BinaryOperator::{And, Or};

        let lhs = self.eval(left)?.as_bool(left.loc())?;
        let decided = match op {
            And => !lhs,
            Or => lhs,
            _ => unreachable!("only logical operators reach eval_logic"),
        };
        if decided {
            return Ok(Value::Bool(lhs));
        }

        let rhs = self.eval(right)?.as_bool(right.loc())?;
        Ok(Value::Bool(rhs))
    }
}
