use crate::{
    ast::{BinaryOperator, Loc},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two already-computed values.
    ///
    /// Arithmetic operators go to the scalar handler, comparisons to the
    /// comparison handler. The logical operators never reach this function:
    /// they short-circuit and are dispatched at the expression level, where
    /// the right operand is still unevaluated.
    pub(crate) fn eval_binary(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              loc: Loc)
                              -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right, loc),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, loc)
            },
            And | Or => unreachable!("logical operators are dispatched before operand evaluation"),
        }
    }
}
