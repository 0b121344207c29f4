use crate::{
    ast::{BinaryOperator, Loc},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an equality or relational comparison.
    ///
    /// Operand types must be compatible: numbers compare with numbers (an
    /// integer is promoted when compared against a real), strings with
    /// strings, and for equality also booleans, arrays, dictionaries and
    /// nil with their own kind. Everything else is a type mismatch; there
    /// is no implicit cross-type ordering.
    pub(crate) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  loc: Loc)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};
        use Value::{Array, Bool, Dict, Integer, Nil, Str};

        if matches!(op, Equal | NotEqual) {
            let equal = match (left, right) {
                (Integer(a), Integer(b)) => a == b,
                (l, r) if l.is_numeric() && r.is_numeric() => {
                    l.as_real(loc)? == r.as_real(loc)?
                },
                (Str(a), Str(b)) => a == b,
                (Bool(a), Bool(b)) => a == b,
                (Array(a), Array(b)) => a == b,
                (Dict(a), Dict(b)) => a == b,
                (Nil, Nil) => true,
                _ => {
                    return Err(RuntimeError::TypeMismatch { details: format!("cannot compare {} with {}",
                                                                             left.kind_name(),
                                                                             right.kind_name()),
                                                            loc });
                },
            };
            return Ok(Bool(if op == Equal { equal } else { !equal }));
        }

        let ordering = match (left, right) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (l, r) if l.is_numeric() && r.is_numeric() => {
                let a = l.as_real(loc)?;
                let b = r.as_real(loc)?;
                a.partial_cmp(&b)
                 .ok_or_else(|| RuntimeError::TypeMismatch { details: "cannot order NaN".to_string(),
                                                             loc })?
            },
            (Str(a), Str(b)) => a.cmp(b),
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("cannot order {} against {}",
                                                                         left.kind_name(),
                                                                         right.kind_name()),
                                                        loc });
            },
        };

        let result = match op {
            Less => ordering.is_lt(),
            Greater => ordering.is_gt(),
            LessEqual => ordering.is_le(),
            GreaterEqual => ordering.is_ge(),
            _ => unreachable!(),
        };
        Ok(Bool(result))
    }
}
