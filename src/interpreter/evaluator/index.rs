use std::rc::Rc;

use crate::{
    ast::{Expr, Loc},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Validates an array index and converts it to a position.
///
/// Indices must be integers; negative or past-the-end positions raise
/// [`RuntimeError::IndexOutOfRange`].
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn index_position(index: &Value, len: usize, loc: Loc) -> EvalResult<usize> {
    let raw = index.as_int(loc)?;
    if raw < 0 || raw as usize >= len {
        return Err(RuntimeError::IndexOutOfRange { len,
                                                   found: raw,
                                                   loc });
    }
    Ok(raw as usize)
}

impl Context {
    /// Evaluates an indexing expression, `a[i]` or `d["key"]`.
    ///
    /// Arrays take integer indices; dictionaries take string keys, and a
    /// missing key is [`RuntimeError::KeyNotFound`].
    pub(crate) fn eval_index(&mut self,
                             object: &Expr,
                             index: &Expr,
                             loc: Loc)
                             -> EvalResult<Value> {
        let container = self.eval(object)?;
        let key = self.eval(index)?;

        match container {
            Value::Array(items) => {
                let position = index_position(&key, items.len(), loc)?;
                Ok(items[position].clone())
            },
            Value::Dict(entries) => {
                let key = key.as_str(index.loc())?;
                entries.get(key)
                       .cloned()
                       .ok_or_else(|| RuntimeError::KeyNotFound { key: key.to_string(),
                                                                  loc })
            },
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("cannot index into {}",
                                                                  other.kind_name()),
                                                 loc })
            },
        }
    }

    /// Executes an index assignment, `a[i] = e;` or `d["key"] = e;`.
    ///
    /// The element or entry is replaced in place; the container keeps its
    /// declared kind. A dictionary assignment inserts the key when it is
    /// absent. Writing through an index into a `static` container counts as
    /// a write and is rejected.
    pub(crate) fn exec_index_assign(&mut self,
                                    name: &str,
                                    index: &Expr,
                                    value: &Expr,
                                    loc: Loc)
                                    -> EvalResult<()> {
        let key = self.eval(index)?;
        let new_value = self.eval(value)?;

        let Some(binding) = self.lookup_mut(name) else {
            return Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                         loc });
        };
        if binding.is_static {
            return Err(RuntimeError::ImmutableAssignment { name: name.to_string(),
                                                           loc });
        }

        match &mut binding.value {
            Value::Array(items) => {
                let position = index_position(&key, items.len(), loc)?;
                Rc::make_mut(items)[position] = new_value;
                Ok(())
            },
            Value::Dict(entries) => {
                let key = key.as_str(loc)?.to_string();
                Rc::make_mut(entries).insert(key, new_value);
                Ok(())
            },
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("cannot index into {} variable '{name}'",
                                                                  other.kind_name()),
                                                 loc })
            },
        }
    }
}
