use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{DeclaredKind, Expr, Loc},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Binding, Context, EvalResult, Signal},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a call of a user-defined function.
    ///
    /// The name must resolve to a `Function` value. Arguments are bound to
    /// parameters positionally as `var` locals in a fresh call frame; the
    /// body sees that frame plus the global scope and nothing of the
    /// caller's locals. Falling off the end of the body without `return`
    /// yields `Nil`. A `goto` that escapes the body is an unresolved label,
    /// because jumps never cross function boundaries.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     loc: Loc)
                                     -> EvalResult<Value> {
        let def = match self.lookup(name) {
            Some(binding) => match &binding.value {
                Value::Function(def) => Rc::clone(def),
                other => {
                    return Err(RuntimeError::CallError { details: format!("'{name}' is a {} value, not a function",
                                                                          other.kind_name()),
                                                         loc });
                },
            },
            None => {
                return Err(RuntimeError::CallError { details: format!("undefined function '{name}'"),
                                                     loc });
            },
        };

        if arguments.len() != def.params.len() {
            return Err(RuntimeError::CallError { details: format!("function '{name}' expects {} arguments, got {}",
                                                                  def.params.len(),
                                                                  arguments.len()),
                                                 loc });
        }

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument)?);
        }

        let mut frame = HashMap::with_capacity(def.params.len());
        for (param, value) in def.params.iter().zip(args) {
            frame.insert(param.clone(),
                         Binding { kind: DeclaredKind::Var,
                                   is_static: false,
                                   value });
        }

        self.frames.push(frame);
        let outcome = self.exec_sequence(&def.body);
        self.frames.pop();

        match outcome? {
            Signal::Next => Ok(Value::Nil),
            Signal::Return { value, .. } => Ok(value),
            Signal::Jump { label, loc } => Err(RuntimeError::UnresolvedLabel { label, loc }),
        }
    }
}
