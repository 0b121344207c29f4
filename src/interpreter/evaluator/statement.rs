use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, DeclaredKind, Expr, Loc, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Signal},
        labels::LabelTable,
        value::core::Value,
    },
};

impl Context {
    /// Executes a single statement and reports how control should continue.
    ///
    /// Most statements complete with [`Signal::Next`]. `goto` produces a
    /// [`Signal::Jump`] and `return` a [`Signal::Return`]; both are handled
    /// by the enclosing sequence machinery, never here.
    pub(crate) fn exec_statement(&mut self, statement: &Stmt) -> EvalResult<Signal> {
        match statement {
            Stmt::VarDecl { kind,
                            is_static,
                            name,
                            value,
                            loc, } => {
                let value = self.eval(value)?;
                self.declare(*kind, *is_static, name, value, *loc)?;
                Ok(Signal::Next)
            },
            Stmt::Assign { name, value, loc } => {
                let value = self.eval(value)?;
                self.assign_named(name, value, *loc)?;
                Ok(Signal::Next)
            },
            Stmt::CompoundAssign { name, op, value, loc } => {
                let rhs = self.eval(value)?;
                self.apply_in_place(name, *op, &rhs, *loc)?;
                Ok(Signal::Next)
            },
            Stmt::Increment { name, loc } => {
                self.apply_in_place(name, BinaryOperator::Add, &Value::Integer(1), *loc)?;
                Ok(Signal::Next)
            },
            Stmt::Decrement { name, loc } => {
                self.apply_in_place(name, BinaryOperator::Sub, &Value::Integer(1), *loc)?;
                Ok(Signal::Next)
            },
            Stmt::IndexAssign { name, index, value, loc } => {
                self.exec_index_assign(name, index, value, *loc)?;
                Ok(Signal::Next)
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                let chosen = self.eval(condition)?.as_bool(condition.loc())?;
                if chosen {
                    self.exec_sequence(then_branch)
                } else if let Some(branch) = else_branch {
                    self.exec_sequence(branch)
                } else {
                    Ok(Signal::Next)
                }
            },
            Stmt::While { condition, body, .. } => self.exec_while(condition, body),
            Stmt::Function(def) => {
                self.declare(DeclaredKind::Var,
                             true,
                             &def.name,
                             Value::Function(Rc::new(def.clone())),
                             def.loc)?;
                Ok(Signal::Next)
            },
            Stmt::Return { value, loc } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                Ok(Signal::Return { value, loc: *loc })
            },
            Stmt::Call { expr, .. } | Stmt::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Signal::Next)
            },
            Stmt::Print { args, .. } => {
                let mut rendered = Vec::with_capacity(args.len());
                for arg in args {
                    rendered.push(self.eval(arg)?.to_string());
                }
                let line = rendered.join(" ") + "\n";
                self.write_out(&line);
                Ok(Signal::Next)
            },
            Stmt::Goto { label, loc } => Ok(Signal::Jump { label: label.clone(),
                                                           loc:   *loc, }),
            Stmt::Label { .. } => Ok(Signal::Next),
            Stmt::Include { module, .. } => {
                self.includes.insert(module.to_ascii_uppercase());
                Ok(Signal::Next)
            },
        }
    }

    /// Executes a `while` loop.
    ///
    /// The condition must be a boolean and is re-evaluated before every
    /// iteration. The body's label table is built once and reused across
    /// iterations; a jump the body cannot satisfy abandons the loop without
    /// re-checking the condition, exactly like a `return`.
    fn exec_while(&mut self, condition: &Expr, body: &[Stmt]) -> EvalResult<Signal> {
        let labels = LabelTable::build(body)?;

        loop {
            if !self.eval(condition)?.as_bool(condition.loc())? {
                return Ok(Signal::Next);
            }
            match self.exec_sequence_with(body, &labels)? {
                Signal::Next => {},
                other => return Ok(other),
            }
        }
    }

    /// Reads a variable, combines it with `rhs` through `op`, and writes
    /// the result back. Shared by `+=`, `-=`, `++` and `--`; the write is
    /// an ordinary assignment and is type-checked as one.
    fn apply_in_place(&mut self,
                      name: &str,
                      op: BinaryOperator,
                      rhs: &Value,
                      loc: Loc)
                      -> EvalResult<()> {
        let current = match self.lookup(name) {
            Some(binding) => binding.value.clone(),
            None => {
                return Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             loc });
            },
        };
        let result = Self::eval_binary(op, &current, rhs, loc)?;
        self.assign_named(name, result, loc)
    }
}
