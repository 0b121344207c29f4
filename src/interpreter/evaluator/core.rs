use std::{
    collections::{HashMap, HashSet, VecDeque},
    io::{BufRead, Write},
    rc::Rc,
};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    ast::{BinaryOperator, DeclaredKind, Expr, Loc, Stmt},
    error::RuntimeError,
    interpreter::{labels::LabelTable, stdlib, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A variable binding.
///
/// Records the declared kind fixed at the first declaration, whether the
/// binding is single-assignment, and the current value.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The kind the variable was declared with.
    pub kind:      DeclaredKind,
    /// Whether the binding was declared `static`.
    pub is_static: bool,
    /// The current value.
    pub value:     Value,
}

impl Binding {
    /// Writes a new value through the binding, enforcing mutability and the
    /// declared kind.
    pub(crate) fn store(&mut self, name: &str, value: Value, loc: Loc) -> EvalResult<()> {
        if self.is_static {
            return Err(RuntimeError::ImmutableAssignment { name: name.to_string(),
                                                           loc });
        }
        if !self.kind.admits(&value) {
            return Err(RuntimeError::TypeMismatch { details: format!("cannot assign {} to {} variable '{name}'",
                                                                     value.kind_name(), self.kind),
                                                    loc });
        }
        self.value = value;
        Ok(())
    }
}

/// The control-flow outcome of executing a statement or sequence.
///
/// `goto` and `return` are not modeled as errors or exceptions; they are
/// ordinary signals that propagate outward through the enclosing sequences
/// until something handles them.
#[derive(Debug)]
pub enum Signal {
    /// Execution continues with the next statement.
    Next,
    /// A `return` is unwinding towards the enclosing call frame.
    Return {
        /// The returned value (`Nil` for a bare `return;`).
        value: Value,
        /// Where the `return` was written.
        loc:   Loc,
    },
    /// A `goto` is looking for the nearest enclosing sequence that defines
    /// its label.
    Jump {
        /// The target label.
        label: String,
        /// Where the `goto` was written.
        loc:   Loc,
    },
}

/// Where program output goes.
enum OutputSink {
    /// Write through to the process standard output.
    Stdout,
    /// Collect into a buffer, for tests and tooling.
    Buffer(String),
}

/// Where `STDIO.input` reads from.
enum InputSource {
    /// Read lines from the process standard input.
    Stdin,
    /// Pop pre-supplied lines, for tests and tooling.
    Lines(VecDeque<String>),
}

/// Stores the runtime execution context.
///
/// This struct holds the interpreter state: the global scope, the stack of
/// call-frame scopes, the set of `#include`d modules, the random-number
/// generator used by the RANDOM module, and the input/output endpoints.
/// All of it is threaded explicitly through the evaluator and the
/// standard-library dispatcher, so the core stays testable in isolation and
/// re-entrant across multiple program runs in one process.
pub struct Context {
    pub(crate) globals:  HashMap<String, Binding>,
    pub(crate) frames:   Vec<HashMap<String, Binding>>,
    pub(crate) includes: HashSet<String>,
    pub(crate) rng:      StdRng,
    out:   OutputSink,
    input: InputSource,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context wired to the process standard input and output.
    #[must_use]
    pub fn new() -> Self {
        Self { globals:  HashMap::new(),
               frames:   Vec::new(),
               includes: HashSet::new(),
               rng:      StdRng::from_entropy(),
               out:      OutputSink::Stdout,
               input:    InputSource::Stdin, }
    }

    /// Creates a context that collects printed output into a buffer and
    /// reads input from pre-supplied lines.
    #[must_use]
    pub fn captured() -> Self {
        Self { globals:  HashMap::new(),
               frames:   Vec::new(),
               includes: HashSet::new(),
               rng:      StdRng::from_entropy(),
               out:      OutputSink::Buffer(String::new()),
               input:    InputSource::Lines(VecDeque::new()), }
    }

    /// Supplies lines for `STDIO.input` to consume instead of the process
    /// standard input.
    pub fn feed_input<T>(&mut self, lines: T)
        where T: IntoIterator<Item = String>
    {
        match &mut self.input {
            InputSource::Lines(queue) => queue.extend(lines),
            source @ InputSource::Stdin => {
                *source = InputSource::Lines(lines.into_iter().collect());
            },
        }
    }

    /// Takes the collected output buffer, leaving it empty.
    ///
    /// Returns an empty string for contexts wired to standard output.
    pub fn take_output(&mut self) -> String {
        match &mut self.out {
            OutputSink::Buffer(buffer) => std::mem::take(buffer),
            OutputSink::Stdout => String::new(),
        }
    }

    /// Writes text to the configured output sink.
    pub(crate) fn write_out(&mut self, text: &str) {
        match &mut self.out {
            OutputSink::Stdout => {
                print!("{text}");
                let _ = std::io::stdout().flush();
            },
            OutputSink::Buffer(buffer) => buffer.push_str(text),
        }
    }

    /// Reads one line from the configured input source, without the
    /// trailing newline.
    pub(crate) fn read_line(&mut self, loc: Loc) -> EvalResult<String> {
        match &mut self.input {
            InputSource::Stdin => {
                let mut line = String::new();
                let read = std::io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(|e| RuntimeError::IoError { details: e.to_string(),
                                                         loc })?;
                if read == 0 {
                    return Err(RuntimeError::IoError { details: "end of input".to_string(),
                                                       loc });
                }
                Ok(line.trim_end_matches(['\n', '\r']).to_string())
            },
            InputSource::Lines(queue) => {
                queue.pop_front()
                     .ok_or_else(|| RuntimeError::IoError { details: "end of input".to_string(),
                                                            loc })
            },
        }
    }

    /// Executes a complete program.
    ///
    /// The top-level statement sequence runs to completion. A `goto` whose
    /// label reaches this level unresolved and a `return` outside of any
    /// function are both errors here rather than signals.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; execution stops
    /// immediately, nothing is recovered or retried.
    pub fn exec_program(&mut self, program: &[Stmt]) -> EvalResult<()> {
        match self.exec_sequence(program)? {
            Signal::Next => Ok(()),
            Signal::Jump { label, loc } => Err(RuntimeError::UnresolvedLabel { label, loc }),
            Signal::Return { loc, .. } => Err(RuntimeError::ReturnOutsideFunction { loc }),
        }
    }

    /// Executes a statement sequence, building its label table first.
    pub(crate) fn exec_sequence(&mut self, statements: &[Stmt]) -> EvalResult<Signal> {
        let labels = LabelTable::build(statements)?;
        self.exec_sequence_with(statements, &labels)
    }

    /// Executes a statement sequence against a pre-built label table.
    ///
    /// The sequence runs under an explicit program counter rather than
    /// structural recursion, so a `goto` can move the counter to any label
    /// within the sequence, forwards or backwards. Signals that the
    /// sequence cannot satisfy (a label it does not define, any `return`)
    /// propagate to the caller.
    pub(crate) fn exec_sequence_with(&mut self,
                                     statements: &[Stmt],
                                     labels: &LabelTable)
                                     -> EvalResult<Signal> {
        let mut pc = 0;

        while pc < statements.len() {
            match self.exec_statement(&statements[pc])? {
                Signal::Next => pc += 1,
                Signal::Jump { label, loc } => {
                    if let Some(target) = labels.position(&label) {
                        pc = target;
                    } else {
                        return Ok(Signal::Jump { label, loc });
                    }
                },
                ret @ Signal::Return { .. } => return Ok(ret),
            }
        }

        Ok(Signal::Next)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches based on expression variant: literals,
    /// variables, unary and binary operations, container literals,
    /// indexing, user function calls and standard-library member calls.
    pub(crate) fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, loc } => self.eval_variable(name, *loc),
            Expr::UnaryOp { op, expr, loc } => self.eval_unary_op(*op, expr, *loc),
            Expr::BinaryOp { left, op, right, loc } => match op {
                BinaryOperator::And | BinaryOperator::Or => {
                    self.eval_logic(*op, left, right, *loc)
                },
                _ => {
                    let lhs = self.eval(left)?;
                    let rhs = self.eval(right)?;
                    Self::eval_binary(*op, &lhs, &rhs, *loc)
                },
            },
            Expr::ArrayLiteral { elements, .. } => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(self.eval(element)?);
                }
                Ok(items.into())
            },
            Expr::DictLiteral { entries, .. } => {
                let mut map = HashMap::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key.clone(), self.eval(value)?);
                }
                Ok(Value::Dict(Rc::new(map)))
            },
            Expr::Index { object, index, loc } => self.eval_index(object, index, *loc),
            Expr::FunctionCall { name, arguments, loc } => {
                self.eval_function_call(name, arguments, *loc)
            },
            Expr::MemberCall { module,
                               function,
                               arguments,
                               loc, } => {
                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.eval(argument)?);
                }
                stdlib::core::dispatch(self, module, function, &args, *loc)
            },
        }
    }

    /// Evaluates a variable reference.
    fn eval_variable(&self, name: &str, loc: Loc) -> EvalResult<Value> {
        self.lookup(name)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             loc })
    }

    /// Looks up a binding: the active call frame first, then the global
    /// scope. Caller locals are invisible; scoping is static and shallow.
    pub(crate) fn lookup(&self, name: &str) -> Option<&Binding> {
        if let Some(frame) = self.frames.last()
           && let Some(binding) = frame.get(name)
        {
            return Some(binding);
        }
        self.globals.get(name)
    }

    /// Mutable counterpart of [`Context::lookup`].
    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut Binding> {
        if self.frames.last().is_some_and(|frame| frame.contains_key(name)) {
            return self.frames.last_mut().and_then(|frame| frame.get_mut(name));
        }
        self.globals.get_mut(name)
    }

    /// The scope new declarations land in: the active call frame if one
    /// exists, otherwise the global scope.
    pub(crate) fn current_scope_mut(&mut self) -> &mut HashMap<String, Binding> {
        if let Some(frame) = self.frames.last_mut() {
            frame
        } else {
            &mut self.globals
        }
    }

    /// Declares a new binding in the current scope.
    ///
    /// Declaration is the one write a `static` binding accepts. The
    /// initializer must already satisfy the declared kind.
    pub(crate) fn declare(&mut self,
                          kind: DeclaredKind,
                          is_static: bool,
                          name: &str,
                          value: Value,
                          loc: Loc)
                          -> EvalResult<()> {
        if self.current_scope_mut().contains_key(name) {
            return Err(RuntimeError::VariableRedeclared { name: name.to_string(),
                                                          loc });
        }
        if !kind.admits(&value) {
            return Err(RuntimeError::TypeMismatch { details: format!("cannot initialise {kind} variable '{name}' with {}",
                                                                     value.kind_name()),
                                                    loc });
        }
        self.current_scope_mut().insert(name.to_string(),
                                        Binding { kind,
                                                  is_static,
                                                  value });
        Ok(())
    }

    /// Assigns to an existing binding, enforcing mutability and kind.
    pub(crate) fn assign_named(&mut self, name: &str, value: Value, loc: Loc) -> EvalResult<()> {
        match self.lookup_mut(name) {
            Some(binding) => binding.store(name, value, loc),
            None => {
                Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                      loc })
            },
        }
    }
}
