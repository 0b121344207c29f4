use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{DeclaredKind, FunctionDef, LiteralValue, Loc},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns and conditions. Every consumption site
/// matches exhaustively on this union; there is no implicit coercion beyond
/// the documented integer-to-real promotion in mixed arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit signed).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A text string.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and required by `if`
    /// and `while` conditions.
    Bool(bool),
    /// An ordered array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A dictionary mapping string keys to values. Iteration order is
    /// irrelevant for lookup; rendering sorts keys so output is stable.
    Dict(Rc<HashMap<String, Self>>),
    /// A user-defined function bound by a `fun` declaration.
    Function(Rc<FunctionDef>),
    /// The absence of a value, e.g. the result of a function that falls off
    /// the end of its body without `return`.
    Nil,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Str(s) => s.as_str().into(),
            LiteralValue::Bool(b) => (*b).into(),
        }
    }
}

impl Value {
    /// Returns the name of this value's runtime type, as used in diagnostic
    /// messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::Str(_) => "str",
            Self::Bool(_) => "bool",
            Self::Array(_) => "ary",
            Self::Dict(_) => "dic",
            Self::Function(_) => "fun",
            Self::Nil => "nil",
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions in `if` and `while` statements and for logical
    /// operators.
    pub fn as_bool(&self, loc: Loc) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("expected bool, found {}",
                                                                  other.kind_name()),
                                                 loc })
            },
        }
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    pub fn as_int(&self, loc: Loc) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("expected int, found {}",
                                                                  other.kind_name()),
                                                 loc })
            },
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Integer` and `Real`. For integers the conversion fails if
    /// the value is too large to be represented as `f64` exactly.
    pub fn as_real(&self, loc: Loc) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => {
                i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { loc })
            },
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("expected a number, found {}",
                                                                  other.kind_name()),
                                                 loc })
            },
        }
    }

    /// Borrows the value as a string slice, or returns an error if not a
    /// string.
    pub fn as_str(&self, loc: Loc) -> EvalResult<&str> {
        match self {
            Self::Str(s) => Ok(s),
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("expected str, found {}",
                                                                  other.kind_name()),
                                                 loc })
            },
        }
    }

    /// Borrows the value as an array, or returns an error if not an array.
    pub fn as_array(&self, loc: Loc) -> EvalResult<&Vec<Self>> {
        match self {
            Self::Array(items) => Ok(items),
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("expected ary, found {}",
                                                                  other.kind_name()),
                                                 loc })
            },
        }
    }

    /// Returns `true` if the value is numeric (`Integer` or `Real`).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Renders the value the way it appears inside a container: strings are
    /// quoted, everything else renders as at top level.
    fn fmt_element(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{s}\""),
            other => write!(f, "{other}"),
        }
    }
}

impl DeclaredKind {
    /// Tests whether a runtime value satisfies this declared kind.
    ///
    /// `Var` admits every value. The container kinds constrain only the
    /// container itself, never its element types. `Real` values are admitted
    /// only by `Var` since the surface grammar has no floating-point kind.
    ///
    /// ## Example
    /// ```
    /// use lumen::{ast::DeclaredKind, interpreter::value::core::Value};
    ///
    /// assert!(DeclaredKind::Int.admits(&Value::Integer(3)));
    /// assert!(!DeclaredKind::Int.admits(&Value::Str("3".into())));
    /// assert!(DeclaredKind::Var.admits(&Value::Real(0.5)));
    /// ```
    #[must_use]
    pub const fn admits(&self, value: &Value) -> bool {
        match self {
            Self::Var => true,
            Self::Int => matches!(value, Value::Integer(_)),
            Self::Str => matches!(value, Value::Str(_)),
            Self::Bool => matches!(value, Value::Bool(_)),
            Self::Ary => matches!(value, Value::Array(_)),
            Self::Dic => matches!(value, Value::Dict(_)),
        }
    }
}

impl std::fmt::Display for Value {
    /// ## Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use lumen::interpreter::value::core::Value;
    ///
    /// let items = vec![Value::Integer(1), Value::Str("two".into())];
    /// let array = Value::Array(Rc::new(items));
    ///
    /// assert_eq!(array.to_string(), "[1, \"two\"]");
    /// assert_eq!(Value::Nil.to_string(), "nil");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    value.fmt_element(f)?;
                }
                write!(f, "]")
            },
            Self::Dict(entries) => {
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();

                write!(f, "{{")?;
                for (index, key) in keys.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\": ")?;
                    entries[key.as_str()].fmt_element(f)?;
                }
                write!(f, "}}")
            },
            Self::Function(def) => write!(f, "<fun {}>", def.name),
            Self::Nil => write!(f, "nil"),
        }
    }
}
