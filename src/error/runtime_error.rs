use crate::ast::Loc;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// A value's runtime type did not satisfy the operation or the target
    /// variable's declared kind.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source location where the error occurred.
        loc:     Loc,
    },
    /// Tried to write to a `static` binding after its declaration.
    ImmutableAssignment {
        /// The name of the variable.
        name: String,
        /// The source location where the error occurred.
        loc:  Loc,
    },
    /// Tried to use a variable that was never declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source location where the error occurred.
        loc:  Loc,
    },
    /// Tried to declare a name that already exists in the same scope.
    VariableRedeclared {
        /// The name of the variable.
        name: String,
        /// The source location where the error occurred.
        loc:  Loc,
    },
    /// A `goto` target could not be found in any enclosing sequence.
    UnresolvedLabel {
        /// The label name.
        label: String,
        /// The source location of the `goto`.
        loc:   Loc,
    },
    /// The same label appears twice within one statement sequence.
    DuplicateLabel {
        /// The label name.
        label: String,
        /// The source location of the second definition.
        loc:   Loc,
    },
    /// A call failed: undefined function, non-callable value, or wrong
    /// argument count.
    CallError {
        /// Details about the failure.
        details: String,
        /// The source location of the call.
        loc:     Loc,
    },
    /// A `return` statement executed outside of any function body.
    ReturnOutsideFunction {
        /// The source location of the `return`.
        loc: Loc,
    },
    /// Tried to access an array element outside the valid range.
    IndexOutOfRange {
        /// The length of the array.
        len:   usize,
        /// The index that was actually requested.
        found: i64,
        /// The source location where the error occurred.
        loc:   Loc,
    },
    /// A dictionary lookup used a key that is not present.
    KeyNotFound {
        /// The missing key.
        key: String,
        /// The source location where the error occurred.
        loc: Loc,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source location where the error occurred.
        loc: Loc,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source location where the error occurred.
        loc: Loc,
    },
    /// An integer was too large to participate in floating-point math
    /// without losing precision.
    LiteralTooLarge {
        /// The source location where the error occurred.
        loc: Loc,
    },
    /// A `module.function` call could not be resolved.
    UnknownLibraryCall {
        /// Details naming the module or function that failed to resolve.
        details: String,
        /// The source location of the call.
        loc:     Loc,
    },
    /// A standard-library function received an unusable argument.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source location of the call.
        loc:     Loc,
    },
    /// A numeric range was empty or nonsensical.
    InvalidRange {
        /// Details describing the range.
        details: String,
        /// The source location of the call.
        loc:     Loc,
    },
    /// A console or file operation failed.
    IoError {
        /// Details about the failure.
        details: String,
        /// The source location of the call.
        loc:     Loc,
    },
    /// A regular expression failed to compile.
    RegexSyntaxError {
        /// The compilation failure reported by the regex engine.
        details: String,
        /// The source location of the call.
        loc:     Loc,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { details, loc } => {
                write!(f, "Error at {loc}: Type mismatch: {details}.")
            },
            Self::ImmutableAssignment { name, loc } => {
                write!(f, "Error at {loc}: Cannot reassign static variable '{name}'.")
            },
            Self::UndefinedVariable { name, loc } => {
                write!(f, "Error at {loc}: Undefined variable '{name}'.")
            },
            Self::VariableRedeclared { name, loc } => {
                write!(f, "Error at {loc}: '{name}' is already declared in this scope.")
            },
            Self::UnresolvedLabel { label, loc } => {
                write!(f, "Error at {loc}: Cannot resolve label '{label}' from here.")
            },
            Self::DuplicateLabel { label, loc } => {
                write!(f, "Error at {loc}: Duplicate label '{label}'.")
            },
            Self::CallError { details, loc } => {
                write!(f, "Error at {loc}: Call error: {details}.")
            },
            Self::ReturnOutsideFunction { loc } => {
                write!(f, "Error at {loc}: 'return' outside of a function.")
            },
            Self::IndexOutOfRange { len, found, loc } => {
                write!(f,
                       "Error at {loc}: Index {found} is out of range for an array of length {len}.")
            },
            Self::KeyNotFound { key, loc } => {
                write!(f, "Error at {loc}: Key \"{key}\" not found.")
            },
            Self::DivisionByZero { loc } => write!(f, "Error at {loc}: Division by zero."),
            Self::Overflow { loc } => {
                write!(f, "Error at {loc}: Integer overflow while computing result.")
            },
            Self::LiteralTooLarge { loc } => {
                write!(f, "Error at {loc}: Integer is too large for floating-point math.")
            },
            Self::UnknownLibraryCall { details, loc } => {
                write!(f, "Error at {loc}: Unknown library call: {details}.")
            },
            Self::InvalidArgument { details, loc } => {
                write!(f, "Error at {loc}: Invalid argument: {details}.")
            },
            Self::InvalidRange { details, loc } => {
                write!(f, "Error at {loc}: Invalid range: {details}.")
            },
            Self::IoError { details, loc } => write!(f, "Error at {loc}: I/O error: {details}."),
            Self::RegexSyntaxError { details, loc } => {
                write!(f, "Error at {loc}: Regex syntax error: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
