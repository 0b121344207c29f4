/// Lexical errors.
///
/// Defines the error types raised while turning source text into tokens,
/// such as unterminated strings or comments and invalid characters.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST from the
/// token stream: unexpected tokens, missing statement terminators, and
/// premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution: type mismatches, immutable re-assignment, unresolved labels,
/// call failures, container access failures, division by zero, and the
/// domain errors raised by standard-library implementations.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The unified error type returned by the run entry points.
///
/// Lexing and parsing failures abort compilation before any statement runs;
/// runtime failures abort the current program run immediately. No error is
/// ever downgraded to a warning or silently recovered.
pub enum LumenError {
    /// A failure while tokenizing the source text.
    Lex(LexError),
    /// A failure while parsing the token stream.
    Parse(ParseError),
    /// A failure while executing the program.
    Runtime(RuntimeError),
}

impl std::fmt::Display for LumenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LumenError {}

impl From<LexError> for LumenError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for LumenError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for LumenError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
