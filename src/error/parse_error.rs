use crate::ast::Loc;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that does not fit the expected grammar.
    UnexpectedToken {
        /// A description of the offending token.
        token: String,
        /// The source location where the error occurred.
        loc:   Loc,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source location of the last consumed token.
        loc: Loc,
    },
    /// A specific token was expected but something else was found.
    ExpectedToken {
        /// The construct that was expected.
        expected: String,
        /// A description of the token actually found.
        found:    String,
        /// The source location where the error occurred.
        loc:      Loc,
    },
    /// A statement terminator is missing.
    ///
    /// Every statement ends with `;`, including statements that end in a
    /// closing brace such as `if`, `while` and `fun` bodies.
    MissingSemicolon {
        /// The construct the semicolon should follow.
        after: String,
        /// The source location where the error occurred.
        loc:   Loc,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, loc } => {
                write!(f, "Error at {loc}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { loc } => {
                write!(f, "Error at {loc}: Unexpected end of input.")
            },
            Self::ExpectedToken { expected, found, loc } => {
                write!(f, "Error at {loc}: Expected {expected}, found {found}.")
            },
            Self::MissingSemicolon { after, loc } => {
                write!(f, "Error at {loc}: Expected ';' after {after}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
