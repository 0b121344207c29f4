/// Core parsing entry points and the expression entry rule.
///
/// Contains the program-level parse loop and the top of the expression
/// precedence chain.
pub mod core;

/// Statement parsing.
///
/// Implements one grammar rule per statement category: declarations,
/// assignments, control flow, functions, labels, imports and print.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences and enforces the mandatory
/// semicolon after every block-ending statement.
pub mod block;

/// Binary operator parsing.
///
/// Implements the operator precedence chain from logical OR down to
/// multiplication.
pub mod binary;

/// Unary, postfix and primary parsing.
///
/// Handles `!` and `-`, indexing, calls, member calls, literals, grouping,
/// and array and dictionary literals.
pub mod unary;

/// Utility functions for parsing.
///
/// Provides helpers and reusable routines shared by the parsing logic.
pub mod utils;
