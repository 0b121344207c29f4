/// Core evaluation logic and context management.
///
/// Contains the execution context, the program-counter-driven sequence
/// machine, control-flow signals and the expression dispatcher.
pub mod core;

/// Statement execution.
///
/// Implements the logic for each statement kind: declarations, the
/// assignment family, control flow, functions, printing, imports and jumps.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, string concatenation, comparisons and short-circuiting
/// logical operators.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Container indexing.
///
/// Implements array and dictionary element access and index assignment.
pub mod index;

/// Function evaluation.
///
/// Handles user-defined function calls, argument binding, call frames and
/// return-value computation.
pub mod function;
