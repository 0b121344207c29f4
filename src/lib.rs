//! # lumen
//!
//! lumen is the front end and execution core of the Lumen scripting
//! language: a lexer, a recursive-descent parser, a typed-variable runtime,
//! an evaluator with non-local `goto` control flow, and a dispatcher for
//! the fixed set of standard-library modules.
//!
//! The pipeline is one-way: source text becomes tokens, tokens become an
//! AST, and the evaluator drives execution, calling back into the
//! standard-library dispatcher for `module.function(...)` calls. Every
//! failure carries a source location and a category; lex and parse errors
//! abort before any statement runs, runtime errors abort the run
//! immediately.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer::tokenize, parser::core::parse_program};
pub use crate::{error::LumenError, interpreter::evaluator::core::Context};

/// Defines the structure of parsed code.
///
/// This module declares the `Stmt` and `Expr` enums and related types that
/// represent the syntactic structure of source code as a tree, plus the
/// declared-kind model shared by the parser (declaration syntax) and the
/// evaluator (enforcement). The AST is built by the parser and traversed
/// read-only by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source locations to AST nodes for error reporting.
/// - Defines the declared kinds and the location type used everywhere.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while compiling or
/// running code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions and
/// source locations.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches locations and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, label resolution, evaluation,
/// value representations and the standard-library dispatcher to provide a
/// complete runtime for Lumen programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, stdlib.
/// - Provides the execution context and the statement machinery.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between integer and floating-point types without
///   silent data loss.
pub mod util;

/// Options controlling a program run.
///
/// These mirror the command-line surface: `debug` dumps the token stream
/// and the parsed AST to stderr before execution, `verbose` reports each
/// phase. Neither changes program semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Dump tokens and the AST to stderr.
    pub debug:   bool,
    /// Report compilation phases on stderr.
    pub verbose: bool,
}

/// The trace of a completed program execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Everything the program printed, in order.
    pub output: String,
    /// The program's exit status. Lumen has no in-language exit construct,
    /// so a run that completes reports 0; failed runs surface as errors
    /// instead.
    pub status: i32,
}

/// Compiles and runs a program against a caller-supplied context.
///
/// The context decides where `print` output goes and where `STDIO.input`
/// reads from; the CLI passes a context wired to the process streams so
/// output appears as the program runs.
///
/// # Errors
/// Returns a [`LumenError`] carrying the location and category of the first
/// failure. Lex and parse errors mean nothing was executed.
pub fn run_with_context(source: &str,
                        options: &Options,
                        context: &mut Context)
                        -> Result<(), LumenError> {
    if options.verbose {
        eprintln!("tokenizing...");
    }
    let tokens = tokenize(source)?;
    if options.debug {
        eprintln!("tokens:");
        for (token, loc) in &tokens {
            eprintln!("  {loc}: {token:?}");
        }
    }

    if options.verbose {
        eprintln!("parsing...");
    }
    let program = parse_program(&tokens)?;
    if options.debug {
        eprintln!("statements:");
        for (index, statement) in program.iter().enumerate() {
            eprintln!("  [{index}] {statement:?}");
        }
    }

    if options.verbose {
        eprintln!("executing {} top-level statements...", program.len());
    }
    context.exec_program(&program)?;
    Ok(())
}

/// Compiles and runs a program, capturing its printed output.
///
/// This is the entry point for tests and tooling: output is collected into
/// the returned [`Execution`] instead of going to the process standard
/// output, and `STDIO.input` reads from lines supplied via
/// [`Context::feed_input`] (none by default).
///
/// # Errors
/// Returns a [`LumenError`] carrying the location and category of the first
/// failure.
///
/// # Examples
/// ```
/// use lumen::{Options, run_program};
///
/// let execution = run_program("int x 2 + 3;\nprint x;", &Options::default()).unwrap();
/// assert_eq!(execution.output, "5\n");
///
/// // A type error: 'int' variables never hold strings.
/// let result = run_program("int x \"five\";", &Options::default());
/// assert!(result.is_err());
/// ```
pub fn run_program(source: &str, options: &Options) -> Result<Execution, LumenError> {
    let mut context = Context::captured();
    run_with_context(source, options, &mut context)?;

    Ok(Execution { output: context.take_output(),
                   status: 0, })
}
