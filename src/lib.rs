//! # proofscript
//!
//! proofscript is a small imperative scripting language written in Rust.
//! It parses and evaluates programs made of integer, real and boolean
//! arithmetic, variables, `if`/`else`, `while` and inclusive `for` loops.
//! Every loop is bounded by an iteration ceiling so that runaway programs
//! terminate with an error instead of hanging.

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

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{evaluator::core::Evaluator, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches the source line to every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every error carries the line it refers to.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

pub use interpreter::{evaluator::core::EvalConfig, value::Value};

/// Parses and runs a program with the default configuration.
///
/// Returns the value of the last top-level statement, or `None` when the
/// program is empty or its last statement produces nothing (an assignment, a
/// loop, an `if` without a taken branch).
///
/// # Errors
/// A [`error::ParseError`] if the source is malformed, otherwise the first
/// [`error::RuntimeError`] raised while running it.
///
/// # Examples
/// ```
/// use proofscript::{Value, interpret};
///
/// let source = "total = 0\nfor i in 1 to 4 { total += i }\ntotal";
/// assert_eq!(interpret(source).unwrap(), Some(Value::Integer(10)));
///
/// assert_eq!(interpret("x = 1").unwrap(), None);
/// assert!(interpret("y + 1").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Option<Value>, Error> {
    interpret_with(source, EvalConfig::default())
}

/// Parses and runs a program with an explicit configuration.
///
/// # Examples
/// ```
/// use proofscript::{EvalConfig, error::{Error, RuntimeError}, interpret_with};
///
/// let config = EvalConfig { max_iterations: 3 };
/// let result = interpret_with("while true { }", config);
///
/// assert!(matches!(result,
///                  Err(Error::Runtime(RuntimeError::LoopLimitExceeded { limit: 3, .. }))));
/// ```
pub fn interpret_with(source: &str, config: EvalConfig) -> Result<Option<Value>, Error> {
    let program = parse_program(source)?;
    tracing::debug!(bytes = source.len(), "parsed program");

    let mut evaluator = Evaluator::with_config(config);
    let value = match &program {
        Expr::Block { statements, .. } => evaluator.eval_toplevel(statements)?,
        other => evaluator.eval(other)?,
    };

    Ok(value)
}
