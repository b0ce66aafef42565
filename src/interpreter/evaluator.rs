/// Core evaluation logic and configuration.
///
/// Contains the `Evaluator`, its configuration, the main dispatch over AST
/// nodes and the result type shared by all evaluation code.
pub mod core;

/// Arithmetic, comparison and logical operator evaluation.
///
/// Implements numeric semantics (true division, floor division, checked
/// integer arithmetic, exponentiation) and short-circuiting logic.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;

/// Evaluation of `while` loops.
pub mod while_loop;

/// Evaluation of `for` loops.
///
/// Evaluates the range bounds once, binds the loop variable in the shared
/// environment and executes the body for each value.
pub mod for_loop;

/// Utility functions for evaluation.
///
/// Provides the statement-level helpers (variables, assignment, blocks,
/// conditionals) and the loop guard shared by both loop kinds.
pub mod utils;
