/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens and literals
/// that do not fit the integer range.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown variables, division by zero, type mismatches,
/// integer overflow and runaway loops.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a program from source.
///
/// Parse errors are reported before a single statement runs; runtime errors
/// abort evaluation at the first failing statement.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of the parsed program failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
