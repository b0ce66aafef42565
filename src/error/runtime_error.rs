use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Every variant is fatal for the current run: the evaluator never catches or
/// retries, so the first error aborts the program and reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A boolean value was expected, but not found.
    #[error("Error on line {line}: Expected boolean.")]
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer value was expected, but not found.
    #[error("Error on line {line}: Expected integer.")]
    ExpectedInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement that produces no value was used as an operand.
    #[error("Error on line {line}: Value missing.")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or floor division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `while` or `for` loop ran more iterations than the configured
    /// ceiling.
    #[error("Error on line {line}: Loop exceeded the maximum of {limit} iterations.")]
    LoopLimitExceeded {
        /// The configured iteration ceiling.
        limit: usize,
        /// The line of the loop statement.
        line:  usize,
    },
}
