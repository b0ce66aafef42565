/// Dispatch of arithmetic operators.
pub mod core;
/// Add, subtract, multiply, divide and floor divide on scalars.
pub mod scalar;
/// Exponentiation.
pub mod power;
/// Equality and ordering comparisons.
pub mod comparison;
/// Short-circuiting `and` / `or`.
pub mod logic;
