/// Parser entry points and shared result type.
///
/// Turns a token stream into a program block and provides the top of the
/// expression grammar.
pub mod core;

/// Statement parsing.
///
/// Assignments (including compound assignments), `if` / `else`, `while` and
/// `for` statements.
pub mod statement;

/// Block parsing.
///
/// Brace-delimited statement sequences used as bodies of conditionals and
/// loops.
pub mod block;

/// Binary operator parsing.
///
/// Logical, comparison, additive and multiplicative precedence levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Negation, exponentiation, literals, variables and parenthesised
/// expressions.
pub mod unary;

/// Helpers shared by the parsing functions.
pub mod utils;
