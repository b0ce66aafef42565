use std::iter::Peekable;

use crate::{
    ast::{ArithmeticOperator, ComparisonOperator, Expr, LogicalOperator, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Maps a token to its arithmetic operator, if it is one.
///
/// # Example
/// ```
/// use proofscript::{
///     ast::ArithmeticOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_arithmetic_operator},
/// };
///
/// assert_eq!(token_to_arithmetic_operator(&Token::DoubleSlash),
///            Some(ArithmeticOperator::FloorDiv));
/// assert_eq!(token_to_arithmetic_operator(&Token::Less), None);
/// ```
#[must_use]
pub const fn token_to_arithmetic_operator(token: &Token) -> Option<ArithmeticOperator> {
    match token {
        Token::Plus => Some(ArithmeticOperator::Add),
        Token::Minus => Some(ArithmeticOperator::Sub),
        Token::Star => Some(ArithmeticOperator::Mul),
        Token::Slash => Some(ArithmeticOperator::Div),
        Token::DoubleSlash => Some(ArithmeticOperator::FloorDiv),
        Token::Caret => Some(ArithmeticOperator::Pow),
        _ => None,
    }
}

/// Maps a token to its comparison operator, if it is one.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        _ => None,
    }
}

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or`. Lowest precedence of all
/// operators.
///
/// Grammar: `or := and ("or" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_and(tokens)?;

    while let Some((Token::Or, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_logical_and(tokens)?;
        left = Expr::Logical { op: LogicalOperator::Or,
                               left: Box::new(left),
                               right: Box::new(right),
                               line };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Grammar: `and := not ("and" not)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_not(tokens)?;

    while let Some((Token::And, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_logical_not(tokens)?;
        left = Expr::Logical { op: LogicalOperator::And,
                               left: Box::new(left),
                               right: Box::new(right),
                               line };
    }

    Ok(left)
}

/// Parses `not` prefixes.
///
/// `not` binds looser than comparisons, so `not a == b` is `not (a == b)`.
///
/// Grammar: `not := "not" not | comparison`
pub fn parse_logical_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Not, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let expr = parse_logical_not(tokens)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                                  expr: Box::new(expr),
                                  line });
    }

    parse_comparison(tokens)
}

/// Parses relational and equality operators.
///
/// Comparisons are left-associative, so `a < b < c` compares the boolean
/// result of `a < b` with `c` (and fails at run time).
///
/// Grammar: `comparison := additive (("==" | "!=" | "<" | ">" | "<=" | ">=")
/// additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens)?;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_comparison_operator(token)
    {
        let line = *line;
        tokens.next();

        let right = parse_additive(tokens)?;
        left = Expr::Comparison { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_arithmetic_operator(token)
          && matches!(op, ArithmeticOperator::Add | ArithmeticOperator::Sub)
    {
        let line = *line;
        tokens.next();

        let right = parse_multiplicative(tokens)?;
        left = Expr::Arithmetic { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Exponentiation shares this level, so all four operators associate left:
/// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2` and `2 * 3 ^ 2` is `(2 * 3) ^ 2`.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "//" | "^") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_arithmetic_operator(token)
          && matches!(op,
                      ArithmeticOperator::Mul
                      | ArithmeticOperator::Div
                      | ArithmeticOperator::FloorDiv
                      | ArithmeticOperator::Pow)
    {
        let line = *line;
        tokens.next();

        let right = parse_unary(tokens)?;
        left = Expr::Arithmetic { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
    }

    Ok(left)
}
