use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::{ParseResult, parse_expression}, utils::parse_identifier},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix `-` (numeric negation). Negation is right-associative
/// and binds tighter than every binary operator, so `-2 ^ 2` is `(-2) ^ 2`
/// and `2 ^ -1` negates the exponent.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                                  expr: Box::new(expr),
                                  line });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := INTEGER | "true" | "false"
///              | identifier
///              | "(" identifier "=" expression ")"
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), line)) => Ok(Expr::Literal { value: (*n).into(),
                                                              line:  *line, }),
        Some((Token::Bool(b), line)) => Ok(Expr::Literal { value: (*b).into(),
                                                           line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::LParen, line)) => parse_grouping(tokens, *line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the inside of a parenthesised expression, after the `(`.
///
/// A parenthesised `name = value` is an assignment used as an operand, for
/// example the right-hand side of `false and (x = 1)`. It evaluates to no
/// value, so it only makes sense where it may be skipped.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let is_assignment = matches!(lookahead.next(), Some((Token::Identifier(_), _)))
                        && matches!(lookahead.next(), Some((Token::Equals, _)));

    let expr = if is_assignment {
        let name = parse_identifier(tokens)?;
        tokens.next();
        let value = parse_expression(tokens)?;
        Expr::Assignment { name,
                           value: Box::new(value),
                           line }
    } else {
        parse_expression(tokens)?
    };

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
