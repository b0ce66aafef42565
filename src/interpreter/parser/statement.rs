use std::iter::Peekable;

use crate::{
    ast::{ArithmeticOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if`, `while` or `for` statement.
/// - an assignment or compound assignment.
/// - an expression used as a statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::For, _)) => parse_for(tokens),
        _ => {
            if let Some(statement) = parse_assignment(tokens)? {
                return Ok(statement);
            }
            parse_expression(tokens)
        },
    }
}

/// Parses an assignment or compound-assignment statement.
///
/// Supported forms:
///
/// - `<identifier> = <expression>`
/// - `<identifier> += <expression>`
/// - `<identifier> -= <expression>`
/// - `<identifier> *= <expression>`
/// - `<identifier> /= <expression>`
///
/// Compound forms are desugared: `x += e` becomes `x = x + e`, so reading an
/// unassigned `x` fails at run time like any other unknown variable.
///
/// If the next two tokens are not an identifier and an assignment operator,
/// nothing is consumed and `Ok(None)` is returned.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let (name, line) = match lookahead.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        _ => return Ok(None),
    };

    let compound = match lookahead.next() {
        Some((Token::Equals, _)) => None,
        Some((Token::PlusAssign, _)) => Some(ArithmeticOperator::Add),
        Some((Token::MinusAssign, _)) => Some(ArithmeticOperator::Sub),
        Some((Token::MulAssign, _)) => Some(ArithmeticOperator::Mul),
        Some((Token::DivAssign, _)) => Some(ArithmeticOperator::Div),
        _ => return Ok(None),
    };

    tokens.next();
    tokens.next();
    let value = parse_expression(tokens)?;

    let value = match compound {
        None => value,
        Some(op) => Expr::Arithmetic { op,
                                       left: Box::new(Expr::Variable { name: name.clone(),
                                                                       line }),
                                       right: Box::new(value),
                                       line },
    };

    Ok(Some(Expr::Assignment { name,
                               value: Box::new(value),
                               line }))
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     else if <condition> { ... }
///     else { ... }
/// ```
/// `else` may start on the line after the closing brace. Chained `else if`
/// constructs are parsed recursively into the `else_branch`.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::If, "'if'")?;
    let condition = parse_expression(tokens)?;
    let then_branch = parse_block(tokens)?;

    let mut lookahead = tokens.clone();
    while let Some((Token::NewLine, _)) = lookahead.peek() {
        lookahead.next();
    }

    let else_branch = if let Some((Token::Else, _)) = lookahead.peek() {
        lookahead.next();
        *tokens = lookahead;

        match tokens.peek() {
            Some((Token::If, _)) => Some(Box::new(parse_if(tokens)?)),
            Some((Token::LBrace, _)) => Some(Box::new(parse_block(tokens)?)),
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected 'if' or '{{' after else, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    } else {
        None
    };

    Ok(Expr::If { condition: Box::new(condition),
                  then_branch: Box::new(then_branch),
                  else_branch,
                  line })
}

/// Parses a `while` loop.
///
/// Syntax: `while <condition> { ... }`
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::While, "'while'")?;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Expr::While { condition: Box::new(condition),
                     body: Box::new(body),
                     line })
}

/// Parses a `for` loop over an inclusive range.
///
/// Syntax: `for <identifier> in <start> to <end> { ... }`
pub fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::For, "'for'")?;
    let var = parse_identifier(tokens)?;
    expect_token(tokens, &Token::In, "'in' after loop variable")?;
    let start = parse_expression(tokens)?;
    expect_token(tokens, &Token::To, "'to' in for range")?;
    let end = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Expr::For { var,
                   start: Box::new(start),
                   end: Box::new(end),
                   body: Box::new(body),
                   line })
}
