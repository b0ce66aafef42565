use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            binary::parse_logical_or,
            statement::parse_statement,
            utils::{end_statement, skip_separators},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses source code into a program.
///
/// The program is a single [`Expr::Block`] holding the top-level statements
/// in source order. An empty source (or one with only comments and blank
/// lines) yields an empty block.
///
/// # Example
/// ```
/// use proofscript::{ast::Expr, interpreter::parser::core::parse_program};
///
/// let program = parse_program("x = 1\n# comment\nx + 1").unwrap();
///
/// let Expr::Block { statements, .. } = program else { panic!("expected a block") };
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_program(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens)
}

/// Parses a token stream (as produced by [`tokenize`]) into a program.
///
/// Statements are separated by newlines or `;`.
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    parse_statements(&mut iter).map_err(|e| match e {
                                    ParseError::UnexpectedEndOfInput { line: 0 } => {
                                        ParseError::UnexpectedEndOfInput { line: last_line }
                                    },
                                    other => other,
                                })
}

fn parse_statements<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    skip_separators(tokens);
    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
        end_statement(tokens, None)?;
        skip_separators(tokens);
    }

    Ok(Expr::Block { statements,
                     line: 1 })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens)
}
