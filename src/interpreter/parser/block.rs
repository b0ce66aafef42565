use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{end_statement, expect_token, skip_separators},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements separated by newlines or `;`.
/// Parsing continues until the closing `}`. Blocks only group statements;
/// they do not introduce a scope.
///
/// Grammar: `block := "{" separator* (statement separator*)* "}"`
///
/// # Errors
/// - `UnexpectedToken` if the block does not start with `{`.
/// - `ExpectedClosingBrace` if the input ends before the `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LBrace, "'{'")?;
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            None => return Err(ParseError::ExpectedClosingBrace { line }),
            Some(_) => {},
        }

        statements.push(parse_statement(tokens)?);
        end_statement(tokens, Some(&Token::RBrace))?;
    }

    Ok(Expr::Block { statements, line })
}
