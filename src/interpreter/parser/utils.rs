use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes any run of statement separators (newlines and `;`).
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::NewLine | Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Checks that a statement is properly terminated.
///
/// A statement must be followed by a separator, the end of input, or the
/// `closing` token of the enclosing block. Only separators are consumed.
///
/// # Errors
/// Returns `UnexpectedToken` for anything else, such as `1 2` on one line.
pub(in crate::interpreter::parser) fn end_statement<'a, I>(tokens: &mut Peekable<I>,
                                                           closing: Option<&Token>)
                                                           -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        None | Some((Token::NewLine | Token::Semicolon, _)) => Ok(()),
        Some((tok, _)) if Some(tok) == closing => Ok(()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected end of statement, found {tok:?}"),
                                              line:  *line, })
        },
    }
}

/// Consumes the next token if it equals `expected`, returning its line.
///
/// # Errors
/// `UnexpectedToken` naming `description` if another token follows, or
/// `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {description}, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
