use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token, TokenKind},
        parser::core::{MAX_EXPRESSION_DEPTH, ParseResult},
    },
};

/// Builds the diagnostic for a token that cannot continue the current
/// construct.
pub(in crate::interpreter::parser) fn unexpected(token: &SpannedToken,
                                                 expected: &'static str)
                                                 -> ParseError {
    ParseError::UnexpectedToken { token: token.lexeme.clone(),
                                  kind: token.kind,
                                  line: token.line,
                                  column: token.column,
                                  expected }
}

/// Consumes the next token, which must be of the given kind.
///
/// # Errors
/// - `UnexpectedToken` if the next token has another kind; `expected` is used
///   as the description of what was accepted.
/// - `UnexpectedEndOfInput` if there are no tokens left.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &'static str)
                                                    -> ParseResult<&'a SpannedToken>
    where I: Iterator<Item = &'a SpannedToken>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(token, expected)),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a plain identifier and returns its name and line.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a SpannedToken>
{
    match tokens.next() {
        Some(SpannedToken { token: Token::Identifier(name),
                            line,
                            .. }) => Ok((name.clone(), *line)),
        Some(token) => Err(unexpected(token, "an identifier")),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Returns the height of an operator node over subtrees of the given heights.
///
/// # Errors
/// `ExpressionTooDeep` if the node, together with the `depth` parentheses
/// around it, would exceed [`MAX_EXPRESSION_DEPTH`].
pub(in crate::interpreter::parser) fn combine(left: usize,
                                              right: usize,
                                              depth: usize,
                                              line: usize)
                                              -> ParseResult<usize> {
    let height = left.max(right) + 1;
    if depth + height > MAX_EXPRESSION_DEPTH {
        return Err(ParseError::ExpressionTooDeep { line,
                                                   limit: MAX_EXPRESSION_DEPTH });
    }
    Ok(height)
}
