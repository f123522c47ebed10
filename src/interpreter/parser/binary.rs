use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            core::{Nested, ParseResult},
            primary::parse_primary,
            utils::combine,
        },
        symbols::SymbolTable,
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `symbols`: Declared names.
/// - `depth`: Number of parentheses enclosing this expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression, and its
/// height.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             symbols: &SymbolTable,
                             depth: usize)
                             -> ParseResult<Nested>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let (mut left, mut height) = parse_multiplicative(tokens, symbols, depth)?;
    loop {
        if let Some(next) = tokens.peek().copied()
           && let Some(op) = token_to_binary_operator(&next.token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = next.line;
            tokens.next();
            let (right, right_height) = parse_multiplicative(tokens, symbols, depth)?;
            height = combine(height, right_height, depth, line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// `+` and `-`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `symbols`: Declared names.
/// - `depth`: Number of parentheses enclosing this expression.
///
/// # Returns
/// A binary expression tree combining primary nodes, and its height.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   symbols: &SymbolTable,
                                   depth: usize)
                                   -> ParseResult<Nested>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let (mut left, mut height) = parse_primary(tokens, symbols, depth)?;
    loop {
        if let Some(next) = tokens.peek().copied()
           && let Some(op) = token_to_binary_operator(&next.token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = next.line;
            tokens.next();
            let (right, right_height) = parse_primary(tokens, symbols, depth)?;
            height = combine(height, right_height, depth, line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use scoobylang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
