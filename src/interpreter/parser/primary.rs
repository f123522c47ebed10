use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token, TokenKind},
        parser::{
            binary::parse_additive,
            core::{MAX_EXPRESSION_DEPTH, Nested, ParseResult},
            utils::{expect, unexpected},
        },
        symbols::SymbolTable,
    },
};

const EXPECTED_OPERAND: &str = "a number, a variable or '('";

/// Parses a primary expression: an integer literal, a declared variable, or a
/// parenthesized expression.
///
/// Grammar: `primary := NUM | ID | "(" expression ")"`
///
/// A variable must already be in `symbols` when it is recognized. `depth`
/// counts the parentheses already open; the returned height of a
/// parenthesized expression is that of its contents.
///
/// # Errors
/// - `UndeclaredVariable` for a name that has not been declared yet.
/// - `ExpressionTooDeep` when parentheses nest past
///   [`MAX_EXPRESSION_DEPTH`].
/// - `UnexpectedToken` if no operand starts here or `)` is missing.
/// - `UnexpectedEndOfInput` if the tokens run out.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                            symbols: &SymbolTable,
                            depth: usize)
                            -> ParseResult<Nested>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let Some(next) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    match &next.token {
        Token::Number(value) => Ok((Expr::Number { value: *value,
                                                   line:  next.line, },
                                    0)),
        Token::Identifier(name) => {
            if !symbols.contains(name) {
                return Err(ParseError::UndeclaredVariable { name: name.clone(),
                                                            line: next.line, });
            }
            Ok((Expr::Identifier { name: name.clone(),
                                   line: next.line, },
                0))
        },
        Token::LParen => {
            if depth >= MAX_EXPRESSION_DEPTH {
                return Err(ParseError::ExpressionTooDeep { line:  next.line,
                                                           limit: MAX_EXPRESSION_DEPTH, });
            }
            let inner = parse_additive(tokens, symbols, depth + 1)?;
            expect(tokens, TokenKind::RParen, "')'")?;
            Ok(inner)
        },
        _ => Err(unexpected(next, EXPECTED_OPERAND)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::BinaryOperator,
        interpreter::{lexer::tokenize, parser::core::parse_expression},
    };

    fn parse(source: &str, declared: &[&str]) -> ParseResult<Expr> {
        let lexed = tokenize(source);
        let mut symbols = SymbolTable::new();
        for name in declared {
            symbols.declare(name, 1);
        }
        parse_expression(&mut lexed.tokens.iter().peekable(), &symbols)
    }

    fn number(value: i64) -> Box<Expr> {
        Box::new(Expr::Number { value, line: 1 })
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse("2 + 3 * 4", &[]).unwrap();
        let expected = Expr::BinaryOp { left:  number(2),
                                        op:    BinaryOperator::Add,
                                        right: Box::new(Expr::BinaryOp { left:  number(3),
                                                                         op:    BinaryOperator::Mul,
                                                                         right: number(4),
                                                                         line:  1, }),
                                        line:  1, };
        assert_eq!(expr, expected);
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = parse("10 - 2 - 3", &[]).unwrap();
        assert_eq!(expr.to_string(),
                   "BinOp('-', BinOp('-', Number(10), Number(2)), Number(3))");
    }

    #[test]
    fn parentheses_override_precedence() {
        let expr = parse("(2 + 3) * 4", &[]).unwrap();
        assert_eq!(expr.to_string(),
                   "BinOp('*', BinOp('+', Number(2), Number(3)), Number(4))");
    }

    #[test]
    fn undeclared_identifier_is_rejected() {
        assert_eq!(parse("1 + y", &[]),
                   Err(ParseError::UndeclaredVariable { name: "y".to_string(),
                                                        line: 1, }));
        assert!(parse("1 + y", &["y"]).is_ok());
    }

    #[test]
    fn missing_closing_paren_at_end_of_input() {
        assert_eq!(parse("(1 + 2", &[]), Err(ParseError::UnexpectedEndOfInput));
    }

    #[test]
    fn string_is_not_an_operand() {
        let err = parse("1 + \"a\"", &[]).unwrap_err();
        assert!(matches!(err,
                         ParseError::UnexpectedToken { kind: TokenKind::Str,
                                                       column: 5,
                                                       .. }));
    }

    #[test]
    fn long_sums_stop_at_the_depth_limit() {
        let within = format!("{}1", "1 + ".repeat(MAX_EXPRESSION_DEPTH));
        assert!(parse(&within, &[]).is_ok());

        let beyond = format!("{}1", "1 + ".repeat(MAX_EXPRESSION_DEPTH + 1));
        assert_eq!(parse(&beyond, &[]),
                   Err(ParseError::ExpressionTooDeep { line:  1,
                                                       limit: MAX_EXPRESSION_DEPTH, }));
    }

    #[test]
    fn parentheses_count_toward_the_depth_limit() {
        let n = MAX_EXPRESSION_DEPTH;
        let within = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert!(parse(&within, &[]).is_ok());

        let beyond = format!("{}1{}", "(".repeat(n + 1), ")".repeat(n + 1));
        assert!(matches!(parse(&beyond, &[]), Err(ParseError::ExpressionTooDeep { .. })));

        let mixed = format!("{}1 + 1{}", "(".repeat(n), ")".repeat(n));
        assert!(matches!(parse(&mixed, &[]), Err(ParseError::ExpressionTooDeep { .. })));
    }
}
