use std::iter::Peekable;

use crate::{
    ast::{PrintArgument, Statement},
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, unexpected},
        },
        symbols::SymbolTable,
    },
};

const EXPECTED_STATEMENT: &str = "a statement (e.g. 'int x;', 'x = 5;' or 'print x;')";

/// Parses a single statement.
/// A statement may be one of:
/// - a declaration, `int x;` or `int x = <expr>;`.
/// - an assignment, `x = <expr>;`.
/// - a print statement, `print <expr>;` or `print "text";`, optionally with
///   the argument in parentheses.
///
/// The first token decides which one is parsed.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
/// - `symbols`: The symbol table, updated by declarations.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              symbols: &mut SymbolTable)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let Some(next) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    match next.token {
        Token::Int => parse_declaration(tokens, symbols),
        Token::Identifier(_) => parse_assignment(tokens, symbols),
        Token::Print => parse_print(tokens, symbols),
        _ => Err(unexpected(next, EXPECTED_STATEMENT)),
    }
}

/// Parses a declaration statement.
///
/// Grammar: `declaration := "int" ID ";" | "int" ID "=" expression ";"`
///
/// The name is registered once the whole statement has been recognized; if it
/// is already present the table is left unchanged. With an initializer the
/// statement becomes an assignment, so declaring an existing name again with
/// a value simply assigns to it.
///
/// The initializer is parsed before the name is registered, so it cannot
/// refer to the variable being declared unless an earlier declaration exists.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier, `=`, or `;` is missing,
/// - the initializer fails to parse,
/// - input ends unexpectedly.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                            symbols: &mut SymbolTable)
                            -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let keyword = expect(tokens, TokenKind::Int, "'int'")?;
    let line = keyword.line;
    let (name, name_line) = parse_identifier(tokens)?;

    let statement = match tokens.next() {
        Some(SpannedToken { token: Token::Semicolon,
                            .. }) => Statement::Declaration { name: name.clone(),
                                                              line },
        Some(SpannedToken { token: Token::Equals,
                            .. }) => {
            let value = parse_expression(tokens, symbols)?;
            expect(tokens, TokenKind::Semicolon, "';'")?;
            Statement::Assignment { name: name.clone(),
                                    value,
                                    line }
        },
        Some(token) => return Err(unexpected(token, "';' or '='")),
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    symbols.declare(&name, name_line);
    Ok(statement)
}

/// Parses an assignment statement.
///
/// Grammar: `assignment := ID "=" expression ";"`
///
/// The target must have been declared by an earlier statement; this is
/// checked once the statement is complete.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `=` or `;` is missing,
/// - the assigned expression fails to parse,
/// - the target is not declared.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let (name, line) = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Equals, "'='")?;
    let value = parse_expression(tokens, symbols)?;
    expect(tokens, TokenKind::Semicolon, "';'")?;

    if !symbols.contains(&name) {
        return Err(ParseError::UndeclaredVariable { name, line });
    }

    Ok(Statement::Assignment { name, value, line })
}

/// Parses a print statement.
///
/// Grammar:
/// ```text
/// print := "print" expression ";"
///        | "print" STRING ";"
///        | "print" "(" STRING ")" ";"
/// ```
/// `print (expression);` needs no rule of its own: the parentheses are part
/// of the expression.
///
/// # Errors
/// Returns a `ParseError` if the argument fails to parse or `;` is missing.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let keyword = expect(tokens, TokenKind::Print, "'print'")?;
    let line = keyword.line;

    let value = if let Some(text) = parse_text_argument(tokens)? {
        PrintArgument::Text(text)
    } else {
        PrintArgument::Expression(parse_expression(tokens, symbols)?)
    };

    expect(tokens, TokenKind::Semicolon, "';'")?;
    Ok(Statement::Print { value, line })
}

/// Parses `STRING` or `"(" STRING ")"` if that is what follows.
///
/// Returns `Ok(None)` without consuming anything when the argument is not a
/// string literal.
fn parse_text_argument<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<String>>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    match tokens.peek().copied() {
        Some(SpannedToken { token: Token::Str(text),
                            .. }) => {
            let text = text.clone();
            tokens.next();
            Ok(Some(text))
        },
        Some(SpannedToken { token: Token::LParen,
                            .. }) => {
            let mut lookahead = tokens.clone();
            lookahead.next();
            let Some(SpannedToken { token: Token::Str(text),
                                    .. }) = lookahead.next()
            else {
                return Ok(None);
            };

            tokens.next();
            tokens.next();
            expect(tokens, TokenKind::RParen, "')'")?;
            Ok(Some(text.clone()))
        },
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{Expr, Program},
        interpreter::{lexer::tokenize, parser::core::parse_program},
    };

    fn parse(source: &str) -> ParseResult<(Program, SymbolTable)> {
        parse_program(&tokenize(source).tokens)
    }

    #[test]
    fn bare_declaration() {
        let (program, symbols) = parse("int total;").unwrap();
        assert_eq!(program.statements,
                   [Statement::Declaration { name: "total".to_string(),
                                             line: 1, }]);
        assert_eq!(symbols.get("total").map(|s| s.line), Some(1));
    }

    #[test]
    fn declaration_with_initializer_is_an_assignment() {
        let (program, symbols) = parse("int x = 7;").unwrap();
        assert_eq!(program.statements,
                   [Statement::Assignment { name:  "x".to_string(),
                                            value: Expr::Number { value: 7, line: 1 },
                                            line:  1, }]);
        assert!(symbols.contains("x"));
    }

    #[test]
    fn initializer_cannot_use_the_variable_being_declared() {
        assert_eq!(parse("int x = x + 1;").unwrap_err(),
                   ParseError::UndeclaredVariable { name: "x".to_string(),
                                                    line: 1, });
    }

    #[test]
    fn symbol_line_is_the_line_of_the_name() {
        let (_, symbols) = parse("int\n  y;").unwrap();
        assert_eq!(symbols.get("y").map(|s| s.line), Some(2));
    }

    #[test]
    fn assignment_to_undeclared_variable() {
        let err = parse("x = 1;").unwrap_err();
        assert!(err.is_semantic());
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn use_before_declaration_fails_even_if_declared_later() {
        let err = parse("int a;\nprint b;\nint b;").unwrap_err();
        assert_eq!(err,
                   ParseError::UndeclaredVariable { name: "b".to_string(),
                                                    line: 2, });
    }

    #[test]
    fn print_forms() {
        let (program, _) =
            parse("int x;\nprint x;\nprint (x);\nprint \"a b\";\nprint (\"c\");").unwrap();
        let values: Vec<_> = program.statements
                                    .iter()
                                    .skip(1)
                                    .map(|s| match s {
                                        Statement::Print { value, .. } => value.to_string(),
                                        other => panic!("expected print, got {other}"),
                                    })
                                    .collect();
        assert_eq!(values,
                   ["Identifier('x')", "Identifier('x')", "String('a b')", "String('c')"]);
    }

    #[test]
    fn parenthesized_string_needs_closing_paren() {
        let err = parse("print (\"c\" ;").unwrap_err();
        assert!(matches!(err,
                         ParseError::UnexpectedToken { kind: TokenKind::Semicolon,
                                                       expected: "')'",
                                                       .. }));
    }

    #[test]
    fn missing_semicolon_at_end() {
        assert_eq!(parse("int x;\nx = 3").unwrap_err(),
                   ParseError::UnexpectedEndOfInput);
    }

    #[test]
    fn missing_semicolon_reports_next_token() {
        let err = parse("int x\nprint x;").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedToken { token:    "print".to_string(),
                                                 kind:     TokenKind::Print,
                                                 line:     2,
                                                 column:   1,
                                                 expected: "';' or '='", });
    }

    #[test]
    fn statement_cannot_start_with_an_operator() {
        let err = parse("+ 1;").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { line: 1, column: 1, .. }));
    }

    #[test]
    fn empty_input_is_unexpected_end() {
        assert_eq!(parse("").unwrap_err(), ParseError::UnexpectedEndOfInput);
        assert_eq!(parse("// only a comment\n").unwrap_err(),
                   ParseError::UnexpectedEndOfInput);
    }

    #[test]
    fn strings_cannot_be_assigned() {
        let err = parse("int s = \"text\";").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { kind: TokenKind::Str, .. }));
    }
}
