use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::SpannedToken,
        parser::{binary::parse_additive, statement::parse_statement},
        symbols::SymbolTable,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest expression the parser accepts, counting both operator levels
/// and parentheses.
///
/// Evaluation, graph export and dropping a tree all recurse once per level.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// An expression together with how deep its tree is. Leaves have height 0.
pub type Nested = (Expr, usize);

/// Parses a whole program and builds its symbol table.
///
/// Grammar: `program := statement+`
///
/// Statements are parsed strictly left to right and each one updates the
/// symbol table before the next is examined, so a variable can only be used
/// by statements after its declaration. The first error aborts the whole
/// parse; no partial program is returned.
///
/// # Parameters
/// - `tokens`: The tokens produced by the lexer.
///
/// # Returns
/// The program and the symbol table built while parsing it.
///
/// # Errors
/// - `UnexpectedEndOfInput` if there are no statements or the last one is
///   incomplete.
/// - `UnexpectedToken` for any syntax error.
/// - `UndeclaredVariable` if a name is used before its declaration.
///
/// # Example
/// ```
/// use scoobylang::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let lexed = tokenize("int x; x = 2 * 3;");
/// let (program, symbols) = parse_program(&lexed.tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// assert!(symbols.contains("x"));
/// ```
pub fn parse_program(tokens: &[SpannedToken]) -> ParseResult<(Program, SymbolTable)> {
    let mut symbols = SymbolTable::new();
    let mut statements = Vec::new();
    let mut iter = tokens.iter().peekable();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter, &mut symbols)?);
    }

    if statements.is_empty() {
        return Err(ParseError::UnexpectedEndOfInput);
    }

    debug!(statements = statements.len(),
           symbols = symbols.len(),
           "syntax analysis finished");
    Ok((Program { statements }, symbols))
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `symbols`: Declared names; every variable referenced must be in it.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Besides syntax and declare-before-use errors, returns
/// `ExpressionTooDeep` once the expression nests deeper than
/// [`MAX_EXPRESSION_DEPTH`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               symbols: &SymbolTable)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    parse_additive(tokens, symbols, 0).map(|(expr, _)| expr)
}
