//! # scoobylang
//!
//! scoobylang is the front-end and interpreter of ScoobyLang, a small
//! teaching language with integer variables, assignment, arithmetic and
//! `print`. It tokenizes source text, parses it into an AST while checking
//! that every variable is declared before use, evaluates the AST, and exports
//! it as a graph for visualization.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::info;

pub use crate::{
    graph::ast_to_graph,
    interpreter::{
        evaluator::core::{Execution, evaluate},
        lexer::tokenize,
    },
};
use crate::{
    ast::Program,
    error::{Error, LexError, ParseError},
    interpreter::{lexer::SpannedToken, parser::core::parse_program, symbols::SymbolTable},
};

/// Defines the structure of parsed code.
///
/// This module declares the program, statement and expression types that
/// represent source code as a tree, and a uniform node view used by tree
/// consumers. The AST is built by the parser and read by the evaluator and
/// the graph exporter.
///
/// # Responsibilities
/// - Defines a closed set of node types for every language construct.
/// - Exposes tag, children and label for any node.
/// - Renders the tree as text.
pub mod ast;
/// Provides error types for lexing, parsing, and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers for context.
/// - Combines the fatal errors into one type for callers that run whole
///   programs.
pub mod error;
/// Exports an AST as nodes and edges.
///
/// The graph carries labels and shape hints only; drawing it is up to the
/// consumer.
pub mod graph;
/// Orchestrates the phases of analysis and execution.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, symbol table, and evaluator.
/// - Provides entry points for each phase.
pub mod interpreter;
/// General utilities shared by several modules.
pub mod util;

/// Everything produced by analyzing one source text.
///
/// Each call to [`parse`] builds a new `Analysis`; nothing is shared between
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The tokens the parser consumed.
    pub tokens:     Vec<SpannedToken>,
    /// Characters the lexer had to skip.
    pub lex_errors: Vec<LexError>,
    /// Declared variables, in declaration order.
    pub symbols:    SymbolTable,
    /// The parsed program.
    pub program:    Program,
}

/// Tokenizes, then parses `source`.
///
/// Lexical errors do not stop the analysis; they are returned in
/// [`Analysis::lex_errors`] and the parser works on the tokens that were
/// recognized.
///
/// # Errors
/// Returns the first syntax or declare-before-use error.
///
/// # Examples
/// ```
/// use scoobylang::parse;
///
/// let analysis = parse("int x;\nx = 5;").unwrap();
/// assert_eq!(analysis.symbols.get("x").map(|s| s.line), Some(1));
///
/// // `y` is used before any declaration.
/// assert!(parse("int x = y;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Analysis, ParseError> {
    let lexed = tokenize(source);
    let (program, symbols) = parse_program(&lexed.tokens)?;
    info!(statements = program.statements.len(),
          symbols = symbols.len(),
          lex_errors = lexed.errors.len(),
          "analysis succeeded");

    Ok(Analysis { tokens: lexed.tokens,
                  lex_errors: lexed.errors,
                  symbols,
                  program })
}

/// Parses and evaluates `source`, returning the printed lines and the final
/// variable values.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use scoobylang::run;
///
/// let execution = run("int x = 7; int y = 2; print x / y;").unwrap();
/// assert_eq!(execution.output, ["3"]);
///
/// // Division by zero: nothing is printed.
/// assert!(run("print 1; print 1/0;").is_err());
/// ```
pub fn run(source: &str) -> Result<Execution, Error> {
    let analysis = parse(source)?;
    Ok(evaluate(&analysis.program)?)
}
