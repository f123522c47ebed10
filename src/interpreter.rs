/// The evaluator module executes a program and collects its results.
///
/// The evaluator walks the AST statement by statement against a fresh
/// variable store, records every printed line, and reports runtime errors
/// such as division by zero.
///
/// # Responsibilities
/// - Evaluates statements and integer expressions.
/// - Keeps variable values in first-write order.
/// - Discards output when a run fails.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens for
/// keywords, identifiers, integer and string literals, and punctuation, each
/// with its line and column. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Skips whitespace and `//` comments.
/// - Reports illegal characters without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer, constructs
/// the program tree, and fills the symbol table as declarations are
/// recognized so that every use of a variable can be checked against the
/// declarations before it.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Applies operator precedence and associativity.
/// - Reports syntax and declare-before-use errors with their position.
pub mod parser;
/// The symbol table of declared variables.
///
/// A flat, single-scope list of the names declared by a program, with their
/// type and declaration line.
pub mod symbols;
