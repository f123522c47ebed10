/// Binary operator parsing.
///
/// Implements the two precedence levels of arithmetic: additive (`+`, `-`)
/// and multiplicative (`*`, `/`), both left-associative.
pub mod binary;

/// Core parsing entry points.
///
/// Contains the program and expression entry points and the shared result
/// type.
pub mod core;

/// Primary expression parsing.
///
/// Handles integer literals, variable references and parenthesized
/// expressions, the operands of binary operators.
pub mod primary;

/// Statement parsing.
///
/// Parses declarations, assignments and print statements, and performs the
/// declare-before-use check as each statement is recognized.
pub mod statement;

/// Shared helpers for consuming expected tokens and building diagnostics.
pub mod utils;
