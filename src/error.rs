/// Lexical errors.
///
/// Problems found while tokenizing. These never abort the lexical pass; the
/// lexer collects them next to the tokens it did recognize.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax and semantic errors that can stop an analysis: an
/// unexpected token, a premature end of input, or the use of a variable before
/// its declaration.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating a program, such as
/// division by zero or integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Any error that stops a run of a program.
///
/// Lexical errors are not part of this enum because they never stop a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The program could not be analyzed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while it was being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Gets the line of the error, when it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Parse(error) => error.line(),
            Self::Runtime(error) => Some(error.line()),
        }
    }

    /// Gets the category of the offending token for syntax errors.
    #[must_use]
    pub const fn kind(&self) -> Option<TokenKind> {
        match self {
            Self::Parse(error) => error.kind(),
            Self::Runtime(_) => None,
        }
    }
}
