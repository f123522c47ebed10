use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can stop an analysis.
pub enum ParseError {
    /// Found a token that cannot continue the current construct.
    #[error("Error on line {line}, column {column}: Unexpected token '{token}' (type: {kind}). \
             Expected {expected}.")]
    UnexpectedToken {
        /// The source text of the token encountered.
        token:    String,
        /// The category of the token encountered.
        kind:     TokenKind,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
        /// Description of the accepted continuations.
        expected: &'static str,
    },
    /// Reached the end of input in the middle of a statement, or found no
    /// statement at all.
    #[error("Error: Unexpected end of input. Is a ';' missing?")]
    UnexpectedEndOfInput,
    /// A variable was read or assigned before being declared.
    #[error("Error on line {line}: Semantic error: variable '{name}' is not declared.")]
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression nested deeper than the parser accepts.
    #[error("Error on line {line}: Expression is nested too deeply (more than {limit} levels).")]
    ExpressionTooDeep {
        /// The source line where the limit was exceeded.
        line:  usize,
        /// The deepest nesting accepted.
        limit: usize,
    },
}

impl ParseError {
    /// Gets the line of the error, when it has one.
    ///
    /// An unexpected end of input has no position.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UndeclaredVariable { line, .. }
            | Self::ExpressionTooDeep { line, .. } => Some(*line),
            Self::UnexpectedEndOfInput => None,
        }
    }

    /// Gets the category of the token the parser stopped at, if the error was
    /// caused by one. Running out of tokens reports
    /// [`TokenKind::EndOfInput`].
    #[must_use]
    pub const fn kind(&self) -> Option<TokenKind> {
        match self {
            Self::UnexpectedToken { kind, .. } => Some(*kind),
            Self::UnexpectedEndOfInput => Some(TokenKind::EndOfInput),
            Self::UndeclaredVariable { .. } | Self::ExpressionTooDeep { .. } => None,
        }
    }

    /// Returns `true` for declare-before-use violations, as opposed to syntax
    /// errors.
    #[must_use]
    pub const fn is_semantic(&self) -> bool {
        matches!(self, Self::UndeclaredVariable { .. })
    }
}
