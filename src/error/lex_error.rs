use thiserror::Error;

/// Represents the non-fatal problems reported by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token. It is skipped.
    #[error("Error on line {line}, column {column}: Illegal character '{character}'.")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// An integer literal too large for a 64-bit integer. It is dropped.
    #[error("Error on line {line}, column {column}: Literal {lexeme} is too large.")]
    LiteralTooLarge {
        /// The digits of the literal.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl LexError {
    /// Gets the line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IllegalCharacter { line, .. } | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}
