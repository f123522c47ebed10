use logos::{Lexer, Logos, Skip};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
pub enum Token {
    /// `int`, the declaration keyword.
    #[token("int")]
    Int,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// String literal tokens. The stored value has its quotes stripped.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks only advance the line counter.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Failure reported by the `logos` state machine for a single match attempt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexFault {
    /// No rule matched at this position.
    #[default]
    Illegal,
    /// An integer literal that does not fit in an `i64`.
    LiteralTooLarge,
}

/// The token categories shown in token tables and parser diagnostics.
///
/// `EndOfInput` never appears in a token list. It names the end of the
/// source in parser diagnostics, see [`ParseError::kind`].
///
/// [`ParseError::kind`]: crate::error::ParseError::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "PRINT")]
    Print,
    #[serde(rename = "ID")]
    Identifier,
    #[serde(rename = "NUM")]
    Number,
    #[serde(rename = "STRING")]
    Str,
    #[serde(rename = "PLUS")]
    Plus,
    #[serde(rename = "MINUS")]
    Minus,
    #[serde(rename = "TIMES")]
    Star,
    #[serde(rename = "DIVIDE")]
    Slash,
    #[serde(rename = "LPAREN")]
    LParen,
    #[serde(rename = "RPAREN")]
    RParen,
    #[serde(rename = "EQUAL")]
    Equals,
    #[serde(rename = "SEMI")]
    Semicolon,
    #[serde(rename = "EOF")]
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "INT",
            Self::Print => "PRINT",
            Self::Identifier => "ID",
            Self::Number => "NUM",
            Self::Str => "STRING",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "TIMES",
            Self::Slash => "DIVIDE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Equals => "EQUAL",
            Self::Semicolon => "SEMI",
            Self::EndOfInput => "EOF",
        };
        write!(f, "{name}")
    }
}

impl Token {
    /// Returns the category of this token.
    ///
    /// Comments, line breaks and blanks have no category; the lexer skips
    /// them before they reach a caller.
    #[must_use]
    pub const fn kind(&self) -> Option<TokenKind> {
        let kind = match self {
            Self::Int => TokenKind::Int,
            Self::Print => TokenKind::Print,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Number(_) => TokenKind::Number,
            Self::Str(_) => TokenKind::Str,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Equals => TokenKind::Equals,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Comment | Self::NewLine | Self::Ignored => return None,
        };
        Some(kind)
    }
}

/// A token together with the text it came from and its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpannedToken {
    /// The classified token.
    #[serde(skip)]
    pub token:  Token,
    /// Category of the token, as displayed in token tables.
    pub kind:   TokenKind,
    /// The exact source text of the token, including quotes for strings.
    pub lexeme: String,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based column, counted in characters from the start of the line.
    pub column: usize,
}

/// The outcome of one lexical pass.
///
/// Lexing never fails as a whole: tokens that could be recognized are kept in
/// order, and every skipped character is described in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    /// Recognized tokens in source order.
    pub tokens: Vec<SpannedToken>,
    /// Non-fatal lexical errors in source order.
    pub errors: Vec<LexError>,
}

/// Additional information carried by the lexer during tokenization.
///
/// All offsets are byte offsets into the complete source, so a lexer that
/// restarts on a suffix of the input keeps reporting correct positions.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Offset of the first byte of the current line.
    pub line_start: usize,
    /// Offset of the slice the running lexer was created on.
    pub base:       usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0,
               base:       0, }
    }
}

fn parse_integer(lex: &Lexer<Token>) -> Result<i64, LexFault> {
    lex.slice().parse().map_err(|_| LexFault::LiteralTooLarge)
}

fn parse_string(lex: &Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

fn newline(lex: &mut Lexer<Token>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.extras.base + lex.span().end;
    Skip
}

/// Computes the 1-based character column of `offset` on the line that starts
/// at `line_start`.
fn column_of(source: &str, line_start: usize, offset: usize) -> usize {
    source[line_start..offset].chars().count() + 1
}

/// Converts source text into an ordered list of tokens.
///
/// The pass is pure and total. An unrecognized character is reported as a
/// [`LexError::IllegalCharacter`] and lexing resumes at the following
/// character; an integer literal too large for `i64` is reported and dropped.
///
/// # Example
/// ```
/// use scoobylang::interpreter::lexer::{TokenKind, tokenize};
///
/// let lexed = tokenize("int x;\nprint x;");
/// let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Int,
///             TokenKind::Identifier,
///             TokenKind::Semicolon,
///             TokenKind::Print,
///             TokenKind::Identifier,
///             TokenKind::Semicolon]);
/// assert_eq!(lexed.tokens[3].line, 2);
/// assert!(lexed.errors.is_empty());
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Lexed {
    let mut lexed = Lexed::default();
    let mut extras = LexerExtras::default();

    // Each round lexes from `extras.base` until an illegal character forces a
    // restart one character further on.
    'rounds: while extras.base < source.len() {
        let mut lexer = Token::lexer_with_extras(&source[extras.base..], extras);

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let start = lexer.extras.base + span.start;
            let end = lexer.extras.base + span.end;
            let line = lexer.extras.line;
            let column = column_of(source, lexer.extras.line_start, start);

            match result {
                Ok(token) => {
                    let Some(kind) = token.kind() else {
                        continue;
                    };
                    lexed.tokens.push(SpannedToken { kind,
                                                     token,
                                                     lexeme: source[start..end].to_string(),
                                                     line,
                                                     column });
                },
                Err(LexFault::LiteralTooLarge) => {
                    let error = LexError::LiteralTooLarge { lexeme: source[start..end].to_string(),
                                                            line,
                                                            column };
                    warn!(%error, "dropping integer literal");
                    lexed.errors.push(error);
                },
                Err(LexFault::Illegal) => {
                    let character = source[start..].chars().next().unwrap_or('\u{FFFD}');
                    let error = LexError::IllegalCharacter { character, line, column };
                    warn!(%error, "skipping character");
                    lexed.errors.push(error);

                    extras = lexer.extras;
                    extras.base = start + character.len_utf8();
                    continue 'rounds;
                },
            }
        }

        break;
    }

    debug!(tokens = lexed.tokens.len(),
           errors = lexed.errors.len(),
           "lexical analysis finished");
    lexed
}
