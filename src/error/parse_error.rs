use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    Syntax {
        /// The token kind the parser was waiting for.
        expected: TokenKind,
        /// The token kind actually found.
        got:      TokenKind,
        /// Byte offset of the offending token.
        position: usize,
    },
    /// A string literal was opened but never closed.
    NotFinishedString {
        /// Byte offset of the opening quote.
        position: usize,
    },
    /// The tokenizer found text it cannot classify.
    Unrecognized {
        /// The unrecognized text.
        text:     String,
        /// Byte offset of the text.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Syntax { position, .. }
            | Self::NotFinishedString { position }
            | Self::Unrecognized { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax { expected, got, .. } => {
                write!(f, "Syntax error: expected {expected}, found {got}.")
            },
            Self::NotFinishedString { .. } => write!(f, "String literal is never closed."),
            Self::Unrecognized { text, .. } => write!(f, "Unrecognized input '{text}'."),
        }
    }
}

impl std::error::Error for ParseError {}
