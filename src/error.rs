/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of
/// source code: unexpected tokens, unterminated strings and characters the
/// tokenizer does not recognize.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: division by
/// zero, failed coercions, unknown names, bad call sites and runaway
/// recursion.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while turning source text into a final value.
///
/// Wraps the error of whichever phase failed, so that host code can use `?`
/// across parsing and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Tokenizing or parsing failed.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Byte offset in the source the error refers to, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => Some(e.position()),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
