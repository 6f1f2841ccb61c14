use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// The kind of a lexical token.
/// A token is a minimal but meaningful unit of text produced by the tokenizer.
/// This enum defines all recognized kinds in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// String literal tokens, such as `"hello"`.
    #[regex(r#""[^"]*""#, allow_greedy = true)]
    String,
    /// A string literal missing its closing quote. Never handed to the parser;
    /// the tokenizer turns it into an error.
    #[regex(r#""[^"]*"#, allow_greedy = true)]
    UnterminatedString,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `val`
    #[token("val")]
    Val,
    /// `if`
    #[token("if")]
    If,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `->`, opens a block.
    #[token("->")]
    Arrow,
    /// `.`, closes a block.
    #[token(".")]
    Dot,
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
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
    /// End of input. Yielded once the source is exhausted, and on every pull
    /// after that.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Number => "number",
            Self::String | Self::UnterminatedString => "string",
            Self::Identifier => "identifier",
            Self::Val => "'val'",
            Self::If => "'if'",
            Self::Elif => "'elif'",
            Self::Else => "'else'",
            Self::Fn => "'fn'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Nil => "'nil'",
            Self::Arrow => "'->'",
            Self::Dot => "'.'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Caret => "'^'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Equals => "'='",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::LessEqual => "'<='",
            Self::GreaterEqual => "'>='",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::Bang => "'!'",
            Self::Comment => "comment",
            Self::Ignored => "whitespace",
            Self::Eof => "end of input",
        };
        write!(f, "{text}")
    }
}

/// The payload carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Punctuation, operators and keywords carry nothing.
    None,
    /// The value of a number literal.
    Number(f64),
    /// Identifier names and string literal contents (without quotes).
    Text(String),
}

/// A classified lexeme with its payload and source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the lexeme is.
    pub kind:     TokenKind,
    /// The literal value or name, if any.
    pub value:    TokenValue,
    /// Byte offset of the lexeme in the source.
    pub position: usize,
}

impl Token {
    /// The terminal token at `position`.
    #[must_use]
    pub const fn eof(position: usize) -> Self {
        Self { kind: TokenKind::Eof,
               value: TokenValue::None,
               position }
    }

    /// The token's text payload, or an empty string when it has none.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.value {
            TokenValue::Text(text) => text,
            _ => "",
        }
    }

    /// The token's numeric payload, if it carries one.
    #[must_use]
    pub const fn number(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// A pull-based, non-rewindable source of tokens.
///
/// Implementors must eventually yield a token of kind [`TokenKind::Eof`] and
/// keep yielding it on every further call.
pub trait TokenSource {
    /// Produces the next token, or the tokenizer error found at this point.
    fn next_token(&mut self) -> ParseResult<Token>;
}

/// Turns source text into [`Token`]s on demand.
///
/// ## Example
/// ```
/// use seta::interpreter::lexer::{TokenKind, TokenSource, TokenValue, Tokenizer};
///
/// let mut tokens = Tokenizer::new("val x = 4.5");
///
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Val);
/// assert_eq!(tokens.next_token().unwrap().value, TokenValue::Text("x".into()));
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Equals);
/// assert_eq!(tokens.next_token().unwrap().value, TokenValue::Number(4.5));
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Eof);
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Tokenizer<'source> {
    lexer: logos::Lexer<'source, TokenKind>,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer: TokenKind::lexer(source) }
    }
}

impl TokenSource for Tokenizer<'_> {
    fn next_token(&mut self) -> ParseResult<Token> {
        let Some(result) = self.lexer.next() else {
            return Ok(Token::eof(self.lexer.source().len()));
        };

        let slice = self.lexer.slice();
        let position = self.lexer.span().start;

        let kind = match result {
            Ok(TokenKind::UnterminatedString) => {
                return Err(ParseError::NotFinishedString { position });
            },
            Ok(kind) => kind,
            Err(()) => {
                return Err(ParseError::Unrecognized { text: slice.to_string(),
                                                      position });
            },
        };

        let value = match kind {
            TokenKind::Number => {
                let number = slice.parse().map_err(|_| {
                                               ParseError::Unrecognized { text: slice.to_string(),
                                                                          position }
                                           })?;
                TokenValue::Number(number)
            },
            TokenKind::String => TokenValue::Text(slice[1..slice.len() - 1].to_string()),
            TokenKind::Identifier => TokenValue::Text(slice.to_string()),
            _ => TokenValue::None,
        };

        Ok(Token { kind, value, position })
    }
}
