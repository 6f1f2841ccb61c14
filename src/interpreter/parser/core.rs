use crate::{
    ast::Node,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind, TokenSource},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a pull-based token source.
///
/// The parser looks at exactly one token ahead. It remembers the token it
/// consumed last so that productions can read the value and position of what
/// they just matched.
pub struct Parser<S: TokenSource> {
    tokens:   S,
    current:  Token,
    previous: Token,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and pulls the first token from `tokens`.
    ///
    /// # Errors
    /// Propagates a tokenizer error raised by the very first token.
    pub fn new(mut tokens: S) -> ParseResult<Self> {
        let current = tokens.next_token()?;
        Ok(Self { tokens,
                  current,
                  previous: Token::eof(0) })
    }

    /// Parses a whole program.
    ///
    /// Top-level statements are either function definitions or general
    /// statements, optionally separated by `;`. Parsing stops at the end of
    /// input, which is asserted and consumed.
    ///
    /// Grammar: `program := (function | statement)* EOF`
    ///
    /// # Returns
    /// A `Node::Program` holding every top-level statement.
    ///
    /// # Example
    /// ```
    /// use seta::{
    ///     ast::Node,
    ///     interpreter::{lexer::Tokenizer, parser::core::Parser},
    /// };
    ///
    /// let mut parser = Parser::new(Tokenizer::new("val x = 1; x")).unwrap();
    /// let program = parser.parse().unwrap();
    ///
    /// let Node::Program { statements, .. } = program else { panic!("not a program") };
    /// assert_eq!(statements.len(), 2);
    /// ```
    pub fn parse(&mut self) -> ParseResult<Node> {
        let mut statements = Vec::new();

        self.skip_separators()?;
        while !self.check(TokenKind::Eof) {
            let statement = if self.check(TokenKind::Fn) {
                self.parse_function()?
            } else {
                self.parse_statement()?
            };
            statements.push(statement);
            self.skip_separators()?;
        }
        self.eat(TokenKind::Eof)?;

        Ok(Node::Program { statements,
                           position: 0 })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, logical operators, and descends through the
    /// precedence hierarchy.
    ///
    /// Grammar: `expression := logical`
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_logical()
    }

    /// Consumes the current token if it has the `expected` kind and returns
    /// it.
    ///
    /// # Errors
    /// `ParseError::Syntax` naming the expected and the actual kind when they
    /// differ; the current token is left in place.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<Token> {
        if self.current.kind != expected {
            return Err(ParseError::Syntax { expected,
                                            got: self.current.kind,
                                            position: self.current.position });
        }
        self.advance()?;
        Ok(self.previous.clone())
    }

    /// Moves one token forward, keeping the consumed token as `previous`.
    pub(crate) fn advance(&mut self) -> ParseResult<()> {
        let next = self.tokens.next_token()?;
        self.previous = std::mem::replace(&mut self.current, next);
        Ok(())
    }

    /// Returns `true` when the current token is of the given kind.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// The token under the cursor.
    pub(crate) const fn current(&self) -> &Token {
        &self.current
    }

    /// Skips any number of `;` statement separators.
    pub(crate) fn skip_separators(&mut self) -> ParseResult<()> {
        while self.check(TokenKind::Semicolon) {
            self.advance()?;
        }
        Ok(())
    }
}
