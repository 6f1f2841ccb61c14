use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a factor, the highest-precedence construct.
    ///
    /// A factor is one of:
    /// - a parenthesized expression,
    /// - a prefix `-`, `+` or `!` applied to another factor,
    /// - an identifier or a call,
    /// - a number, string, boolean or `nil` literal,
    /// - an array literal.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "(" expression ")"
    ///             | ("-" | "+" | "!") factor
    ///             | name
    ///             | NUMBER | STRING | "true" | "false" | "nil"
    ///             | "[" (expression ("," expression)*)? "]"
    /// ```
    ///
    /// # Errors
    /// Anything else is reported as a syntax error expecting a number.
    pub fn parse_factor(&mut self) -> ParseResult<Node> {
        let position = self.current().position;

        match self.current().kind {
            TokenKind::LParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.eat(TokenKind::RParen)?;
                Ok(expr)
            },
            TokenKind::Minus | TokenKind::Plus | TokenKind::Bang => {
                let op = match self.current().kind {
                    TokenKind::Minus => UnaryOperator::Negate,
                    TokenKind::Plus => UnaryOperator::Plus,
                    _ => UnaryOperator::Not,
                };
                self.advance()?;
                let operand = self.parse_factor()?;
                Ok(Node::Unary { op,
                                 operand: Box::new(operand),
                                 position })
            },
            TokenKind::Identifier => self.parse_name(),
            TokenKind::String => {
                let token = self.eat(TokenKind::String)?;
                Ok(Node::String { value: token.text().to_string(),
                                  position })
            },
            TokenKind::True | TokenKind::False => {
                let value = self.check(TokenKind::True);
                self.advance()?;
                Ok(Node::Bool { value, position })
            },
            TokenKind::Nil => {
                self.advance()?;
                Ok(Node::Nil { position })
            },
            TokenKind::LBracket => {
                self.advance()?;
                let elements = self.parse_comma_separated(Self::parse_expression, TokenKind::RBracket)?;
                Ok(Node::Array { elements, position })
            },
            _ => {
                let token = self.eat(TokenKind::Number)?;
                let value = token.number().ok_or(ParseError::Syntax { expected: TokenKind::Number,
                                                                      got: token.kind,
                                                                      position })?;
                Ok(Node::Number { value, position })
            },
        }
    }

    /// Parses an identifier, or a call when the identifier is immediately
    /// followed by `(`.
    ///
    /// Call arguments are full expressions separated by commas.
    ///
    /// Grammar: `name := IDENTIFIER ("(" (expression ("," expression)*)? ")")?`
    pub fn parse_name(&mut self) -> ParseResult<Node> {
        let token = self.eat(TokenKind::Identifier)?;
        let name = token.text().to_string();
        let position = token.position;

        if self.check(TokenKind::LParen) {
            self.advance()?;
            let arguments = self.parse_comma_separated(Self::parse_expression, TokenKind::RParen)?;
            return Ok(Node::Call { name,
                                   arguments,
                                   position });
        }

        Ok(Node::Identifier { name, position })
    }
}
