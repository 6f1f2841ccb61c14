use crate::{
    ast::Node,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a block delimited by `->` and `.`.
    ///
    /// A block consists of zero or more statements, optionally separated by
    /// `;`. Parsing continues until the closing `.` is encountered.
    ///
    /// Grammar: `block := "->" statement* "."`
    ///
    /// The resulting node is `Node::Compound { statements, position }`.
    pub fn parse_compound(&mut self) -> ParseResult<Node> {
        let (statements, position) = self.parse_block_statements()?;
        Ok(Node::Compound { statements,
                            position })
    }

    /// Parses a block and returns its statements together with the position
    /// of its opening `->`.
    pub(in crate::interpreter::parser) fn parse_block_statements(&mut self)
                                                                 -> ParseResult<(Vec<Node>, usize)> {
        let position = self.eat(TokenKind::Arrow)?.position;
        let mut statements = Vec::new();

        self.skip_separators()?;
        while !self.check(TokenKind::Dot) && !self.check(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
            self.skip_separators()?;
        }
        self.eat(TokenKind::Dot)?;

        Ok((statements, position))
    }
}
