use std::rc::Rc;

use crate::{
    ast::{ElifBranch, FunctionDef, Node},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a variable declaration (`val name = expr`),
    /// - a conditional (`if cond -> ... .`),
    /// - a bare block (`-> ... .`),
    /// - an expression, reclassified as an assignment when it is a bare
    ///   identifier followed by `=`.
    ///
    /// Function definitions are not statements; only [`Parser::parse`] accepts
    /// them, at top level.
    pub fn parse_statement(&mut self) -> ParseResult<Node> {
        match self.current().kind {
            TokenKind::Val => self.parse_variable_declaration(),
            TokenKind::If => self.parse_if(),
            TokenKind::Arrow => self.parse_compound(),
            _ => match self.parse_expression()? {
                Node::Identifier { name, position } if self.check(TokenKind::Equals) => {
                    self.parse_var_set(name, position)
                },
                expr => Ok(expr),
            },
        }
    }

    /// Parses `val name = expr`.
    fn parse_variable_declaration(&mut self) -> ParseResult<Node> {
        let position = self.eat(TokenKind::Val)?.position;
        let name = self.parse_identifier()?;
        self.eat(TokenKind::Equals)?;
        let value = self.parse_expression()?;

        Ok(Node::VarDecl { name,
                           value: Box::new(value),
                           position })
    }

    /// Parses the `= expr` tail of an assignment to `name`.
    fn parse_var_set(&mut self, name: String, position: usize) -> ParseResult<Node> {
        self.eat(TokenKind::Equals)?;
        let value = self.parse_expression()?;

        Ok(Node::VarSet { name,
                          value: Box::new(value),
                          position })
    }

    /// Parses a conditional with any number of `elif` branches and an optional
    /// `else`.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition> -> ... .
    ///     elif <condition> -> ... .
    ///     else -> ... .
    /// ```
    fn parse_if(&mut self) -> ParseResult<Node> {
        let position = self.eat(TokenKind::If)?.position;
        let condition = self.parse_expression()?;
        let then_block = self.parse_compound()?;

        let mut elifs = Vec::new();
        while self.check(TokenKind::Elif) {
            self.advance()?;
            let condition = self.parse_expression()?;
            let block = self.parse_compound()?;
            elifs.push(ElifBranch { condition, block });
        }

        let else_block = if self.check(TokenKind::Else) {
            self.advance()?;
            Some(Box::new(self.parse_compound()?))
        } else {
            None
        };

        Ok(Node::If { condition: Box::new(condition),
                      then_block: Box::new(then_block),
                      elifs,
                      else_block,
                      position })
    }

    /// Parses a function definition.
    ///
    /// The parameter list is optional; `fn name -> ... .` declares a function
    /// without parameters.
    ///
    /// Grammar: `function := "fn" IDENTIFIER ("(" (IDENTIFIER ("," IDENTIFIER)*)? ")")? block`
    pub fn parse_function(&mut self) -> ParseResult<Node> {
        let position = self.eat(TokenKind::Fn)?.position;
        let name = self.parse_identifier()?;

        let params = if self.check(TokenKind::LParen) {
            self.advance()?;
            self.parse_comma_separated(Self::parse_identifier, TokenKind::RParen)?
        } else {
            Vec::new()
        };

        let (body, _) = self.parse_block_statements()?;

        Ok(Node::Function(Rc::new(FunctionDef { name,
                                                params,
                                                body,
                                                position })))
    }
}
