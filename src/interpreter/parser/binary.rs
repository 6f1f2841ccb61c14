use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::TokenSource,
        parser::{
            core::{ParseResult, Parser},
            utils::token_to_binary_operator,
        },
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses logical `and` / `or` expressions.
    ///
    /// Both operators share one precedence level and fold to the left.
    ///
    /// Grammar: `logical := comparison (("and" | "or") comparison)*`
    pub fn parse_logical(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.binary_operator(&[BinaryOperator::And, BinaryOperator::Or]) {
            let position = self.current().position;
            self.advance()?;

            let right = self.parse_comparison()?;
            left = Node::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  position };
        }

        Ok(left)
    }

    /// Parses a relational or equality comparison.
    ///
    /// At most one comparison operator is accepted per level, so comparisons
    /// do not chain: in `1 < 2 < 3` the second `<` is left for the caller,
    /// which rejects it.
    ///
    /// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=" | "==" | "!=") additive)?`
    pub fn parse_comparison(&mut self) -> ParseResult<Node> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let left = self.parse_additive()?;

        let Some(op) = self.binary_operator(&[Less, Greater, LessEqual, GreaterEqual, Equal, NotEqual])
        else {
            return Ok(left);
        };
        let position = self.current().position;
        self.advance()?;

        let right = self.parse_additive()?;
        Ok(Node::Binary { left: Box::new(left),
                          op,
                          right: Box::new(right),
                          position })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub fn parse_additive(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.binary_operator(&[BinaryOperator::Add, BinaryOperator::Sub]) {
            let position = self.current().position;
            self.advance()?;

            let right = self.parse_multiplicative()?;
            left = Node::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  position };
        }

        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Grammar: `multiplicative := power (("*" | "/") power)*`
    pub fn parse_multiplicative(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_power()?;

        while let Some(op) = self.binary_operator(&[BinaryOperator::Mul, BinaryOperator::Div]) {
            let position = self.current().position;
            self.advance()?;

            let right = self.parse_power()?;
            left = Node::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  position };
        }

        Ok(left)
    }

    /// Parses exponentiation expressions.
    ///
    /// Powers fold to the left like every other arithmetic level:
    /// `2 ^ 3 ^ 2` parses as `(2 ^ 3) ^ 2`.
    ///
    /// Grammar: `power := factor ("^" factor)*`
    pub fn parse_power(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.binary_operator(&[BinaryOperator::Pow]) {
            let position = self.current().position;
            self.advance()?;

            let right = self.parse_factor()?;
            left = Node::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  position };
        }

        Ok(left)
    }

    /// Returns the operator under the cursor if it is one of `accepted`.
    fn binary_operator(&self, accepted: &[BinaryOperator]) -> Option<BinaryOperator> {
        token_to_binary_operator(self.current().kind).filter(|op| accepted.contains(op))
    }
}
