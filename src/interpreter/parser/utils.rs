use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by call arguments, array literals and function
    /// parameter lists. It repeatedly calls `parse_item` to parse one element,
    /// expecting either:
    ///
    /// - a comma, to continue the list, or
    /// - the specified closing token, to end it.
    ///
    /// An immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or if anything other
    /// than a comma or the closing token follows an item.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: TokenKind)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.check(closing) {
            self.advance()?;
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);
            if self.check(TokenKind::Comma) {
                self.advance()?;
                continue;
            }
            self.eat(closing)?;
            break;
        }

        Ok(items)
    }

    /// Parses a plain identifier and returns its name.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<String> {
        Ok(self.eat(TokenKind::Identifier)?.text().to_string())
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all kinds that are not binary operators.
///
/// # Example
/// ```
/// use seta::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::utils::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Arrow), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
