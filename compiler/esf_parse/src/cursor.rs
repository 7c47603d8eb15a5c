//! Navigation over the code tokens of the stream.

use esf_ir::{Token, TokenId};

use crate::{ParseError, Parser};

impl<'a> Parser<'a> {
    #[inline]
    pub(crate) fn token(&self, id: TokenId) -> &'a Token {
        let tokens: &'a esf_ir::TokenList = self.tokens;
        &tokens[id]
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.code.len()
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<TokenId> {
        self.code.get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn current_token(&self) -> Option<&'a Token> {
        self.current().map(|id| self.token(id))
    }

    /// The code token `offset` positions ahead of the current one.
    #[inline]
    pub(crate) fn peek_token(&self, offset: usize) -> Option<&'a Token> {
        self.code.get(self.pos + offset).map(|&id| self.token(id))
    }

    /// Whether the current token's text is `value`.
    #[inline]
    pub(crate) fn check(&self, value: &str) -> bool {
        self.current_token().is_some_and(|t| t.is(value))
    }

    /// Whether the token `offset` positions ahead has text `value`.
    #[inline]
    pub(crate) fn peek_is(&self, offset: usize, value: &str) -> bool {
        self.peek_token(offset).is_some_and(|t| t.is(value))
    }

    /// The current token, as the start of a node about to be parsed.
    pub(crate) fn start(&self, expected: &'static str) -> Result<TokenId, ParseError> {
        self.current()
            .ok_or(ParseError::UnexpectedEnd { expected })
    }

    /// Consume the current token.
    pub(crate) fn bump(&mut self) -> Result<TokenId, ParseError> {
        let id = self.start("a token")?;
        self.pos += 1;
        Ok(id)
    }

    /// Consume the current token if its text is `value`.
    pub(crate) fn eat(&mut self, value: &str) -> bool {
        if self.check(value) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token with text `value` or fail.
    pub(crate) fn expect(&mut self, value: &'static str) -> Result<TokenId, ParseError> {
        if self.check(value) {
            self.bump()
        } else {
            Err(self.unexpected(value))
        }
    }

    /// The most recently consumed code token.
    ///
    /// Only called after a node consumed at least one token.
    #[inline]
    pub(crate) fn last_consumed(&self) -> TokenId {
        debug_assert!(self.pos > 0, "no token consumed yet");
        self.code[self.pos - 1]
    }

    /// Error for the current position.
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.current() {
            Some(token) => ParseError::UnexpectedToken {
                found: self.token(token).value.to_string(),
                expected,
                token,
            },
            None => ParseError::UnexpectedEnd { expected },
        }
    }
}
