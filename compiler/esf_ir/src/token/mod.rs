//! Tokens and the linked token arena.
//!
//! The lexer produces every byte of the source as a token, trivia included,
//! so that concatenating token values reproduces the input exactly. The
//! formatter edits whitespace by relinking the arena, never by re-lexing.

mod id;
mod kind;
mod list;

pub use id::TokenId;
pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

/// A token: its lexical category and its literal text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Box<str>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: impl Into<Box<str>>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    /// A whitespace token of `count` spaces.
    pub fn spaces(count: usize) -> Self {
        Token::new(TokenKind::WhiteSpace, " ".repeat(count))
    }

    /// A punctuator token.
    pub fn punct(value: &str) -> Self {
        Token::new(TokenKind::Punctuator, value)
    }

    /// Check the literal text of this token.
    #[inline]
    pub fn is(&self, value: &str) -> bool {
        &*self.value == value
    }

    #[inline]
    pub fn is_code(&self) -> bool {
        self.kind.is_code()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)
    }
}

// Tokens live in a flat arena, keep them compact.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // Box<str> (16 bytes) + TokenKind (1 byte), padded
    crate::static_assert_size!(Token, 24);
    crate::static_assert_size!(TokenKind, 1);
}
