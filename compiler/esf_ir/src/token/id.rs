//! Typed token handles.

use std::fmt;

/// Handle to a token in a [`TokenList`](super::TokenList).
///
/// Handles stay valid across edits: inserting or removing tokens relinks
/// neighbours but never moves existing tokens in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TokenId(u32);

impl TokenId {
    /// Create a `TokenId` from a raw arena index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        TokenId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.0)
    }
}

crate::static_assert_size!(TokenId, 4);
crate::static_assert_size!(Option<TokenId>, 8);
