//! Doubly linked token arena.

use std::fmt;
use std::ops::Index;

use super::{Token, TokenId};

/// Neighbour links for one arena slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Link {
    prev: Option<TokenId>,
    next: Option<TokenId>,
    removed: bool,
}

// Two Option<TokenId> (8 bytes each) + flag, padded to u32 alignment
crate::static_assert_size!(Link, 20);

/// An ordered, doubly linked sequence of tokens held in an arena.
///
/// Tokens are appended to a flat `Vec` and addressed by [`TokenId`]. Order is
/// carried by the parallel `links` array, so insertions and removals are
/// O(1) and never invalidate handles held elsewhere (for example by syntax
/// nodes pointing at their first and last tokens).
///
/// A removed token keeps its slot: indexing it still works, but it is no
/// longer reachable through `first`/`next`/`iter`.
#[derive(Clone, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `links[i]` belongs to `tokens[i]`.
    links: Vec<Link>,
    first: Option<TokenId>,
    last: Option<TokenId>,
    live: usize,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList::default()
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            links: Vec::with_capacity(capacity),
            ..TokenList::default()
        }
    }

    /// Number of linked (non-removed) tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Get a token by handle, including removed ones.
    #[inline]
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    /// Whether `id` is still linked into the sequence.
    #[inline]
    pub fn contains(&self, id: TokenId) -> bool {
        self.links.get(id.index()).is_some_and(|link| !link.removed)
    }

    #[inline]
    pub fn first(&self) -> Option<TokenId> {
        self.first
    }

    #[inline]
    pub fn last(&self) -> Option<TokenId> {
        self.last
    }

    #[inline]
    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        self.links.get(id.index()).and_then(|link| link.prev)
    }

    #[inline]
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        self.links.get(id.index()).and_then(|link| link.next)
    }

    /// Append a token at the end of the sequence.
    pub fn push(&mut self, token: Token) -> TokenId {
        let id = self.alloc(token);
        self.links[id.index()].prev = self.last;
        match self.last {
            Some(last) => self.links[last.index()].next = Some(id),
            None => self.first = Some(id),
        }
        self.last = Some(id);
        id
    }

    /// Link a new token directly before `anchor`.
    pub fn insert_before(&mut self, anchor: TokenId, token: Token) -> TokenId {
        debug_assert!(self.contains(anchor), "insert_before on unlinked token");
        let id = self.alloc(token);
        let prev = self.links[anchor.index()].prev;
        self.links[id.index()].prev = prev;
        self.links[id.index()].next = Some(anchor);
        self.links[anchor.index()].prev = Some(id);
        match prev {
            Some(prev) => self.links[prev.index()].next = Some(id),
            None => self.first = Some(id),
        }
        id
    }

    /// Link a new token directly after `anchor`.
    pub fn insert_after(&mut self, anchor: TokenId, token: Token) -> TokenId {
        debug_assert!(self.contains(anchor), "insert_after on unlinked token");
        let id = self.alloc(token);
        let next = self.links[anchor.index()].next;
        self.links[id.index()].prev = Some(anchor);
        self.links[id.index()].next = next;
        self.links[anchor.index()].next = Some(id);
        match next {
            Some(next) => self.links[next.index()].prev = Some(id),
            None => self.last = Some(id),
        }
        id
    }

    /// Unlink a token. Removing an already removed token is a no-op.
    pub fn remove(&mut self, id: TokenId) {
        if !self.contains(id) {
            return;
        }
        let Link { prev, next, .. } = self.links[id.index()];
        match prev {
            Some(prev) => self.links[prev.index()].next = next,
            None => self.first = next,
        }
        match next {
            Some(next) => self.links[next.index()].prev = prev,
            None => self.last = prev,
        }
        self.links[id.index()] = Link {
            prev: None,
            next: None,
            removed: true,
        };
        self.live -= 1;
    }

    /// Replace the literal text of a token, keeping its kind and position.
    pub fn set_value(&mut self, id: TokenId, value: impl Into<Box<str>>) {
        if let Some(token) = self.tokens.get_mut(id.index()) {
            token.value = value.into();
        }
    }

    /// Nearest token strictly before `id` satisfying `predicate`.
    pub fn find_prev(&self, id: TokenId, predicate: impl Fn(&Token) -> bool) -> Option<TokenId> {
        let mut cursor = self.prev(id);
        while let Some(current) = cursor {
            if predicate(&self.tokens[current.index()]) {
                return Some(current);
            }
            cursor = self.prev(current);
        }
        None
    }

    /// Nearest token strictly after `id` satisfying `predicate`.
    pub fn find_next(&self, id: TokenId, predicate: impl Fn(&Token) -> bool) -> Option<TokenId> {
        let mut cursor = self.next(id);
        while let Some(current) = cursor {
            if predicate(&self.tokens[current.index()]) {
                return Some(current);
            }
            cursor = self.next(current);
        }
        None
    }

    /// Nearest preceding token that is neither whitespace nor a comment.
    #[inline]
    pub fn find_prev_code(&self, id: TokenId) -> Option<TokenId> {
        self.find_prev(id, Token::is_code)
    }

    /// Nearest following token that is neither whitespace nor a comment.
    #[inline]
    pub fn find_next_code(&self, id: TokenId) -> Option<TokenId> {
        self.find_next(id, Token::is_code)
    }

    /// Iterate linked tokens in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.first,
        }
    }

    /// Iterate linked tokens in order, starting at `id` (inclusive).
    pub fn iter_from(&self, id: TokenId) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.contains(id).then_some(id),
        }
    }

    /// Concatenate the values of all linked tokens.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for (_, token) in self {
            out.push_str(&token.value);
        }
        out
    }

    fn alloc(&mut self, token: Token) -> TokenId {
        let Ok(index) = u32::try_from(self.tokens.len()) else {
            panic!("token arena exceeded u32::MAX entries");
        };
        self.tokens.push(token);
        self.links.push(Link::default());
        self.live += 1;
        TokenId::new(index)
    }
}

impl Index<TokenId> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut list = TokenList::new();
        for token in iter {
            list.push(token);
        }
        list
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|(_, token)| token))
            .finish()
    }
}

/// In-order iterator over linked tokens.
pub struct Iter<'a> {
    list: &'a TokenList,
    cursor: Option<TokenId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (TokenId, &'a Token);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.list.next(id);
        Some((id, &self.list[id]))
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = (TokenId, &'a Token);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
