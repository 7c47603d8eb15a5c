//! Syntax nodes and the node arena.
//!
//! Nodes carry only what formatting rules need: a kind, the span over the
//! token stream (first and last token, parentheses of the node itself
//! excluded), child handles for traversal, and the `expression` / `callee`
//! links some rules inspect directly.

mod arena;
mod kind;

pub use arena::NodeArena;
pub use kind::NodeKind;

use std::fmt;

use smallvec::SmallVec;

use crate::TokenId;

/// Child list, inline for the common case of at most four children.
pub type NodeChildren = SmallVec<[NodeId; 4]>;

/// Handle to a node in a [`NodeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

crate::static_assert_size!(NodeId, 4);
crate::static_assert_size!(NodeKind, 1);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A syntax node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// First token of the node's span.
    pub start_token: Option<TokenId>,
    /// Last token of the node's span.
    pub end_token: Option<TokenId>,
    /// Wrapped expression of an `ExpressionStatement`.
    pub expression: Option<NodeId>,
    /// Callee of a `CallExpression` or `NewExpression`.
    pub callee: Option<NodeId>,
    /// All children in source order (including `expression` / `callee`).
    pub children: NodeChildren,
}

impl Node {
    pub fn new(kind: NodeKind, start_token: Option<TokenId>, end_token: Option<TokenId>) -> Self {
        Node {
            kind,
            start_token,
            end_token,
            expression: None,
            callee: None,
            children: NodeChildren::new(),
        }
    }

    /// Node spanning `start..=end`.
    pub fn spanning(kind: NodeKind, start: TokenId, end: TokenId) -> Self {
        Node::new(kind, Some(start), Some(end))
    }

    #[must_use]
    pub fn with_expression(mut self, expression: NodeId) -> Self {
        self.expression = Some(expression);
        self
    }

    #[must_use]
    pub fn with_callee(mut self, callee: NodeId) -> Self {
        self.callee = Some(callee);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeId>) -> Self {
        self.children.extend(children);
        self
    }
}
